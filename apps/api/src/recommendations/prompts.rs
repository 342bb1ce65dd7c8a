// Prompt constants for the recommendation endpoint.
// The template text matches the deployed endpoint so model behavior stays
// comparable across clients; placeholders are substituted by `prompt`.

/// Recommendation prompt template. Replace {blood_type}, {age}, {gender},
/// {physical_score}, {emotional_score}, {intellectual_score},
/// {medical_history}, and {questionnaires} before sending.
///
/// The JSON structure at the end is a request to the model, not a contract:
/// the reply is untrusted free text and goes through tolerant extraction.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"You are a health and wellness expert. Based on the following user data, provide personalized health recommendations:

User Profile:
- Blood Type: {blood_type}
- Age: {age}
- Gender: {gender}

Biometric Readings:
- Physical Score: {physical_score}/100
- Emotional Score: {emotional_score}/100
- Intellectual Score: {intellectual_score}/100

Medical History:
{medical_history}

Questionnaire Responses:
{questionnaires}

Please provide:
1. Top 3 personalized health recommendations
2. Recommended exercises based on their condition
3. Suggested dietary changes
4. Stress management techniques
5. Supplements or herbs that might benefit them

Format the response as JSON with the following structure:
{
  "recommendations": ["recommendation1", "recommendation2", "recommendation3"],
  "exercise": ["exercise1", "exercise2"],
  "diet": ["diet1", "diet2"],
  "stress_management": ["technique1", "technique2"],
  "supplements": ["supplement1", "supplement2"]
}"#;

/// Placeholder literals substituted when a field is missing from the request.
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NOT_AVAILABLE: &str = "Not available";
pub const UNSPECIFIED_SEVERITY: &str = "unspecified severity";
pub const NO_MEDICAL_HISTORY: &str = "- No medical history recorded";
pub const NO_QUESTIONNAIRE_DATA: &str = "No questionnaire data available";
