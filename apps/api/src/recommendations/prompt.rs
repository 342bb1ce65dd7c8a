//! Prompt Builder — renders the recommendation prompt from request data.
//!
//! Pure and deterministic: the same request always yields the same string.
//! Missing fields render as human-readable placeholders rather than being
//! dropped, so the model always sees the full template shape.

use serde_json::Value;

use crate::recommendations::models::{BiometricData, MedicalCondition, RecommendationRequest};
use crate::recommendations::prompts::{
    NOT_AVAILABLE, NOT_SPECIFIED, NO_MEDICAL_HISTORY, NO_QUESTIONNAIRE_DATA,
    RECOMMENDATION_PROMPT_TEMPLATE, UNSPECIFIED_SEVERITY,
};

/// Renders the full prompt for a request.
pub fn build_prompt(request: &RecommendationRequest) -> String {
    let profile = request.user_profile.clone().unwrap_or_default();
    let biometrics = request.biometric_data.as_ref();

    RECOMMENDATION_PROMPT_TEMPLATE
        .replace(
            "{blood_type}",
            profile.blood_type.as_deref().unwrap_or(NOT_SPECIFIED),
        )
        .replace(
            "{age}",
            &profile
                .age
                .as_ref()
                .map(json_scalar)
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        )
        .replace(
            "{gender}",
            profile.gender.as_deref().unwrap_or(NOT_SPECIFIED),
        )
        .replace(
            "{physical_score}",
            &score_field(biometrics, |b| b.physical_score),
        )
        .replace(
            "{emotional_score}",
            &score_field(biometrics, |b| b.emotional_score),
        )
        .replace(
            "{intellectual_score}",
            &score_field(biometrics, |b| b.intellectual_score),
        )
        .replace(
            "{medical_history}",
            &render_medical_history(request.medical_history.as_deref()),
        )
        .replace(
            "{questionnaires}",
            &render_questionnaires(request.questionnaires.as_ref()),
        )
}

/// Loosely-typed scalar rendering: strings interpolate bare, anything else in
/// JSON notation.
fn json_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Score value, or "Not available" when the biometric object or the specific
/// field is missing. The template appends "/100" either way.
fn score_field(
    biometrics: Option<&BiometricData>,
    get: impl Fn(&BiometricData) -> Option<u8>,
) -> String {
    biometrics
        .and_then(get)
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn render_medical_history(history: Option<&[MedicalCondition]>) -> String {
    match history {
        Some(entries) if !entries.is_empty() => entries
            .iter()
            .map(|c| {
                format!(
                    "- {} ({})",
                    c.condition_name,
                    c.severity.as_deref().unwrap_or(UNSPECIFIED_SEVERITY)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => NO_MEDICAL_HISTORY.to_string(),
    }
}

fn render_questionnaires(questionnaires: Option<&Value>) -> String {
    match questionnaires {
        Some(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        None => NO_QUESTIONNAIRE_DATA.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::models::UserProfile;
    use serde_json::json;

    fn full_request() -> RecommendationRequest {
        RecommendationRequest {
            user_profile: Some(UserProfile {
                blood_type: Some("O+".to_string()),
                age: Some(json!(34)),
                gender: Some("female".to_string()),
            }),
            biometric_data: Some(BiometricData {
                physical_score: Some(85),
                emotional_score: Some(60),
                intellectual_score: None,
            }),
            medical_history: Some(vec![
                MedicalCondition {
                    condition_name: "Asthma".to_string(),
                    severity: Some("mild".to_string()),
                },
                MedicalCondition {
                    condition_name: "Migraine".to_string(),
                    severity: None,
                },
            ]),
            questionnaires: Some(json!({"sleep": {"hours": 6}})),
        }
    }

    #[test]
    fn test_full_request_renders_values() {
        let prompt = build_prompt(&full_request());
        assert!(prompt.contains("- Blood Type: O+"));
        assert!(prompt.contains("- Age: 34"));
        assert!(prompt.contains("- Gender: female"));
        assert!(prompt.contains("- Physical Score: 85/100"));
        assert!(prompt.contains("- Emotional Score: 60/100"));
        assert!(prompt.contains("- Asthma (mild)"));
        assert!(prompt.contains("- Migraine (unspecified severity)"));
        assert!(prompt.contains("\"hours\": 6"));
    }

    #[test]
    fn test_missing_profile_fields_render_not_specified() {
        let request = RecommendationRequest {
            user_profile: Some(UserProfile::default()),
            ..Default::default()
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("- Blood Type: Not specified"));
        assert!(prompt.contains("- Age: Not specified"));
        assert!(prompt.contains("- Gender: Not specified"));
    }

    #[test]
    fn test_string_age_renders_bare() {
        let request = RecommendationRequest {
            user_profile: Some(UserProfile {
                age: Some(json!("thirty")),
                ..Default::default()
            }),
            ..Default::default()
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("- Age: thirty"));
    }

    #[test]
    fn test_missing_biometrics_render_not_available() {
        let request = RecommendationRequest {
            user_profile: Some(UserProfile::default()),
            ..Default::default()
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("- Physical Score: Not available/100"));
        assert!(prompt.contains("- Emotional Score: Not available/100"));
        assert!(prompt.contains("- Intellectual Score: Not available/100"));
    }

    #[test]
    fn test_individual_score_can_be_missing() {
        let prompt = build_prompt(&full_request());
        assert!(prompt.contains("- Intellectual Score: Not available/100"));
    }

    #[test]
    fn test_empty_medical_history_renders_placeholder_line() {
        let request = RecommendationRequest {
            user_profile: Some(UserProfile::default()),
            medical_history: Some(vec![]),
            ..Default::default()
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("- No medical history recorded"));
    }

    #[test]
    fn test_absent_questionnaires_render_placeholder() {
        let request = RecommendationRequest {
            user_profile: Some(UserProfile::default()),
            ..Default::default()
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("No questionnaire data available"));
    }

    #[test]
    fn test_template_instruction_block_survives_substitution() {
        // The literal JSON example in the template uses braces too; make sure
        // placeholder substitution leaves it intact.
        let prompt = build_prompt(&full_request());
        assert!(prompt.contains("Format the response as JSON"));
        assert!(prompt.contains(r#""stress_management": ["technique1", "technique2"]"#));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let request = full_request();
        assert_eq!(build_prompt(&request), build_prompt(&request));
    }
}
