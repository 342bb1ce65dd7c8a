//! Request and response shapes for the recommendation endpoint.
//!
//! Everything here is request-scoped: nothing is persisted, cached, or keyed
//! by identity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /`. Only `userProfile` is required; every other field
/// degrades to a human-readable placeholder in the prompt.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationRequest {
    pub user_profile: Option<UserProfile>,
    pub biometric_data: Option<BiometricData>,
    pub medical_history: Option<Vec<MedicalCondition>>,
    /// Arbitrary nested questionnaire answers, forwarded as-is into the prompt.
    pub questionnaires: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub blood_type: Option<String>,
    /// Age as the client sends it — number or string — interpolated into the
    /// prompt as-is.
    pub age: Option<Value>,
    pub gender: Option<String>,
}

/// Daily biorhythm scores, each 0–100 and independently nullable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BiometricData {
    pub physical_score: Option<u8>,
    pub emotional_score: Option<u8>,
    pub intellectual_score: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MedicalCondition {
    pub condition_name: String,
    #[serde(default)]
    pub severity: Option<String>,
}

/// The shape the prompt asks the model for. A successfully extracted model
/// object is passed through verbatim without being coerced into this struct;
/// it backs the degraded fallback and documents the expected schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub exercise: Vec<String>,
    #[serde(default)]
    pub diet: Vec<String>,
    #[serde(default)]
    pub stress_management: Vec<String>,
    #[serde(default)]
    pub supplements: Vec<String>,
    /// Present only when structured extraction failed and the raw model text
    /// is returned instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl RecommendationResult {
    /// Degraded result: schema-valid, all five arrays empty, raw text kept.
    pub fn degraded(raw_response: String) -> Self {
        Self {
            raw_response: Some(raw_response),
            ..Self::default()
        }
    }
}
