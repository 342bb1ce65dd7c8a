//! Wellness API — AI-recommendation proxy for the wellness tracking client.
//!
//! The service fronts the Anthropic Messages API: it validates the incoming
//! profile payload, renders a fixed prompt from profile, biometric, medical
//! history and questionnaire data, performs a single upstream call, and
//! tolerantly extracts a JSON object from the model's free-text reply.

pub mod config;
pub mod errors;
pub mod llm_client;
pub mod recommendations;
pub mod routes;
pub mod state;
