use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::domain::{Candidate, MatchRecord};

/// Structured output of the matching tool
///
/// `message` is always present and meant for display. `match` mirrors the
/// candidate profile and is only set when a candidate was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub message: String,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_link: Option<String>,
}

impl ToolResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            matched: None,
            contact_link: None,
        }
    }

    pub fn found(message: impl Into<String>, record: MatchRecord) -> Self {
        Self {
            message: message.into(),
            matched: Some(record.candidate),
            contact_link: Some(record.contact_link),
        }
    }
}

/// Description of a callable tool, in the shape agent frameworks register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Response for the tool listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolSpec>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub candidates: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
