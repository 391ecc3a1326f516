use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::SeekerProfile;

/// Request to invoke a registered tool
///
/// The persona is nested under `persona_data`, the single parameter the tool
/// declares to the agent framework.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InvokeToolRequest {
    #[validate(nested)]
    pub persona_data: SeekerProfile,
}
