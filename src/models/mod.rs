// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, Gender, MatchRecord, SeekerProfile};
pub use requests::InvokeToolRequest;
pub use responses::{ErrorResponse, HealthResponse, ToolListResponse, ToolResponse, ToolSpec};
