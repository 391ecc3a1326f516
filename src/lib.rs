//! Rishta Match - candidate matching tool for the RishtaGPT chat assistant
//!
//! The conversation and the language model live elsewhere; once the agent has
//! collected a user's details it calls the `finder_couple` tool exposed here,
//! which picks a partner from a fixed candidate pool and returns a contact link.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchError, MatchOutcome, Tier};
pub use models::{Candidate, Gender, MatchRecord, SeekerProfile, ToolResponse, ToolSpec};
pub use services::{CandidatePool, PoolError, ToolRegistry};
