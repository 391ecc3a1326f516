use crate::core::{
    contact::contact_link,
    filters::is_eligible,
    ranking::{select_best, Tier, DEFAULT_TIERS},
};
use crate::models::{Candidate, Gender, MatchRecord, SeekerProfile, ToolResponse};
use crate::services::CandidatePool;
use std::sync::Arc;
use thiserror::Error;

pub const NO_MATCH_MESSAGE: &str = "❌ Sorry, no match found at the moment.";

/// Matching failures the caller should surface to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Carries the raw value the seeker supplied
    #[error("Invalid gender. Please specify 'male' or 'female'.")]
    InvalidGender(String),
}

/// Result of a successful matching run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Found(MatchRecord),
    /// No eligible candidate exists. A normal outcome, not a fault.
    NoMatch,
}

/// Candidate matcher over an immutable pool
///
/// # Pipeline
/// 1. Validate the seeker's gender and derive the target gender
/// 2. Keep single candidates of the target gender, in pool order
/// 3. Walk the ranking tiers; the first tier admitting anyone picks its
///    earliest candidate
/// 4. Build the contact link for the selected candidate
///
/// Matching reads the shared pool only, so one `Matcher` can serve any number
/// of concurrent requests.
#[derive(Debug, Clone)]
pub struct Matcher {
    pool: Arc<CandidatePool>,
    tiers: Vec<Tier>,
}

impl Matcher {
    pub fn new(pool: Arc<CandidatePool>) -> Self {
        Self::with_tiers(pool, DEFAULT_TIERS.to_vec())
    }

    pub fn with_tiers(pool: Arc<CandidatePool>, tiers: Vec<Tier>) -> Self {
        Self { pool, tiers }
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Find the best candidate for a seeker
    ///
    /// # Returns
    /// `MatchOutcome::Found` with the candidate and contact link, or
    /// `MatchOutcome::NoMatch` when nobody is eligible.
    ///
    /// # Errors
    /// `MatchError::InvalidGender` when the seeker's gender is not
    /// `male`/`female` in any casing.
    pub fn find_match(&self, seeker: &SeekerProfile) -> Result<MatchOutcome, MatchError> {
        let seeker_gender = Gender::parse(&seeker.gender)
            .ok_or_else(|| MatchError::InvalidGender(seeker.gender.clone()))?;
        let target = seeker_gender.opposite();

        let eligible: Vec<&Candidate> = self
            .pool
            .candidates()
            .iter()
            .filter(|candidate| is_eligible(candidate, target))
            .collect();

        tracing::debug!(
            "{} eligible {} candidates out of {}",
            eligible.len(),
            target,
            self.pool.len()
        );

        match select_best(&eligible, &self.tiers, &seeker.location) {
            Some((candidate, tier)) => {
                tracing::debug!("Selected {} via {:?}", candidate.name, tier);
                Ok(MatchOutcome::Found(MatchRecord {
                    contact_link: contact_link(&candidate.whatsapp_no),
                    candidate: candidate.clone(),
                }))
            }
            None => Ok(MatchOutcome::NoMatch),
        }
    }

    /// Run the matcher and render the outcome as the tool's structured output
    pub fn respond(&self, seeker: &SeekerProfile) -> ToolResponse {
        match self.find_match(seeker) {
            Ok(MatchOutcome::Found(record)) => {
                let message = format!(
                    "✅ Best match found!\nClick here to contact your Partner: {}",
                    record.contact_link
                );
                ToolResponse::found(message, record)
            }
            Ok(MatchOutcome::NoMatch) => ToolResponse::message(NO_MATCH_MESSAGE),
            Err(e) => {
                tracing::debug!("Rejected seeker profile: gender={:?}", seeker.gender);
                ToolResponse::message(e.to_string())
            }
        }
    }
}
