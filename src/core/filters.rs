use crate::models::{Candidate, Gender};

/// Relationship status a candidate must have to be offered as a match
pub const ELIGIBLE_STATUS: &str = "single";

/// Check whether a candidate can be offered to a seeker looking for `target`
///
/// The candidate must have the target gender and be single. The status is
/// compared case-insensitively, like every other text comparison here.
#[inline]
pub fn is_eligible(candidate: &Candidate, target: Gender) -> bool {
    candidate.gender == target
        && candidate.relationship_status.to_lowercase() == ELIGIBLE_STATUS
}

/// Case-insensitive exact comparison of the candidate's city with the seeker's
#[inline]
pub fn same_location(candidate: &Candidate, seeker_location: &str) -> bool {
    candidate.location.to_lowercase() == seeker_location.to_lowercase()
}
