use crate::models::Candidate;
use crate::core::filters::same_location;

/// A selection tier: a predicate over already-eligible candidates
///
/// Tiers are tried in order. The first tier that admits any candidate decides
/// the result, and within a tier the earliest candidate in pool order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Candidate lives in the seeker's city
    SameLocation,
    /// Any eligible candidate, regardless of location
    AnyEligible,
}

/// Tiers used by the matcher unless configured otherwise
pub const DEFAULT_TIERS: [Tier; 2] = [Tier::SameLocation, Tier::AnyEligible];

impl Tier {
    #[inline]
    pub fn admits(&self, candidate: &Candidate, seeker_location: &str) -> bool {
        match self {
            Tier::SameLocation => same_location(candidate, seeker_location),
            Tier::AnyEligible => true,
        }
    }
}

/// Pick the best candidate among `eligible` (kept in pool order)
pub fn select_best<'a>(
    eligible: &[&'a Candidate],
    tiers: &[Tier],
    seeker_location: &str,
) -> Option<(&'a Candidate, Tier)> {
    tiers.iter().find_map(|tier| {
        eligible
            .iter()
            .find(|candidate| tier.admits(candidate, seeker_location))
            .map(|candidate| (*candidate, *tier))
    })
}
