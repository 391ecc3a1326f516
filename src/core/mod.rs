// Core algorithm exports
pub mod contact;
pub mod filters;
pub mod matcher;
pub mod ranking;

pub use contact::{contact_link, GREETING};
pub use filters::{is_eligible, same_location};
pub use matcher::{MatchError, MatchOutcome, Matcher};
pub use ranking::{select_best, Tier, DEFAULT_TIERS};
