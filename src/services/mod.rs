// Service exports
pub mod pool;
pub mod tool;

pub use pool::{CandidatePool, PoolError};
pub use tool::{FinderCouple, Tool, ToolError, ToolRegistry, FINDER_COUPLE};
