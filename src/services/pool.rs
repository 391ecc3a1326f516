use crate::models::Candidate;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Pool shipped with the binary, used when no pool file is configured
const EMBEDDED_POOL: &str = include_str!("../../data/candidates.toml");

/// Errors that can occur while loading the candidate pool
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Failed to read pool file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pool file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Candidate {name} has an invalid contact number: {handle:?}")]
    InvalidContact { name: String, handle: String },
}

#[derive(Debug, Deserialize)]
struct PoolFile {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// Immutable, ordered set of candidates
///
/// Built once at startup and shared read-only afterwards. Order is
/// significant: the matcher always prefers earlier entries.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    /// Build a pool, validating every contact handle
    ///
    /// Handles end up in a URL path so they must be non-empty ASCII digits.
    /// Duplicate handles are allowed but logged. An empty pool is valid; every
    /// lookup against it ends in no match.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, PoolError> {
        if candidates.is_empty() {
            tracing::warn!("Candidate pool is empty; every seeker will get no match");
        }

        let mut seen = HashSet::with_capacity(candidates.len());
        for candidate in &candidates {
            let handle = &candidate.whatsapp_no;
            if handle.is_empty() || !handle.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PoolError::InvalidContact {
                    name: candidate.name.clone(),
                    handle: handle.clone(),
                });
            }
            if !seen.insert(handle.as_str()) {
                tracing::warn!("Duplicate contact number {} in candidate pool ({})", handle, candidate.name);
            }
        }

        Ok(Self { candidates })
    }

    /// Parse a pool from TOML text (`[[candidates]]` tables)
    pub fn from_toml_str(text: &str) -> Result<Self, PoolError> {
        let file: PoolFile = toml::from_str(text)?;
        Self::new(file.candidates)
    }

    /// Load a pool from a TOML file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PoolError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The pool compiled into the binary
    pub fn embedded() -> Result<Self, PoolError> {
        Self::from_toml_str(EMBEDDED_POOL)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
