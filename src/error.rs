//! Error types (spec.md §7).
//!
//! Only reference-table load failure is a genuine `Err`. Every other
//! condition spec.md §7 names — empty input, no match, a degenerate
//! (non-length-2) scansion key, a missing weight or modification entry —
//! is recoverable and is represented as an ordinary empty collection or
//! synthesized value, never as a thrown error. The teacher repo never
//! takes a dependency on `thiserror`/`anyhow`, so this is a plain enum
//! with a hand-written `Display` impl, matching its register.

use std::fmt;

/// Fatal error: one of the four reference tables could not be loaded or
/// is malformed. The core cannot start without them.
#[derive(Debug)]
pub enum AnalysisError {
    /// A reference table's embedded JSON failed to parse.
    ReferenceLoadFailure {
        table: &'static str,
        source: serde_json::Error,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::ReferenceLoadFailure { table, source } => {
                write!(f, "failed to load reference table '{table}': {source}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::ReferenceLoadFailure { source, .. } => Some(source),
        }
    }
}
