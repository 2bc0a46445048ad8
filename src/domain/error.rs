//! Domain error types for diff resolution.
//!
//! Resolution failures are local to one file and recoverable; the orchestrator
//! reports them, counts the file as skipped and moves on. "No change" is not
//! a failure — it surfaces as an absent diff and is not counted.

use thiserror::Error;

/// Failure while resolving one file's diff.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Could not read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} appears to be binary and cannot be diffed")]
    Binary { path: String },

    #[error("Backend query failed for {path}: {source}")]
    Backend {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}
