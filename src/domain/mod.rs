//! Domain types for diff review.
//! Defines the core data structures shared by the resolver, orchestrator and
//! prompt assembler.

pub mod error;

pub use error::*;

use std::path::PathBuf;

/// One file selected for review.
///
/// Constructed per file from the host's selection; carries no identity beyond
/// a single orchestration run.
#[derive(Debug, Clone)]
pub struct FileChange {
    /// Absolute path as handed over by the host.
    pub path: PathBuf,
    /// Repository-relative path used in prompt headings and synthetic diff
    /// headers.
    pub relative_label: String,
}

/// Change state of a file relative to its checkout baseline.
///
/// The two backends speak different status vocabularies; both are mapped onto
/// these four cases before any diff strategy runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    Modified,
    /// New file the baseline does not know yet (untracked or add-scheduled).
    Added,
    Deleted,
    /// No pending change, or a status the resolver does not handle.
    Unchanged,
}

/// Which version-control system a backend speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Git,
    Svn,
}

/// Outcome of the two-choice oversized-diff warning dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Cancelled,
}
