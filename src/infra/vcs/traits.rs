//! Backend trait seams for diff resolution.

use crate::domain::{BackendKind, ChangeStatus};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Uniform view over one version-control backend for a single repository.
///
/// The two backends expose different native status vocabularies and diff
/// commands; implementations map both onto this contract so the resolver can
/// stay backend-agnostic except where the spec'd strategies genuinely differ
/// (staged-diff fallback, deleted-file handling).
#[async_trait]
pub trait VcsBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Root directory of the repository that owns the path.
    fn repo_root(&self) -> &Path;

    /// Repository-relative display path, `/`-separated.
    fn relative_label(&self, path: &Path) -> String;

    /// Change status of the file relative to the checkout baseline.
    async fn status(&self, path: &Path) -> Result<ChangeStatus>;

    /// Unified diff of the working copy against the baseline; empty when the
    /// backend reports none.
    async fn working_diff(&self, path: &Path) -> Result<String>;

    /// Unified diff of the staged state against the baseline. Backends
    /// without a staging area return an empty string.
    async fn staged_diff(&self, path: &Path) -> Result<String>;

    /// File content at the baseline revision. Fails when the baseline has no
    /// such file or the content cannot be produced.
    async fn baseline_content(&self, path: &Path) -> Result<String>;
}

/// Chooses the backend that owns a path.
///
/// Split out as a trait so the orchestrator can be driven by test doubles
/// without real repositories on disk.
#[async_trait]
pub trait BackendSelector: Send + Sync {
    async fn select(&self, path: &Path) -> Option<Arc<dyn VcsBackend>>;
}
