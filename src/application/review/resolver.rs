//! Per-file diff resolution.
//!
//! Asks the owning backend for the file's change status and produces a
//! unified diff for it: verbatim from the backend where one exists, synthetic
//! for new and deleted files where it does not. Binary content (any NUL byte)
//! is never diffed; it fails resolution like an unreadable file does.

use crate::domain::{BackendKind, ChangeStatus, FileChange, ResolveError};
use crate::infra::vcs::VcsBackend;

/// Resolve the pending diff for one file.
///
/// `Ok(None)` means "no pending change to send". `Err` covers failing backend
/// or filesystem calls and binary content; the caller treats all failures
/// alike (notify, count as skipped, continue).
pub async fn resolve(
    backend: &dyn VcsBackend,
    change: &FileChange,
) -> Result<Option<String>, ResolveError> {
    let status = backend
        .status(&change.path)
        .await
        .map_err(|source| ResolveError::Backend {
            path: change.relative_label.clone(),
            source,
        })?;

    match status {
        ChangeStatus::Modified => resolve_modified(backend, change).await,
        ChangeStatus::Added => resolve_added(change).await,
        ChangeStatus::Deleted => resolve_deleted(backend, change).await,
        ChangeStatus::Unchanged => Ok(None),
    }
}

async fn resolve_modified(
    backend: &dyn VcsBackend,
    change: &FileChange,
) -> Result<Option<String>, ResolveError> {
    let mut diff = backend
        .working_diff(&change.path)
        .await
        .map_err(|source| ResolveError::Backend {
            path: change.relative_label.clone(),
            source,
        })?;

    // A change that only lives in the index produces an empty worktree diff;
    // svn has no staging area and already returned its diff directly.
    if diff.is_empty() && backend.kind() == BackendKind::Git {
        diff = backend
            .staged_diff(&change.path)
            .await
            .map_err(|source| ResolveError::Backend {
                path: change.relative_label.clone(),
                source,
            })?;
    }

    if diff.is_empty() {
        Ok(None)
    } else {
        Ok(Some(diff))
    }
}

async fn resolve_added(change: &FileChange) -> Result<Option<String>, ResolveError> {
    let bytes = tokio::fs::read(&change.path)
        .await
        .map_err(|source| ResolveError::Unreadable {
            path: change.relative_label.clone(),
            source,
        })?;

    let content = String::from_utf8_lossy(&bytes).into_owned();
    if is_binary(&content) {
        return Err(ResolveError::Binary {
            path: change.relative_label.clone(),
        });
    }

    Ok(Some(synthesize_added(&change.relative_label, &content)))
}

async fn resolve_deleted(
    backend: &dyn VcsBackend,
    change: &FileChange,
) -> Result<Option<String>, ResolveError> {
    // svn renders an all-minus unified diff for a deleted path natively; use
    // it when available and only fall back to the baseline content.
    if backend.kind() == BackendKind::Svn
        && let Ok(diff) = backend.working_diff(&change.path).await
        && !diff.is_empty()
    {
        return Ok(Some(diff));
    }

    let content = backend
        .baseline_content(&change.path)
        .await
        .map_err(|source| ResolveError::Backend {
            path: change.relative_label.clone(),
            source,
        })?;

    if is_binary(&content) {
        return Err(ResolveError::Binary {
            path: change.relative_label.clone(),
        });
    }

    Ok(Some(synthesize_deleted(&change.relative_label, &content)))
}

/// A NUL byte anywhere in the decoded content is the sole binary signal.
fn is_binary(content: &str) -> bool {
    content.contains('\0')
}

/// Split file content into lines, dropping the one empty line a trailing
/// terminator produces so counts match visual line counts.
fn content_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Whole-file diff for a file the baseline does not know: every line added.
pub(crate) fn synthesize_added(relative_label: &str, content: &str) -> String {
    let lines = content_lines(content);
    let mut diff = format!(
        "--- /dev/null\n+++ b/{relative_label}\n@@ -0,0 +1,{} @@\n",
        lines.len()
    );
    for line in &lines {
        diff.push('+');
        diff.push_str(line);
        diff.push('\n');
    }
    diff
}

/// Whole-file diff for a deleted file: every baseline line removed.
pub(crate) fn synthesize_deleted(relative_label: &str, content: &str) -> String {
    let lines = content_lines(content);
    let mut diff = format!(
        "--- a/{relative_label}\n+++ /dev/null\n@@ -1,{} +0,0 @@\n",
        lines.len()
    );
    for line in &lines {
        diff.push('-');
        diff.push_str(line);
        diff.push('\n');
    }
    diff
}
