//! Subversion backend: external `svn` command against a detected checkout.

use super::traits::VcsBackend;
use crate::domain::{BackendKind, ChangeStatus};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

pub struct SvnBackend {
    root: PathBuf,
}

impl SvnBackend {
    /// Walk ancestor directories looking for a `.svn` metadata directory.
    /// Stops at the filesystem root.
    pub fn discover(path: &Path) -> Option<SvnBackend> {
        let start = if path.is_dir() { path } else { path.parent()? };

        let mut current = Some(start);
        while let Some(dir) = current {
            if dir.join(".svn").is_dir() {
                return Some(SvnBackend {
                    root: dir.to_path_buf(),
                });
            }
            current = dir.parent();
        }
        None
    }

    async fn svn(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("svn")
            .args(args)
            .current_dir(&self.root)
            .output()
            .await
            .with_context(|| format!("Failed to run svn {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("svn {} failed: {}", args.join(" "), stderr.trim());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Map the first column of `svn status` output onto a change status.
pub(crate) fn map_status_char(code: char) -> ChangeStatus {
    match code {
        'M' | 'R' => ChangeStatus::Modified,
        'A' | '?' => ChangeStatus::Added,
        'D' | '!' => ChangeStatus::Deleted,
        _ => ChangeStatus::Unchanged,
    }
}

#[async_trait]
impl VcsBackend for SvnBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Svn
    }

    fn repo_root(&self) -> &Path {
        &self.root
    }

    fn relative_label(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    async fn status(&self, path: &Path) -> Result<ChangeStatus> {
        let rel = self.relative_label(path);
        let listing = self.svn(&["status", "--depth", "empty", &rel]).await?;

        let Some(code) = listing.chars().next() else {
            return Ok(ChangeStatus::Unchanged);
        };
        Ok(map_status_char(code))
    }

    async fn working_diff(&self, path: &Path) -> Result<String> {
        let rel = self.relative_label(path);
        self.svn(&["diff", &rel]).await
    }

    /// Subversion has no staging area.
    async fn staged_diff(&self, _path: &Path) -> Result<String> {
        Ok(String::new())
    }

    async fn baseline_content(&self, path: &Path) -> Result<String> {
        let rel = self.relative_label(path);
        self.svn(&["cat", "-r", "BASE", &rel]).await
    }
}
