//! Git backend: subprocess `git` against the repository owning a path.

use super::traits::VcsBackend;
use crate::domain::{BackendKind, ChangeStatus};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

pub struct GitBackend {
    root: PathBuf,
}

impl GitBackend {
    /// Detect the git repository that owns `path`, if any.
    pub async fn discover(path: &Path) -> Option<GitBackend> {
        let dir = if path.is_dir() { path } else { path.parent()? };
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(dir)
            .output()
            .await
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if root.is_empty() {
            None
        } else {
            Some(GitBackend {
                root: PathBuf::from(root),
            })
        }
    }

    async fn git(&self, args: &[&str]) -> Result<std::process::Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .await
            .with_context(|| format!("Failed to run git {}", args.join(" ")))
    }

    async fn git_stdout(&self, args: &[&str]) -> Result<String> {
        let output = self.git(args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git {} failed: {}", args.join(" "), stderr.trim());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Map one `git status --porcelain` XY pair onto a change status.
///
/// X is the staged column, Y the worktree column; the worktree column wins
/// when both carry a state, so an unstaged edit shadows a staged one.
pub(crate) fn map_porcelain(line: &str) -> ChangeStatus {
    let mut chars = line.chars();
    let staged = chars.next().unwrap_or(' ');
    let worktree = chars.next().unwrap_or(' ');

    if staged == '?' && worktree == '?' {
        return ChangeStatus::Added;
    }

    let code = if worktree != ' ' { worktree } else { staged };
    match code {
        'M' | 'T' | 'R' | 'C' => ChangeStatus::Modified,
        'A' => ChangeStatus::Added,
        'D' => ChangeStatus::Deleted,
        _ => ChangeStatus::Unchanged,
    }
}

#[async_trait]
impl VcsBackend for GitBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Git
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
        let listing = self
            .git_stdout(&["status", "--porcelain", "--", &rel])
            .await?;

        // One porcelain line carries both the staged and unstaged sources.
        let Some(line) = listing.lines().next() else {
            return Ok(ChangeStatus::Unchanged);
        };
        Ok(map_porcelain(line))
    }

    async fn working_diff(&self, path: &Path) -> Result<String> {
        let rel = self.relative_label(path);
        self.git_stdout(&["diff", "--", &rel]).await
    }

    async fn staged_diff(&self, path: &Path) -> Result<String> {
        let rel = self.relative_label(path);
        self.git_stdout(&["diff", "--cached", "--", &rel]).await
    }

    async fn baseline_content(&self, path: &Path) -> Result<String> {
        let rel = self.relative_label(path);
        let target = format!("HEAD:{rel}");
        self.git_stdout(&["show", &target]).await
    }
}
