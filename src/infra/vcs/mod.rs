//! Version-control backends and detection.

pub mod git;
pub mod svn;
pub mod traits;

pub use traits::{BackendSelector, VcsBackend};

use async_trait::async_trait;
use git::GitBackend;
use std::path::Path;
use std::sync::Arc;
use svn::SvnBackend;

/// Real backend detection: git is probed first and wins when both systems
/// claim the path; the svn ancestor walk only runs when git does not
/// recognize it.
pub struct VcsDetector;

#[async_trait]
impl BackendSelector for VcsDetector {
    async fn select(&self, path: &Path) -> Option<Arc<dyn VcsBackend>> {
        if let Some(backend) = GitBackend::discover(path).await {
            return Some(Arc::new(backend));
        }
        SvnBackend::discover(path).map(|backend| Arc::new(backend) as Arc<dyn VcsBackend>)
    }
}
