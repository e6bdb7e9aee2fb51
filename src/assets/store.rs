use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use super::AssetConfig;
use crate::resilience::ResilientOp;

/// File storage for assets referenced by labels
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// App storage root that experiment locations resolve against
    fn root(&self) -> &Path;

    /// Delete the file at `path`. Returns `Ok(false)` if there was nothing to delete.
    async fn delete(&self, path: &Path) -> Result<bool>;
}

/// Local file system store with timeout and retry on deletes
pub struct FsAssetStore {
    config: AssetConfig,
}

impl FsAssetStore {
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    fn root(&self) -> &Path {
        &self.config.storage_root
    }

    async fn delete(&self, path: &Path) -> Result<bool> {
        let op = ResilientOp::new(
            format!("delete asset {:?}", path),
            self.config.retry.clone(),
            self.config.timeout(),
        );

        let in_flight = AtomicBool::new(false);
        let in_flight = &in_flight;

        op.run(move || async move {
            // Still set when the previous attempt was dropped by the timeout
            let cut_off = in_flight.swap(true, Ordering::SeqCst);
            let result = tokio::fs::remove_file(path).await;
            in_flight.store(false, Ordering::SeqCst);
            removal_outcome(result, cut_off, path)
        })
        .await
    }
}

/// A timed-out `remove_file` keeps running on the blocking pool, so a file
/// that vanished after a cut-off attempt counts as deleted by this call.
fn removal_outcome(result: io::Result<()>, after_cut_off: bool, path: &Path) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if after_cut_off {
                log::debug!("Asset {:?} was removed by a timed-out attempt", path);
            }
            Ok(after_cut_off)
        }
        Err(e) => Err(e).context(format!("Failed to delete asset at {:?}", path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::NotFound))
    }

    #[test]
    fn test_missing_file_after_cut_off_attempt_counts_as_deleted() {
        let path = Path::new("/data/img/1.jpg");
        assert!(removal_outcome(not_found(), true, path).unwrap());
        assert!(!removal_outcome(not_found(), false, path).unwrap());
        assert!(removal_outcome(Ok(()), false, path).unwrap());
    }

    #[test]
    fn test_other_io_errors_propagate() {
        let denied = Err(io::Error::from(io::ErrorKind::PermissionDenied));
        let err = removal_outcome(denied, true, Path::new("/data/img/1.jpg")).unwrap_err();
        assert!(err.to_string().contains("Failed to delete asset"));
    }
}
