use std::path::PathBuf;

use super::{AssetStore, ExperimentLocation};
use crate::label::{LabelRecord, ValueType};

/// Outcome of removing a label's external assets.
///
/// Failures are reported here rather than as errors: a file left behind does
/// not make the label itself invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetCleanup {
    /// The label references no external files
    NoAssets,
    Deleted(PathBuf),
    /// The referenced file was already gone
    AlreadyMissing(PathBuf),
    Failed {
        path: Option<PathBuf>,
        reason: String,
    },
}

impl AssetCleanup {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

pub async fn delete_label_assets<S>(
    label: &LabelRecord,
    store: &S,
    experiment: &ExperimentLocation,
) -> AssetCleanup
where
    S: AssetStore + ?Sized,
{
    if label.value_type() != ValueType::Picture {
        return AssetCleanup::NoAssets;
    }

    let picture = match label.as_picture() {
        Ok(picture) => picture,
        Err(e) => {
            log::warn!("Could not read picture of label {}: {}", label.label_id(), e);
            return AssetCleanup::Failed {
                path: None,
                reason: e.to_string(),
            };
        }
    };

    if picture.file_path.is_empty() {
        return AssetCleanup::NoAssets;
    }

    let path = match experiment.resolve(store.root(), &picture.file_path) {
        Ok(path) => path,
        Err(e) => {
            log::warn!("Could not delete {:?}: {:#}", picture.file_path, e);
            return AssetCleanup::Failed {
                path: None,
                reason: format!("{:#}", e),
            };
        }
    };

    match store.delete(&path).await {
        Ok(true) => {
            log::debug!("Deleted {:?} for label {}", path, label.label_id());
            AssetCleanup::Deleted(path)
        }
        Ok(false) => {
            log::warn!("Could not delete {:?}: file does not exist", path);
            AssetCleanup::AlreadyMissing(path)
        }
        Err(e) => {
            log::warn!("Could not delete {:?}: {:#}", path, e);
            AssetCleanup::Failed {
                path: Some(path),
                reason: format!("{:#}", e),
            }
        }
    }
}
