use anyhow::{bail, Result};
use std::path::{Component, Path, PathBuf};

/// Where an experiment's assets live relative to the app storage root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExperimentLocation {
    account_key: Option<String>,
    experiment_id: String,
}

impl ExperimentLocation {
    /// Experiment owned by the anonymous (signed-out) account
    pub fn new(experiment_id: impl Into<String>) -> Self {
        Self {
            account_key: None,
            experiment_id: experiment_id.into(),
        }
    }

    pub fn for_account(account_key: impl Into<String>, experiment_id: impl Into<String>) -> Self {
        Self {
            account_key: Some(account_key.into()),
            experiment_id: experiment_id.into(),
        }
    }

    pub fn experiment_id(&self) -> &str {
        &self.experiment_id
    }

    pub fn account_key(&self) -> Option<&str> {
        self.account_key.as_deref()
    }

    pub fn experiment_dir(&self, root: &Path) -> PathBuf {
        let base = match &self.account_key {
            Some(account) => root.join("accounts").join(account),
            None => root.to_path_buf(),
        };
        base.join("experiments").join(&self.experiment_id)
    }

    /// Resolve a label's relative asset path. Paths that would leave the
    /// experiment directory are rejected, as are account keys and experiment
    /// ids that are not a single plain path segment.
    pub fn resolve(&self, root: &Path, relative: &str) -> Result<PathBuf> {
        if let Some(account) = &self.account_key {
            single_segment("Account key", account)?;
        }
        single_segment("Experiment id", &self.experiment_id)?;

        let relative = Path::new(relative);
        if relative.as_os_str().is_empty() {
            bail!("Empty asset path");
        }
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            bail!("Asset path {:?} escapes the experiment directory", relative);
        }

        Ok(self.experiment_dir(root).join(relative))
    }
}

fn single_segment(kind: &str, value: &str) -> Result<()> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(segment)), None) if segment == value => Ok(()),
        _ => bail!("{} {:?} is not a single path segment", kind, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_account() {
        let location = ExperimentLocation::for_account("acct-1", "exp-9");
        let path = location.resolve(Path::new("/data"), "assets/1.jpg").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/data/accounts/acct-1/experiments/exp-9/assets/1.jpg")
        );
    }

    #[test]
    fn test_resolve_anonymous() {
        let location = ExperimentLocation::new("exp-9");
        let path = location.resolve(Path::new("/data"), "img/1.jpg").unwrap();
        assert_eq!(path, PathBuf::from("/data/experiments/exp-9/img/1.jpg"));
    }

    #[test]
    fn test_resolve_rejects_escapes() {
        let location = ExperimentLocation::new("exp-9");
        assert!(location.resolve(Path::new("/data"), "../other/1.jpg").is_err());
        assert!(location.resolve(Path::new("/data"), "/etc/passwd").is_err());
        assert!(location.resolve(Path::new("/data"), "").is_err());
    }

    #[test]
    fn test_resolve_rejects_multi_segment_ids() {
        for id in ["..", "../..", "a/b", "/abs", "", "."] {
            let location = ExperimentLocation::new(id);
            assert!(
                location.resolve(Path::new("/data"), "img/1.jpg").is_err(),
                "experiment id {:?} accepted",
                id
            );
        }

        let location = ExperimentLocation::for_account("../..", "exp-9");
        let err = location
            .resolve(Path::new("/data"), "img/1.jpg")
            .unwrap_err();
        assert!(err.to_string().contains("Account key"));
    }
}
