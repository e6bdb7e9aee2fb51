pub mod cleanup;
pub mod config;
pub mod location;
pub mod store;

pub use cleanup::{delete_label_assets, AssetCleanup};
pub use config::AssetConfig;
pub use location::ExperimentLocation;
pub use store::{AssetStore, FsAssetStore};
