pub mod address;
pub mod scalar_input;

pub use address::join_addresses;
pub use scalar_input::{
    ScalarInputConfig, ScalarInputSpec, SensorAppearanceResources, SensorBehavior,
};
