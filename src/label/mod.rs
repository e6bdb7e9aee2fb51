pub mod identity;
pub mod payload;
pub mod record;
pub mod value_type;
pub mod values;

pub use identity::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use payload::{LabelPayload, LabelValue};
pub use record::{sort_by_timestamp, LabelRecord};
pub use value_type::ValueType;
pub use values::{
    Caption, PictureValue, SensorSnapshot, SensorTriggerValue, SnapshotValue, TextValue,
    TriggerAction, TriggerWhen,
};
