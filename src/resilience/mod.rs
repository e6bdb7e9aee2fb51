pub mod policy;
pub mod resilient_op;

pub use policy::RetryPolicy;
pub use resilient_op::ResilientOp;
