//! Per-node solver data: the unknown-slot layout and its backing storage.

pub mod fields;
pub mod storage;

pub use fields::{NodeFields, Unknown};
pub use storage::{Storage, VecStorage};

/// Alias for the common Vec-backed field storage.
pub type CpuFields = fields::NodeFields<storage::VecStorage<f64>>;
