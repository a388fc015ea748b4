//! Operation builders — thin callers of the batched engine.
//!
//! Each builder turns caller-level inputs into self-contained request
//! operations, names the operation key for header resolution, and supplies
//! the projection from response operation to result type.

pub mod records;
pub mod zones;
