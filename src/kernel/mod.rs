//! Decision core.
//!
//! The kernel owns no resource state. It reads a fresh [`status::ResourceState`]
//! from the oracle for every request and maps it to exactly one outcome.

pub mod dispatcher;
pub mod event;
pub mod oracle;
pub mod status;
pub mod telemetry;
