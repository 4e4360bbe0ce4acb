//! Dispatch telemetry.
//!
//! Write-only from the dispatcher's point of view: nothing in the decision
//! path reads it back. Events carry request IDs, states and outcomes only.

pub mod event;
pub mod metrics;
pub mod recorder;
