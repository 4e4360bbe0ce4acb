use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kernel::event::DispatchOutcome;
use crate::kernel::status::ResourceState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    WakeDispatched {
        request_id: Uuid,
        state: ResourceState,
        outcome: DispatchOutcome,
    },

    /// Warning-level diagnostic for a state outside the known phases.
    UnrecognizedState {
        request_id: Uuid,
        raw: String,
    },

    OracleFetchFailed {
        request_id: Uuid,
    },

    CommandFailed {
        request_id: Uuid,
        command: String,
    },
}
