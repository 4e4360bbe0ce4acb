use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One wake request. Lives only for the duration of a single dispatch.
#[derive(Debug, Clone)]
pub struct WakeRequest {
    pub id: Uuid,
    /// Network origin of the caller, used for logging and as the start label.
    pub caller: String,
}

impl WakeRequest {
    pub fn new(caller: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            caller: caller.into(),
        }
    }
}

/// Exactly one of these is produced per wake request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispatchOutcome {
    StartTriggered,
    StopTriggered,
    Ignored,
    Unrecognized,
}

/// Command the dispatcher hands to the resource. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    TriggerStart { requester: String },
    TriggerStop,
}

impl SideEffect {
    pub fn command_name(&self) -> &'static str {
        match self {
            SideEffect::TriggerStart { .. } => "start",
            SideEffect::TriggerStop => "stop",
        }
    }
}
