use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::event::TelemetryEvent;
use crate::kernel::event::DispatchOutcome;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeStats {
    pub start_triggered: u64,
    pub stop_triggered: u64,
    pub ignored: u64,
    pub unrecognized: u64,
}

impl OutcomeStats {
    pub fn total(&self) -> u64 {
        self.start_triggered + self.stop_triggered + self.ignored + self.unrecognized
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub outcomes: OutcomeStats,
    pub warnings: u64,
    pub fetch_failures: u64,
    pub command_failures: u64,
}

/// Pure fold over the buffered events.
pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::WakeDispatched { outcome, .. } => match outcome {
                DispatchOutcome::StartTriggered => snap.outcomes.start_triggered += 1,
                DispatchOutcome::StopTriggered => snap.outcomes.stop_triggered += 1,
                DispatchOutcome::Ignored => snap.outcomes.ignored += 1,
                DispatchOutcome::Unrecognized => snap.outcomes.unrecognized += 1,
            },
            TelemetryEvent::UnrecognizedState { .. } => snap.warnings += 1,
            TelemetryEvent::OracleFetchFailed { .. } => snap.fetch_failures += 1,
            TelemetryEvent::CommandFailed { .. } => snap.command_failures += 1,
        }
    }

    snap
}
