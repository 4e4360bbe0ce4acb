use std::collections::VecDeque;

use super::event::TelemetryEvent;
use super::metrics::{compute_snapshot, TelemetrySnapshot};

const MAX_EVENTS: usize = 10_000;

#[derive(Debug)]
pub struct DispatchTelemetry {
    buffer: VecDeque<TelemetryEvent>,
}

impl Default for DispatchTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchTelemetry {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(MAX_EVENTS),
        }
    }

    pub fn record(&mut self, event: TelemetryEvent) {
        if self.buffer.len() >= MAX_EVENTS {
            self.buffer.pop_front();
        }
        self.buffer.push_back(event);
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        compute_snapshot(&self.buffer)
    }

    pub fn events(&self) -> impl Iterator<Item = &TelemetryEvent> {
        self.buffer.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::event::DispatchOutcome;
    use crate::kernel::status::ResourceState;
    use uuid::Uuid;

    #[test]
    fn buffer_drops_oldest_when_full() {
        let mut recorder = DispatchTelemetry::new();
        for _ in 0..MAX_EVENTS {
            recorder.record(TelemetryEvent::OracleFetchFailed { request_id: Uuid::nil() });
        }
        recorder.record(TelemetryEvent::WakeDispatched {
            request_id: Uuid::nil(),
            state: ResourceState::Starting,
            outcome: DispatchOutcome::Ignored,
        });

        assert_eq!(recorder.events().count(), MAX_EVENTS);
        let snap = recorder.snapshot();
        assert_eq!(snap.fetch_failures, (MAX_EVENTS - 1) as u64);
        assert_eq!(snap.outcomes.ignored, 1);
    }

    #[test]
    fn snapshot_counts_each_outcome() {
        let mut recorder = DispatchTelemetry::new();
        let outcomes = [
            (ResourceState::Sleeping, DispatchOutcome::StartTriggered),
            (ResourceState::Running, DispatchOutcome::StopTriggered),
            (ResourceState::Unknown("Paused".into()), DispatchOutcome::Unrecognized),
        ];
        for (state, outcome) in outcomes {
            recorder.record(TelemetryEvent::WakeDispatched {
                request_id: Uuid::nil(),
                state,
                outcome,
            });
        }

        let snap = recorder.snapshot();
        assert_eq!(snap.outcomes.total(), 3);
        assert_eq!(snap.outcomes.ignored, 0);
        assert_eq!(snap.outcomes.unrecognized, 1);
    }
}
