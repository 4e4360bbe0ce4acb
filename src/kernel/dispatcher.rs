use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::event::{DispatchOutcome, SideEffect, WakeRequest};
use super::oracle::{OracleError, StartIntent, StatusOracle};
use super::status::ResourceState;
use super::telemetry::event::TelemetryEvent;
use super::telemetry::metrics::TelemetrySnapshot;
use super::telemetry::recorder::DispatchTelemetry;
use crate::config::DynmapSetting;

/// Body of the passive status query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub status: ResourceState,
    pub dynmap: DynmapSetting,
}

/// Maps the resource's current state to one action per wake request.
///
/// Holds no resource state between calls. Cloning is cheap and every clone
/// shares the same collaborators and telemetry buffer.
#[derive(Clone)]
pub struct WakeDispatcher {
    oracle: Arc<dyn StatusOracle>,
    start: Arc<dyn StartIntent>,
    dynmap: DynmapSetting,
    telemetry: Arc<Mutex<DispatchTelemetry>>,
}

impl WakeDispatcher {
    pub fn new(
        oracle: Arc<dyn StatusOracle>,
        start: Arc<dyn StartIntent>,
        dynmap: DynmapSetting,
    ) -> Self {
        Self {
            oracle,
            start,
            dynmap,
            telemetry: Arc::new(Mutex::new(DispatchTelemetry::new())),
        }
    }

    /// Pure projection: State + Request -> (Outcome, SideEffect).
    ///
    /// Total over `ResourceState`; the unknown arm is an outcome of its own.
    pub fn decide(
        state: &ResourceState,
        request: &WakeRequest,
    ) -> (DispatchOutcome, Option<SideEffect>) {
        match state {
            ResourceState::Sleeping => (
                DispatchOutcome::StartTriggered,
                Some(SideEffect::TriggerStart {
                    requester: request.caller.clone(),
                }),
            ),
            ResourceState::Running => {
                (DispatchOutcome::StopTriggered, Some(SideEffect::TriggerStop))
            }
            ResourceState::Starting => (DispatchOutcome::Ignored, None),
            ResourceState::Unknown(_) => (DispatchOutcome::Unrecognized, None),
        }
    }

    /// Reads the state once, picks the action and fires it.
    ///
    /// A fetch failure is returned; a command failure is only logged and
    /// recorded, since the caller has long been acknowledged by then.
    pub async fn handle_wake_request(
        &self,
        request: &WakeRequest,
    ) -> Result<DispatchOutcome, OracleError> {
        let state = match self.oracle.get_status().await {
            Ok(state) => state,
            Err(e) => {
                error!("[WebServer]({}) Failed to fetch server status: {}", request.caller, e);
                self.record(TelemetryEvent::OracleFetchFailed { request_id: request.id });
                return Err(e);
            }
        };

        let (outcome, effect) = Self::decide(&state, request);

        match outcome {
            DispatchOutcome::StartTriggered => {
                info!("[WebServer]({}) Wake up server was {}", request.caller, state)
            }
            DispatchOutcome::StopTriggered => {
                info!("[WebServer]({}) Stopping server was {}", request.caller, state)
            }
            DispatchOutcome::Ignored => {
                info!("[WebServer]({}) Doing nothing server was {}", request.caller, state)
            }
            DispatchOutcome::Unrecognized => {
                // Log-only until the extra states are agreed on; see DESIGN.md.
                warn!("[WebServer]({}) Server is ?! {}", request.caller, state);
                self.record(TelemetryEvent::UnrecognizedState {
                    request_id: request.id,
                    raw: state.to_string(),
                });
            }
        }

        self.record(TelemetryEvent::WakeDispatched {
            request_id: request.id,
            state,
            outcome,
        });

        if let Some(effect) = effect {
            self.execute(request, effect).await;
        }

        Ok(outcome)
    }

    /// Detaches the dispatch onto its own task and returns immediately.
    ///
    /// The HTTP layer acknowledges the caller right after this call; the
    /// handle is only useful to tests that want to await the outcome.
    pub fn dispatch_detached(&self, request: WakeRequest) -> JoinHandle<Option<DispatchOutcome>> {
        let dispatcher = self.clone();
        tokio::spawn(async move { dispatcher.handle_wake_request(&request).await.ok() })
    }

    pub async fn query_status(&self) -> Result<StatusReport, OracleError> {
        let status = self.oracle.get_status().await?;
        Ok(StatusReport {
            status,
            dynmap: self.dynmap.clone(),
        })
    }

    pub fn telemetry_snapshot(&self) -> TelemetrySnapshot {
        self.telemetry
            .lock()
            .map(|t| t.snapshot())
            .unwrap_or_default()
    }

    pub fn telemetry_events(&self) -> Vec<TelemetryEvent> {
        self.telemetry
            .lock()
            .map(|t| t.events().cloned().collect::<Vec<_>>())
            .unwrap_or_default()
    }

    async fn execute(&self, request: &WakeRequest, effect: SideEffect) {
        let command = effect.command_name();
        let result = match effect {
            SideEffect::TriggerStart { requester } => self.start.request_start(&requester).await,
            SideEffect::TriggerStop => self.oracle.kill_server().await,
        };

        if let Err(e) = result {
            error!("[WebServer]({}) {} command failed: {}", request.caller, command, e);
            self.record(TelemetryEvent::CommandFailed {
                request_id: request.id,
                command: command.to_string(),
            });
        }
    }

    // A poisoned buffer must never hold up a dispatch.
    fn record(&self, event: TelemetryEvent) {
        if let Ok(mut telemetry) = self.telemetry.lock() {
            telemetry.record(event);
        }
    }
}
