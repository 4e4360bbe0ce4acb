#![allow(dead_code)]

use async_trait::async_trait;
use sleepwake::kernel::oracle::{OracleError, StartIntent, StatusOracle};
use sleepwake::kernel::status::ResourceState;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

/// Scriptable oracle + start hook that records every call it receives.
pub struct MockResource {
    state: Mutex<ResourceState>,
    gate: Option<Arc<Semaphore>>,
    fail_status: AtomicBool,
    fail_commands: AtomicBool,
    pub status_calls: AtomicUsize,
    pub kill_calls: AtomicUsize,
    pub start_labels: Mutex<Vec<String>>,
    pub timeline: Arc<Mutex<Vec<&'static str>>>,
}

impl MockResource {
    pub fn new(state: ResourceState) -> Self {
        Self {
            state: Mutex::new(state),
            gate: None,
            fail_status: AtomicBool::new(false),
            fail_commands: AtomicBool::new(false),
            status_calls: AtomicUsize::new(0),
            kill_calls: AtomicUsize::new(0),
            start_labels: Mutex::new(Vec::new()),
            timeline: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every status fetch waits for one permit on the returned semaphore.
    pub fn gated(state: ResourceState) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let mut mock = Self::new(state);
        mock.gate = Some(gate.clone());
        (mock, gate)
    }

    pub fn failing_status(self) -> Self {
        self.fail_status.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_commands(self) -> Self {
        self.fail_commands.store(true, Ordering::SeqCst);
        self
    }

    pub fn starts(&self) -> Vec<String> {
        self.start_labels.lock().unwrap().clone()
    }

    pub fn kills(&self) -> usize {
        self.kill_calls.load(Ordering::SeqCst)
    }

    pub fn fetches(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn mark(&self, event: &'static str) {
        self.timeline.lock().unwrap().push(event);
    }
}

#[async_trait]
impl StatusOracle for MockResource {
    async fn get_status(&self) -> Result<ResourceState, OracleError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        self.mark("resolved");
        if self.fail_status.load(Ordering::SeqCst) {
            return Err(OracleError::Unavailable("mock outage".into()));
        }
        Ok(self.state.lock().unwrap().clone())
    }

    async fn kill_server(&self) -> Result<(), OracleError> {
        self.kill_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_commands.load(Ordering::SeqCst) {
            return Err(OracleError::CommandFailed { command: "stop", reason: "mock".into() });
        }
        Ok(())
    }
}

#[async_trait]
impl StartIntent for MockResource {
    async fn request_start(&self, requester: &str) -> Result<(), OracleError> {
        self.start_labels.lock().unwrap().push(requester.to_string());
        if self.fail_commands.load(Ordering::SeqCst) {
            return Err(OracleError::CommandFailed { command: "start", reason: "mock".into() });
        }
        Ok(())
    }
}

/// Polls `check` until it holds, panicking after two seconds.
pub async fn wait_until(mut check: impl FnMut() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !check() {
        assert!(tokio::time::Instant::now() < deadline, "condition not reached in time");
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
