//! In-process stand-in for the managed resource.
//!
//! Walks `Sleeping -> Starting -> Running` on a start request and drops back
//! to `Sleeping` on kill. Debounces start requests itself; the dispatcher
//! does not.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::kernel::oracle::{OracleError, StartIntent, StatusOracle};
use crate::kernel::status::ResourceState;

pub const DEFAULT_WARM_UP: Duration = Duration::from_secs(5);

#[derive(Debug)]
struct Phase {
    state: ResourceState,
    /// Bumped on every start and kill; a warm-up timer only promotes the
    /// generation it was spawned for.
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct SimulatedServer {
    phase: Arc<RwLock<Phase>>,
    warm_up: Duration,
}

impl Default for SimulatedServer {
    fn default() -> Self {
        Self::new(DEFAULT_WARM_UP)
    }
}

impl SimulatedServer {
    pub fn new(warm_up: Duration) -> Self {
        Self {
            phase: Arc::new(RwLock::new(Phase {
                state: ResourceState::Sleeping,
                generation: 0,
            })),
            warm_up,
        }
    }

    pub async fn set_state(&self, state: ResourceState) {
        let mut phase = self.phase.write().await;
        phase.state = state;
        phase.generation += 1;
    }

    pub async fn state(&self) -> ResourceState {
        self.phase.read().await.state.clone()
    }
}

#[async_trait]
impl StatusOracle for SimulatedServer {
    async fn get_status(&self) -> Result<ResourceState, OracleError> {
        Ok(self.state().await)
    }

    async fn kill_server(&self) -> Result<(), OracleError> {
        info!("[Simulated] Stopping server");
        self.set_state(ResourceState::Sleeping).await;
        Ok(())
    }
}

#[async_trait]
impl StartIntent for SimulatedServer {
    async fn request_start(&self, requester: &str) -> Result<(), OracleError> {
        let generation = {
            let mut phase = self.phase.write().await;
            if phase.state != ResourceState::Sleeping {
                debug!("[Simulated] Start from {} ignored, server is {}", requester, phase.state);
                return Ok(());
            }
            phase.state = ResourceState::Starting;
            phase.generation += 1;
            phase.generation
        };
        info!("[Simulated] {} woke the server up", requester);

        let phase = self.phase.clone();
        let warm_up = self.warm_up;
        tokio::spawn(async move {
            tokio::time::sleep(warm_up).await;
            let mut phase = phase.write().await;
            if phase.generation == generation && phase.state == ResourceState::Starting {
                phase.state = ResourceState::Running;
                info!("[Simulated] Server is running");
            }
        });
        Ok(())
    }
}
