//! Narrow interface onto the managed resource.
//!
//! The resource itself (process spawning, health checks, shutdown) lives
//! outside this crate. The kernel only reads its state and fires one of two
//! commands at it.

use async_trait::async_trait;
use thiserror::Error;

use super::status::ResourceState;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("status oracle unavailable: {0}")]
    Unavailable(String),

    #[error("{command} command failed: {reason}")]
    CommandFailed { command: &'static str, reason: String },
}

/// Ground truth for the resource lifecycle plus the stop command.
#[async_trait]
pub trait StatusOracle: Send + Sync {
    async fn get_status(&self) -> Result<ResourceState, OracleError>;

    /// Begin stopping the resource. Returns once the command is issued,
    /// not once the resource is down.
    async fn kill_server(&self) -> Result<(), OracleError>;
}

/// Connection-intent hook that begins starting the resource.
#[async_trait]
pub trait StartIntent: Send + Sync {
    async fn request_start(&self, requester: &str) -> Result<(), OracleError>;
}
