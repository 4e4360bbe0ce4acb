use sleepwake::config::{Settings, DEFAULT_SETTINGS_FILE};
use sleepwake::kernel::dispatcher::WakeDispatcher;
use sleepwake::services::simulated::SimulatedServer;
use sleepwake::web::error::WebError;
use sleepwake::web::{ServerHandle, WebServer, WebState};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging/tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_FILE.to_string());
    let settings = Arc::new(Settings::load(&settings_path)?);
    tracing::info!("Sleepwake booting for {}", settings.server_name);

    // No real process manager is wired in here; the simulated resource
    // stands in for it.
    let resource = Arc::new(SimulatedServer::default());
    let dispatcher =
        WakeDispatcher::new(resource.clone(), resource, settings.web_serve_dynmap.clone());

    let state = WebState::new(settings.clone(), dispatcher);
    let server = WebServer::bind(settings.web_port, state).await?;
    let handle = server.handle();
    let task = tokio::spawn(server.serve());

    tracing::info!("Sleepwake active. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    shutdown(handle, task).await
}

async fn shutdown(
    handle: ServerHandle,
    task: JoinHandle<Result<(), WebError>>,
) -> anyhow::Result<()> {
    handle.close();
    task.await??;
    tracing::info!("Sleepwake stopped");
    Ok(())
}
