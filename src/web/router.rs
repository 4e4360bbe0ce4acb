use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use super::dynmap::{handle_dynmap_file, handle_dynmap_index, handle_dynmap_root};
use super::handlers::{handle_home, handle_status, handle_wakeup};
use crate::config::Settings;
use crate::kernel::dispatcher::WakeDispatcher;

#[derive(Clone)]
pub struct WebState {
    pub dispatcher: WakeDispatcher,
    pub settings: Arc<Settings>,
    pub dynmap_dir: Option<PathBuf>,
}

impl WebState {
    pub fn new(settings: Arc<Settings>, dispatcher: WakeDispatcher) -> Self {
        let dynmap_dir = settings.web_serve_dynmap.resolve_path().and_then(|dir| {
            info!("[WebServer] Serving dynmap: {}", dir.display());
            if dir.is_dir() {
                Some(dir)
            } else {
                warn!("[WebServer] Dynmap directory {} does not exist", dir.display());
                None
            }
        });

        Self {
            dispatcher,
            settings,
            dynmap_dir,
        }
    }
}

pub fn build_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route("/wakeup", post(handle_wakeup))
        .route("/status", get(handle_status))
        .route("/dynmap", get(handle_dynmap_root))
        .route("/dynmap/", get(handle_dynmap_index))
        .route("/dynmap/*path", get(handle_dynmap_file))
        .with_state(state)
}
