use axum::extract::{ConnectInfo, State};
use axum::response::Html;
use axum::Json;
use std::net::SocketAddr;

use super::error::WebError;
use super::page::render_home;
use super::router::WebState;
use crate::kernel::dispatcher::StatusReport;
use crate::kernel::event::WakeRequest;

pub const WAKE_ACK: &str = "received";
const UNKNOWN_CALLER: &str = "unknown";

pub async fn handle_home(State(state): State<WebState>) -> Html<String> {
    Html(render_home(&state.settings))
}

/// Acknowledges unconditionally; the dispatch runs on a detached task.
pub async fn handle_wakeup(
    State(state): State<WebState>,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> &'static str {
    let caller = peer
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CALLER.to_string());

    state.dispatcher.dispatch_detached(WakeRequest::new(caller));
    WAKE_ACK
}

pub async fn handle_status(State(state): State<WebState>) -> Result<Json<StatusReport>, WebError> {
    Ok(Json(state.dispatcher.query_status().await?))
}
