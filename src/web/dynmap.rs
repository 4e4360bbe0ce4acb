use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::router::WebState;

pub async fn handle_dynmap_root() -> Redirect {
    Redirect::permanent("/dynmap/")
}

pub async fn handle_dynmap_index(State(state): State<WebState>) -> Response {
    serve_from(state.dynmap_dir.as_deref(), "index.html").await
}

pub async fn handle_dynmap_file(
    State(state): State<WebState>,
    UrlPath(path): UrlPath<String>,
) -> Response {
    serve_from(state.dynmap_dir.as_deref(), &path).await
}

async fn serve_from(root: Option<&Path>, relative: &str) -> Response {
    let Some(root) = root else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(mut file) = confine(root, relative) else {
        debug!("[WebServer] Rejected dynmap path {:?}", relative);
        return StatusCode::NOT_FOUND.into_response();
    };
    if tokio::fs::metadata(&file).await.is_ok_and(|meta| meta.is_dir()) {
        file.push("index.html");
    }

    match tokio::fs::read(&file).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&file))], bytes).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Joins `relative` onto `root`, refusing anything that could escape it.
pub fn confine(root: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative.trim_start_matches('/'));
    let mut joined = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(joined)
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
