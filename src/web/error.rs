use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::kernel::oracle::OracleError;

#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("failed to bind web port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("web server terminated: {0}")]
    Serve(#[source] std::io::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
