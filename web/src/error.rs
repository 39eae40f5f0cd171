// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use superlists_core::Error;

/// Errors a request handler can end with.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The path does not name an existing resource.
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Core(#[from] Error),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound => StatusCode::NOT_FOUND,
            WebError::Core(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            WebError::Core(Error::EmptyItemText) => StatusCode::BAD_REQUEST,
            WebError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(err = %self, "request failed");
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        (status, Html(format!("<h1>{reason}</h1>\n"))).into_response()
    }
}
