//! Error responses for page handlers.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::debug;

use super::views;

/// Ways a page request can fail. None of them is an application fault.
#[derive(Debug, Error)]
pub enum PageError {
    /// No lamp with the requested id (or the id was not a number).
    #[error("Geen lamp gevonden")]
    LampNotFound(String),

    /// No fabrikant with the requested id.
    #[error("Geen fabrikant gevonden")]
    FabrikantNotFound(String),

    /// Nothing is routed at this path.
    #[error("Pagina niet gevonden")]
    RouteNotFound(String),
}

impl PageError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            PageError::LampNotFound(_) => 404,
            PageError::FabrikantNotFound(_) => 404,
            PageError::RouteNotFound(_) => 404,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match &self {
            PageError::LampNotFound(id) | PageError::FabrikantNotFound(id) => {
                debug!(id = %id, error = %self, "detail record not found");
                (status, self.to_string()).into_response()
            }
            PageError::RouteNotFound(path) => {
                debug!(path = %path, "no route");
                (status, Html(views::not_found(path))).into_response()
            }
        }
    }
}
