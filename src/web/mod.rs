//! HTTP surface - server-rendered catalog pages on axum.
//!
//! ## Routes
//!
//! - `GET /` home page
//! - `GET /lamps` lamp list, query params `q`, `sortField`, `sortDirection`
//! - `GET /lampDetail/:id` lamp detail, 404 when absent
//! - `GET /lampEdit/:id` prefilled lamp form, 404 when absent
//! - `GET /fabrics` fabrikant list
//! - `GET /fabricDetail/:id` fabrikant detail, 404 when absent
//! - `GET /register-success` fixed confirmation page
//! - `GET /health` JSON record counts
//!
//! Everything else is looked up in the static directory when one is
//! configured, and answered with a 404 page otherwise.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lamp_catalog::web;
//!
//! let catalog = Arc::new(catalog);
//!
//! // Get the router to compose with other axum routes
//! let app = web::router(catalog.clone(), None);
//!
//! // Or serve directly
//! web::serve(catalog, "0.0.0.0:3000", None).await?;
//! ```

mod error;
mod handlers;
pub mod views;

use std::path::Path;
use std::sync::Arc;

use axum::handler::HandlerWithoutStateExt;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tracing::info;

use crate::catalog::Catalog;

pub use error::PageError;

/// Build the axum `Router` for the catalog pages.
pub fn router(catalog: Arc<Catalog>, static_dir: Option<&Path>) -> Router {
    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/lamps", get(handlers::lamps))
        .route("/lampDetail/:id", get(handlers::lamp_detail))
        .route("/lampEdit/:id", get(handlers::lamp_edit))
        .route("/fabrics", get(handlers::fabrics))
        .route("/fabricDetail/:id", get(handlers::fabric_detail))
        .route("/register-success", get(handlers::register_success))
        .route("/health", get(handlers::health))
        .with_state(catalog);

    match static_dir {
        Some(dir) => {
            let assets = ServeDir::new(dir).not_found_service(handlers::not_found.into_service());
            app.fallback_service(assets)
        }
        None => app.fallback(handlers::not_found),
    }
}

/// Serve the catalog over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve(
    catalog: Arc<Catalog>,
    addr: &str,
    static_dir: Option<&Path>,
) -> Result<(), std::io::Error> {
    let app = router(catalog, static_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "serving catalog");
    axum::serve(listener, app).await
}
