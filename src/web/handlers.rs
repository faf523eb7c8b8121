//! Route handlers. Each one reads the shared catalog and renders a page.

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde_json::json;
use tracing::debug;

use super::error::PageError;
use super::views;
use crate::catalog::Catalog;
use crate::query::LampQuery;

/// `GET /`
pub async fn index() -> Html<String> {
    Html(views::index())
}

/// `GET /register-success`
pub async fn register_success() -> Html<String> {
    Html(views::register_success())
}

/// `GET /lamps?q=&sortField=&sortDirection=`
pub async fn lamps(
    State(catalog): State<Arc<Catalog>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Html<String> {
    let query = LampQuery::from_pairs(&params);
    let lamps = query.apply(catalog.lamps());
    Html(views::lamp_list(&lamps, &query))
}

/// `GET /lampDetail/:id`
pub async fn lamp_detail(
    State(catalog): State<Arc<Catalog>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let id = raw_id(id);
    let lamp = parse_id(&id)
        .and_then(|id| catalog.lamp(id))
        .ok_or(PageError::LampNotFound(id))?;
    Ok(Html(views::lamp_detail(lamp)))
}

/// `GET /lampEdit/:id`
pub async fn lamp_edit(
    State(catalog): State<Arc<Catalog>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let id = raw_id(id);
    let lamp = parse_id(&id)
        .and_then(|id| catalog.lamp(id))
        .ok_or(PageError::LampNotFound(id))?;
    Ok(Html(views::lamp_edit(lamp)))
}

/// `GET /fabrics`
pub async fn fabrics(State(catalog): State<Arc<Catalog>>) -> Html<String> {
    Html(views::fabrikant_list(catalog.fabrikanten()))
}

/// `GET /fabricDetail/:id`
pub async fn fabric_detail(
    State(catalog): State<Arc<Catalog>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let id = raw_id(id);
    let fabrikant = parse_id(&id)
        .and_then(|id| catalog.fabrikant(id))
        .ok_or(PageError::FabrikantNotFound(id))?;
    Ok(Html(views::fabrikant_detail(fabrikant)))
}

/// `GET /health` - returns `{ "ok": true, "lamps": n, "fabrikanten": n }`.
pub async fn health(State(catalog): State<Arc<Catalog>>) -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "lamps": catalog.lamps().len(),
        "fabrikanten": catalog.fabrikanten().len(),
    }))
}

/// Anything no route or static file answers.
pub async fn not_found(uri: Uri) -> PageError {
    PageError::RouteNotFound(uri.path().to_string())
}

/// The id segment as text. An undecodable segment (e.g. `%FF`) matches no
/// record, so it is kept only for the log.
fn raw_id(extracted: Result<Path<String>, PathRejection>) -> String {
    match extracted {
        Ok(Path(id)) => id,
        Err(rejection) => {
            debug!(error = %rejection, "unreadable id segment");
            rejection.body_text()
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
