use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use lamp_catalog::{Fabrikant, Lamp, SourceConfig, StaticSource};

pub fn lamp_docs() -> Vec<Value> {
    vec![
        json!({
            "id": 1, "naam": "Zed", "prijs": 10, "kleur": "rood", "actief": true,
            "afbeelding": "https://example.com/1.png"
        }),
        json!({ "id": 2, "naam": "Alpha", "prijs": 5, "kleur": "wit", "actief": false }),
    ]
}

pub fn fabrikant_docs() -> Vec<Value> {
    vec![
        json!({ "id": 10, "naam": "Philips", "land": "NL" }),
        json!({ "id": 11, "naam": "Ikea", "land": "SE" }),
    ]
}

pub fn static_source() -> StaticSource {
    StaticSource::new()
        .with::<Lamp>(lamp_docs())
        .with::<Fabrikant>(fabrikant_docs())
}

/// Serve the upstream JSON files plus a few broken endpoints.
/// Returns the base URL.
pub async fn start_upstream() -> String {
    let app = Router::new()
        .route("/lamps.json", get(|| async { Json(Value::Array(lamp_docs())) }))
        .route(
            "/fabrikant.json",
            get(|| async { Json(Value::Array(fabrikant_docs())) }),
        )
        .route(
            "/broken.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/garbage.json", get(|| async { "<html>not json</html>" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn sources(base: &str, lamps: &str, fabrikanten: &str) -> SourceConfig {
    SourceConfig {
        lamps_url: format!("{base}/{lamps}"),
        fabrikanten_url: format!("{base}/{fabrikanten}"),
    }
}
