use std::path::Path;
use std::sync::Arc;

use lamp_catalog::{web, Catalog, Fabrikant, Lamp};

pub fn sample_catalog() -> Arc<Catalog> {
    let mut hanglamp = Lamp::new(4, "Hanglamp", 89.0, "blauw", false);
    hanglamp
        .extra
        .insert("materiaal".into(), serde_json::json!("messing"));

    let catalog = Catalog::new(
        vec![
            Lamp::new(1, "Zed", 10.0, "rood", true),
            Lamp::new(2, "Alpha", 5.0, "wit", false),
            Lamp::new(3, "Bureaulamp", 49.95, "zwart", true),
            hanglamp,
        ],
        vec![Fabrikant::new(10, "Philips"), Fabrikant::new(11, "Ikea")],
    )
    .unwrap();
    Arc::new(catalog)
}

/// Bind to port 0 and return the base URL.
pub async fn start_server(catalog: Arc<Catalog>, static_dir: Option<&Path>) -> String {
    let app = web::router(catalog, static_dir);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn get(url: String) -> (u16, String) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap();
    (status, body)
}

/// Byte offsets of each lamp link in a list page, in the order given.
pub fn link_positions(body: &str, names: &[&str]) -> Vec<usize> {
    names
        .iter()
        .map(|name| {
            body.find(&format!(">{name}</a>"))
                .unwrap_or_else(|| panic!("{name} not on page"))
        })
        .collect()
}

pub fn assert_in_order(body: &str, names: &[&str]) {
    let positions = link_positions(body, names);
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted, "expected order {names:?}");
}
