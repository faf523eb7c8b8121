use crate::support::{get, sample_catalog, start_server};

#[tokio::test]
async fn index_renders_html() {
    let base = start_server(sample_catalog(), None).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(resp.text().await.unwrap().contains(r#"<a href="/lamps">"#));
}

#[tokio::test]
async fn register_success_renders() {
    let base = start_server(sample_catalog(), None).await;

    let (status, body) = get(format!("{base}/register-success")).await;
    assert_eq!(status, 200);
    assert!(body.contains("Registratie gelukt"));
}

#[tokio::test]
async fn health_reports_counts() {
    let base = start_server(sample_catalog(), None).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["lamps"], 4);
    assert_eq!(body["fabrikanten"], 2);
}

#[tokio::test]
async fn unknown_route_is_404_page() {
    let base = start_server(sample_catalog(), None).await;

    let (status, body) = get(format!("{base}/nergens")).await;
    assert_eq!(status, 404);
    assert!(body.contains("<code>/nergens</code>"));
}

#[tokio::test]
async fn static_dir_serves_assets() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css").join("style.css"), "body { margin: 0; }").unwrap();

    let base = start_server(sample_catalog(), Some(dir.path())).await;

    let (status, body) = get(format!("{base}/css/style.css")).await;
    assert_eq!(status, 200);
    assert_eq!(body, "body { margin: 0; }");

    let (status, body) = get(format!("{base}/css/missing.css")).await;
    assert_eq!(status, 404);
    assert!(body.contains("<code>/css/missing.css</code>"));
}

#[tokio::test]
async fn routes_win_over_static_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("lamps"), "static").unwrap();

    let base = start_server(sample_catalog(), Some(dir.path())).await;

    let (status, body) = get(format!("{base}/lamps")).await;
    assert_eq!(status, 200);
    assert!(body.contains("<h1>Lampen</h1>"));
}
