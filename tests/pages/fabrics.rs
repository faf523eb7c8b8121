use crate::support::{assert_in_order, get, sample_catalog, start_server};

#[tokio::test]
async fn list_keeps_catalog_order() {
    let base = start_server(sample_catalog(), None).await;

    let (status, body) = get(format!("{base}/fabrics")).await;
    assert_eq!(status, 200);
    assert_in_order(&body, &["Philips", "Ikea"]);
    assert!(body.contains(r#"<a href="/fabricDetail/11">Ikea</a>"#));
}

#[tokio::test]
async fn list_ignores_sort_params() {
    let base = start_server(sample_catalog(), None).await;

    let (status, body) = get(format!("{base}/fabrics?sortField=naam&q=ikea")).await;
    assert_eq!(status, 200);
    assert_in_order(&body, &["Philips", "Ikea"]);
}

#[tokio::test]
async fn detail_renders_fabrikant() {
    let base = start_server(sample_catalog(), None).await;

    let (status, body) = get(format!("{base}/fabricDetail/10")).await;
    assert_eq!(status, 200);
    assert!(body.contains("<h1>Philips</h1>"));
}

#[tokio::test]
async fn detail_of_missing_fabrikant_is_404() {
    let base = start_server(sample_catalog(), None).await;

    let (status, body) = get(format!("{base}/fabricDetail/1")).await;
    assert_eq!(status, 404);
    assert_eq!(body, "Geen fabrikant gevonden");
}

#[tokio::test]
async fn detail_with_undecodable_id_is_404() {
    let base = start_server(sample_catalog(), None).await;

    let (status, body) = get(format!("{base}/fabricDetail/%FF")).await;
    assert_eq!(status, 404);
    assert_eq!(body, "Geen fabrikant gevonden");
}
