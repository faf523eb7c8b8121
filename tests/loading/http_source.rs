use lamp_catalog::{load_catalog, CatalogSource, HttpSource, InMemoryDocumentStore, LoadError};

use crate::support::{sources, start_upstream};

#[tokio::test]
async fn fetches_json_arrays() {
    let base = start_upstream().await;
    let source = HttpSource::new(&sources(&base, "lamps.json", "fabrikant.json")).unwrap();

    let lamps = source.fetch("Lamps").await.unwrap();
    assert_eq!(lamps.len(), 2);
    assert_eq!(lamps[1]["naam"], "Alpha");
}

#[tokio::test]
async fn loads_catalog_and_seeds_store() {
    let base = start_upstream().await;
    let source = HttpSource::new(&sources(&base, "lamps.json", "fabrikant.json")).unwrap();
    let store = InMemoryDocumentStore::new();

    let catalog = load_catalog(&source, Some(&store)).await.unwrap();

    assert_eq!(catalog.lamps().len(), 2);
    assert_eq!(catalog.fabrikant(10).unwrap().name, "Philips");
    assert_eq!(store.len("Lamps").unwrap(), 2);
}

#[tokio::test]
async fn error_status_fails_the_load() {
    let base = start_upstream().await;
    let source = HttpSource::new(&sources(&base, "lamps.json", "broken.json")).unwrap();

    let err = load_catalog(&source, None).await.unwrap_err();
    assert!(matches!(
        err,
        LoadError::Status {
            collection: "Fabrikant",
            status: 500,
            ..
        }
    ));
}

#[tokio::test]
async fn missing_file_fails_the_load() {
    let base = start_upstream().await;
    let source = HttpSource::new(&sources(&base, "nope.json", "fabrikant.json")).unwrap();

    let err = load_catalog(&source, None).await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let base = start_upstream().await;
    let source = HttpSource::new(&sources(&base, "garbage.json", "fabrikant.json")).unwrap();

    let err = load_catalog(&source, None).await.unwrap_err();
    assert!(matches!(err, LoadError::Decode { collection: "Lamps", .. }));
}

#[tokio::test]
async fn unreachable_source_is_a_fetch_error() {
    // Grab a free port, then close it again.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = format!("http://{addr}");
    let source = HttpSource::new(&sources(&base, "lamps.json", "fabrikant.json")).unwrap();

    let err = load_catalog(&source, None).await.unwrap_err();
    assert!(matches!(err, LoadError::Fetch { collection: "Lamps", .. }));
}

#[tokio::test]
async fn unknown_collection_is_rejected() {
    let source = HttpSource::new(&lamp_catalog::SourceConfig::default()).unwrap();
    let err = source.fetch("Gloeilampen").await.unwrap_err();
    assert!(matches!(err, LoadError::UnknownCollection(_)));
}
