use lamp_catalog::{load_catalog, DocumentStore, InMemoryDocumentStore, StaticSource};

use crate::support::static_source;

#[tokio::test]
async fn empty_store_is_seeded_with_raw_documents() {
    let source = static_source();
    let store = InMemoryDocumentStore::new();

    let catalog = load_catalog(&source, Some(&store)).await.unwrap();

    assert_eq!(source.fetches(), 2);
    assert_eq!(catalog.lamps().len(), 2);
    assert_eq!(catalog.fabrikanten().len(), 2);

    // Stored exactly as fetched, extra keys included.
    let stored = store.find_all("Lamps").unwrap();
    assert_eq!(stored[0]["afbeelding"], "https://example.com/1.png");
    assert_eq!(store.find_all("Fabrikant").unwrap()[1]["land"], "SE");
}

#[tokio::test]
async fn populated_store_skips_the_source() {
    let store = InMemoryDocumentStore::new();
    load_catalog(&static_source(), Some(&store)).await.unwrap();

    // A source with nothing in it would fail if it were consulted.
    let empty = StaticSource::new();
    let catalog = load_catalog(&empty, Some(&store)).await.unwrap();

    assert_eq!(empty.fetches(), 0);
    assert_eq!(catalog.lamp(1).unwrap().name, "Zed");
    assert_eq!(catalog.fabrikant(11).unwrap().name, "Ikea");
}

#[tokio::test]
async fn seeding_does_not_duplicate_on_reload() {
    let store = InMemoryDocumentStore::new();
    load_catalog(&static_source(), Some(&store)).await.unwrap();
    load_catalog(&static_source(), Some(&store)).await.unwrap();

    assert_eq!(store.len("Lamps").unwrap(), 2);
    assert_eq!(store.len("Fabrikant").unwrap(), 2);
}

#[tokio::test]
async fn each_collection_is_checked_on_its_own() {
    let store = InMemoryDocumentStore::new();
    store
        .insert_many(
            "Lamps",
            &[serde_json::json!({
                "id": 5, "naam": "Wandspot", "prijs": 15, "kleur": "rood", "actief": true
            })],
        )
        .unwrap();

    let source = static_source();
    let catalog = load_catalog(&source, Some(&store)).await.unwrap();

    // Lamps came from the store, fabrikanten from the source.
    assert_eq!(source.fetches(), 1);
    assert_eq!(catalog.lamps().len(), 1);
    assert_eq!(catalog.lamp(5).unwrap().name, "Wandspot");
    assert_eq!(catalog.fabrikanten().len(), 2);
}

#[tokio::test]
async fn no_store_always_fetches() {
    let source = static_source();
    load_catalog(&source, None).await.unwrap();
    load_catalog(&source, None).await.unwrap();
    assert_eq!(source.fetches(), 4);
}

#[cfg(feature = "redb")]
#[tokio::test]
async fn redb_store_persists_across_restarts() {
    use lamp_catalog::RedbDocumentStore;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.redb");

    {
        let store = RedbDocumentStore::open(&path).unwrap();
        let catalog = load_catalog(&static_source(), Some(&store)).await.unwrap();
        assert_eq!(catalog.lamps().len(), 2);
    }

    let store = RedbDocumentStore::open(&path).unwrap();
    let empty = StaticSource::new();
    let catalog = load_catalog(&empty, Some(&store)).await.unwrap();

    assert_eq!(empty.fetches(), 0);
    let names: Vec<&str> = catalog.lamps().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Zed", "Alpha"]);
    assert_eq!(catalog.fabrikant(10).unwrap().extra["land"], "NL");
}
