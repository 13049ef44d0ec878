use super::*;

#[tokio::test]
async fn default_site_lists_pages_sorted_by_path() {
    let store = MemoryContent::with_default_site();
    let pages = store.list_pages().await;
    let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "/community", "/pricing", "/resources"]);
}

#[tokio::test]
async fn page_by_path_finds_seeded_pages() {
    let store = MemoryContent::with_default_site();
    let pricing = store.page_by_path("/pricing").await.unwrap();
    assert_eq!(pricing.title, "Pricing");
    assert!(pricing.seo.is_some());
}

#[tokio::test]
async fn page_by_path_unknown_returns_path_not_found() {
    let store = MemoryContent::with_default_site();
    let err = store.page_by_path("/nope").await.unwrap_err();
    assert!(matches!(err, StoreError::PathNotFound(p) if p == "/nope"));
}

#[tokio::test]
async fn page_by_id_round_trips() {
    let store = MemoryContent::with_default_site();
    let home = store.page_by_path("/").await.unwrap();
    let fetched = store.page_by_id(home.id).await.unwrap();
    assert_eq!(fetched, home);
}

#[tokio::test]
async fn page_by_id_unknown_returns_not_found() {
    let store = MemoryContent::with_default_site();
    let missing = Uuid::new_v4();
    let err = store.page_by_id(missing).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[tokio::test]
async fn update_seo_replaces_metadata_and_persists() {
    let store = MemoryContent::with_default_site();
    let resources = store.page_by_path("/resources").await.unwrap();
    assert!(resources.seo.is_none());

    let seo = SeoData {
        title: "Resources — WorkflowGene Cloud".to_owned(),
        ..SeoData::default()
    };
    let updated = store.update_seo(resources.id, seo.clone()).await.unwrap();
    assert_eq!(updated.seo.as_ref(), Some(&seo));

    let fetched = store.page_by_id(resources.id).await.unwrap();
    assert_eq!(fetched.seo, Some(seo));
}

#[tokio::test]
async fn update_seo_unknown_page_errors() {
    let store = MemoryContent::with_default_site();
    let err = store
        .update_seo(Uuid::new_v4(), SeoData::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn seeded_trees_are_well_formed() {
    for page in default_site() {
        assert!(page.root.node_count() >= 3, "page {} too small", page.path);
        assert!(page.root.node_type.is_container());
        assert!(page.root.find(&page.root.id).is_some());
    }
}

#[test]
fn home_tree_contains_known_blocks() {
    let pages = default_site();
    let home = pages.iter().find(|p| p.path == "/").unwrap();
    let hero = home.root.find("home-hero").unwrap();
    assert_eq!(hero.node_type, NodeType::Hero);
    assert_eq!(hero.prop_str("title"), Some("Automate Your Business DNA"));

    let features = home.root.find("home-features").unwrap();
    assert_eq!(features.children.len(), 3);
    assert_eq!(features.prop_u64("columns"), Some(3));
}
