use super::*;
use crate::state::test_helpers::memory_state;

#[test]
fn store_error_to_status_maps_not_found() {
    let err = StoreError::NotFound(Uuid::nil());
    assert_eq!(store_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn store_error_to_status_maps_path_not_found() {
    let err = StoreError::PathNotFound("/nope".to_owned());
    assert_eq!(store_error_to_status(err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_pages_returns_seeded_site() {
    let state = memory_state();
    let Json(pages) = list_pages(State(state)).await;
    assert_eq!(pages.len(), 4);
    assert_eq!(pages[0].path, "/");
}

#[tokio::test]
async fn get_page_finds_listed_page() {
    let state = memory_state();
    let Json(pages) = list_pages(State(state.clone())).await;
    let id = pages[0].id;

    let result = get_page(State(state), Path(id)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn get_page_unknown_id_is_404() {
    let state = memory_state();
    let err = get_page(State(state), Path(Uuid::new_v4()))
        .await
        .map(|_| ())
        .unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_page_seo_persists_new_metadata() {
    let state = memory_state();
    let Json(pages) = list_pages(State(state.clone())).await;
    let resources = pages.iter().find(|p| p.path == "/resources").unwrap();
    assert!(resources.seo.is_none());

    let seo = SeoData {
        title: "Resources — WorkflowGene Cloud".to_owned(),
        ..SeoData::default()
    };
    let result = update_page_seo(State(state.clone()), Path(resources.id), Json(seo.clone())).await;
    assert!(result.is_ok());

    let stored = state.content.page_by_id(resources.id).await.unwrap();
    assert_eq!(stored.seo, Some(seo));
}

#[tokio::test]
async fn update_page_seo_unknown_id_is_404() {
    let state = memory_state();
    let err = update_page_seo(State(state), Path(Uuid::new_v4()), Json(SeoData::default()))
        .await
        .map(|_| ())
        .unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}
