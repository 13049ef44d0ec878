//! Content API routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use content::{PageRecord, SeoData};
use uuid::Uuid;

use crate::services::content::StoreError;
use crate::state::AppState;

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

/// `GET /api/pages` — list all pages, ordered by path.
pub async fn list_pages(State(state): State<AppState>) -> Json<Vec<PageRecord>> {
    Json(state.content.list_pages().await)
}

/// `GET /api/pages/:id` — fetch one page.
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, StatusCode> {
    state
        .content
        .page_by_id(id)
        .await
        .map(Json)
        .map_err(store_error_to_status)
}

/// `PATCH /api/pages/:id/seo` — replace a page's SEO metadata and return
/// the updated record.
pub async fn update_page_seo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(seo): Json<SeoData>,
) -> Result<impl IntoResponse, StatusCode> {
    match state.content.update_seo(id, seo).await {
        Ok(page) => {
            tracing::info!(page_id = %id, path = %page.path, "page seo updated");
            Ok(Json(page))
        }
        Err(err) => {
            tracing::warn!(page_id = %id, error = %err, "seo update rejected");
            Err(store_error_to_status(err))
        }
    }
}

fn store_error_to_status(err: StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) | StoreError::PathNotFound(_) => StatusCode::NOT_FOUND,
    }
}
