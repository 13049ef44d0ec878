//! REST API helpers for the content service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty/`None` since the builder only
//! drives these from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get empty lists and `Option` outputs instead of panics so a
//! missing or failing API degrades the builder UI without crashing
//! hydration.

#![allow(clippy::unused_async)]

use content::{PageRecord, SeoData};
use uuid::Uuid;

/// Fetch all pages from `GET /api/pages`. Returns an empty list on the
/// server or on any failure.
pub async fn fetch_pages() -> Vec<PageRecord> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::get("/api/pages").send().await else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        resp.json::<Vec<PageRecord>>().await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Persist SEO metadata for a page via `PATCH /api/pages/{id}/seo`.
/// Returns the updated record, or `None` on failure.
pub async fn update_page_seo(id: Uuid, seo: &SeoData) -> Option<PageRecord> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/pages/{id}/seo");
        let resp = gloo_net::http::Request::patch(&url)
            .json(seo)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<PageRecord>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, seo);
        None
    }
}
