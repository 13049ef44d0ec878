#![recursion_limit = "256"]

mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::services::content::MemoryContent;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pages = services::content::default_site();
    tracing::info!(pages = pages.len(), "content store seeded");
    let state = state::AppState::new(Arc::new(MemoryContent::new(pages)));

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "workflowgene site listening");
    axum::serve(listener, app).await.expect("server failed");
}
