pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod store;

use axum::middleware::from_fn;
use axum::{routing::get, Extension, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::openapi::ApiDoc;
use crate::routes::{health, items, root, search};
use crate::store::ItemStore;

pub fn create_app(store: ItemStore) -> Router {
    Router::new()
        .route("/", get(root::handler))
        .route("/items/", get(items::handler))
        .route("/search/", get(search::handler))
        .route("/health", get(health::handler))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(from_fn(middleware::log_request))
        .layer(Extension(store))
}

pub async fn run_app(config: Config) -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let app = create_app(ItemStore::seed());
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        address = %config.bind_address,
        environment = %config.environment,
        "listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
