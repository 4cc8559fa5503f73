use std::time::Duration;

use axum::Router;
use storage::ReceiptStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::receipts::handlers::process_receipt,
        features::receipts::handlers::get_points,
    ),
    components(
        schemas(
            storage::models::Receipt,
            storage::models::Item,
            storage::dto::receipt::ProcessReceiptResponse,
            storage::dto::receipt::PointsResponse,
        )
    ),
    tags(
        (name = "receipts", description = "Receipt scoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Builds the application router around a shared receipt store
pub fn create_router(store: ReceiptStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .nest("/receipts", features::receipts::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(store)
}
