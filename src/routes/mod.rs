use axum::{
    http::{header, HeaderName, Method, StatusCode},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

pub mod movies;
pub mod query;
pub mod references;
pub mod state;

pub use query::QueryParams;
pub use state::AppState;

/// Path prefix shared by every catalog route
pub const API_PREFIX: &str = "/api/gm";

/// Creates the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(cors_layer()),
        )
}

/// Catalog routes under `/api/gm`
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/paginated", get(movies::paginated))
        .route("/search", get(movies::search))
        .route("/search/byActorKey", get(movies::by_actor_key))
        .route("/search/byCategoryKey", get(movies::by_category_key))
        .route("/movie/:id", get(movies::movie))
        .route("/category", get(references::categories))
        .route("/actor", get(references::actors))
        .route("/country", get(references::countries))
}

/// Any origin, credentials allowed. The origin is mirrored back because a
/// wildcard origin cannot be combined with credentials.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::ORIGIN,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
