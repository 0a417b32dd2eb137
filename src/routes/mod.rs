use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::state::AppState;

pub mod cars;
pub mod dealers;
pub mod doc;
pub mod health;
pub mod inquiries;
pub mod params;
pub mod stats;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/stats", stats::router())
        .nest("/cars", cars::router())
        .nest("/dealers", dealers::router())
        .nest("/inquiries", inquiries::router())
}

/// Full application: health check, `/api`, docs and the JSON 404 fallback.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    let body = serde_json::json!({ "message": "Not Found", "path": uri.path() });
    (StatusCode::NOT_FOUND, Json(body))
}
