use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult, models::Stats, response::ErrorResponse, services::stats_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_stats))
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Available cars, verified dealers and dealer regions", body = Stats),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    ),
    tag = "Stats"
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<Stats>> {
    let stats = stats_service::get_stats(&state).await?;
    Ok(Json(stats))
}
