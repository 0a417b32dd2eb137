use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::{AppError, AppResult},
    models::{CarWithDealer, DealerWithCarCount},
    response::ErrorResponse,
    services::{car_service, dealer_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_dealers))
        .route("/{slug}", get(get_dealer))
        .route("/{slug}/cars", get(list_dealer_cars))
}

#[utoipa::path(
    get,
    path = "/api/dealers",
    responses(
        (status = 200, description = "Verified dealers first, then by name", body = Vec<DealerWithCarCount>),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    ),
    tag = "Dealers"
)]
pub async fn list_dealers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DealerWithCarCount>>> {
    let dealers = dealer_service::list_dealers(&state).await?;
    Ok(Json(dealers))
}

#[utoipa::path(
    get,
    path = "/api/dealers/{slug}",
    params(
        ("slug" = String, Path, description = "Dealer slug")
    ),
    responses(
        (status = 200, description = "Dealer with its car count", body = DealerWithCarCount),
        (status = 404, description = "Dealer not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    ),
    tag = "Dealers"
)]
pub async fn get_dealer(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DealerWithCarCount>> {
    let dealer = dealer_service::get_dealer_by_slug(&state, &slug)
        .await?
        .ok_or(AppError::NotFound("Dealer"))?;
    Ok(Json(dealer))
}

#[utoipa::path(
    get,
    path = "/api/dealers/{slug}/cars",
    params(
        ("slug" = String, Path, description = "Dealer slug")
    ),
    responses(
        (status = 200, description = "Dealer inventory, empty for an unknown dealer", body = Vec<CarWithDealer>),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    ),
    tag = "Dealers"
)]
pub async fn list_dealer_cars(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vec<CarWithDealer>>> {
    let cars = car_service::list_cars_by_dealer_slug(&state, &slug).await?;
    Ok(Json(cars))
}
