use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::extract::ValidQuery,
    models::CarWithDealer,
    response::ErrorResponse,
    routes::params::CarQuery,
    services::car_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars))
        .route("/{id}", get(get_car))
}

#[utoipa::path(
    get,
    path = "/api/cars",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring of make or model"),
        ("make" = Option<String>, Query, description = "Exact make"),
        ("region" = Option<String>, Query, description = "Region the car is listed in"),
        ("bodyType" = Option<String>, Query, description = "sedan, suv, hatchback, wagon, coupe, minivan, pickup"),
        ("fuelType" = Option<String>, Query, description = "petrol, diesel, gas, electric, hybrid"),
        ("transmission" = Option<String>, Query, description = "automatic, manual"),
        ("minPrice" = Option<i32>, Query, description = "Inclusive lower price bound"),
        ("maxPrice" = Option<i32>, Query, description = "Inclusive upper price bound"),
        ("minYear" = Option<i32>, Query, description = "Inclusive lower year bound"),
        ("maxYear" = Option<i32>, Query, description = "Inclusive upper year bound"),
        ("featured" = Option<bool>, Query, description = "Restrict to featured (true) or non-featured (false) cars"),
        ("dealerId" = Option<Uuid>, Query, description = "Owning dealer"),
        ("status" = Option<String>, Query, description = "available, sold, reserved"),
        ("limit" = Option<u64>, Query, description = "Maximum number of cars, default 50"),
        ("offset" = Option<u64>, Query, description = "Cars to skip after sorting, default 0"),
        ("sort" = Option<String>, Query, description = "price_asc, price_desc, year_desc, mileage_asc; newest first otherwise"),
    ),
    responses(
        (status = 200, description = "Cars matching every filter", body = Vec<CarWithDealer>),
        (status = 400, description = "Malformed filter", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    ),
    tag = "Cars"
)]
pub async fn list_cars(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<CarQuery>,
) -> AppResult<Json<Vec<CarWithDealer>>> {
    let cars = car_service::list_cars(&state, query).await?;
    Ok(Json(cars))
}

#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    params(
        ("id" = String, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car with its dealer", body = CarWithDealer),
        (status = 404, description = "Car not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    ),
    tag = "Cars"
)]
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CarWithDealer>> {
    // An id that is not a UUID cannot name a stored car.
    let id = Uuid::parse_str(&id).map_err(|_| AppError::NotFound("Car"))?;
    let car = car_service::get_car(&state, id)
        .await?
        .ok_or(AppError::NotFound("Car"))?;
    Ok(Json(car))
}
