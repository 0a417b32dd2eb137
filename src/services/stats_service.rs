use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

use crate::{
    entity::{Cars, Dealers, cars, dealers, enums::CarStatus},
    error::AppResult,
    models::Stats,
    state::AppState,
};

/// Landing-page counters. Each count is its own query against current storage.
pub async fn get_stats(state: &AppState) -> AppResult<Stats> {
    let total_cars = Cars::find()
        .filter(cars::Column::Status.eq(CarStatus::Available))
        .count(&state.orm)
        .await?;

    let total_dealers = Dealers::find()
        .filter(dealers::Column::Verified.eq(true))
        .count(&state.orm)
        .await?;

    let total_regions = Dealers::find()
        .select_only()
        .column(dealers::Column::Region)
        .distinct()
        .count(&state.orm)
        .await?;

    Ok(Stats {
        total_cars,
        total_dealers,
        total_regions,
    })
}
