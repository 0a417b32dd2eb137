use std::num::NonZeroU64;

use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::cars::NewCar,
    entity::{
        cars::{ActiveModel, Column, Entity as Cars, ImageList, Model as CarModel},
        dealers::{Column as DealerCol, Entity as Dealers, Model as DealerModel},
    },
    error::{AppError, AppResult},
    models::{Car, CarWithDealer},
    routes::params::{CarQuery, CarSort},
    services::dealer_service,
    state::AppState,
};

pub const DEFAULT_LIMIT: u64 = 50;

/// Combine every supplied filter of `query` into one conjunctive condition.
pub fn car_condition(query: &CarQuery) -> Condition {
    let mut condition = Condition::all();

    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
        condition = condition.add(
            Condition::any()
                .add(
                    Expr::expr(Func::lower(Expr::col((Cars, Column::Make))))
                        .like(LikeExpr::new(pattern.clone()).escape('\\')),
                )
                .add(
                    Expr::expr(Func::lower(Expr::col((Cars, Column::Model))))
                        .like(LikeExpr::new(pattern).escape('\\')),
                ),
        );
    }

    if let Some(make) = query.make.as_ref() {
        condition = condition.add(Column::Make.eq(make.clone()));
    }
    if let Some(region) = query.region {
        condition = condition.add(Column::Region.eq(region));
    }
    if let Some(body_type) = query.body_type {
        condition = condition.add(Column::BodyType.eq(body_type));
    }
    if let Some(fuel_type) = query.fuel_type {
        condition = condition.add(Column::FuelType.eq(fuel_type));
    }
    if let Some(transmission) = query.transmission {
        condition = condition.add(Column::Transmission.eq(transmission));
    }
    if let Some(min_price) = query.min_price {
        condition = condition.add(Column::Price.gte(min_price));
    }
    if let Some(max_price) = query.max_price {
        condition = condition.add(Column::Price.lte(max_price));
    }
    if let Some(min_year) = query.min_year {
        condition = condition.add(Column::Year.gte(min_year));
    }
    if let Some(max_year) = query.max_year {
        condition = condition.add(Column::Year.lte(max_year));
    }
    if let Some(featured) = query.featured {
        condition = condition.add(Column::Featured.eq(featured));
    }
    if let Some(dealer_id) = query.dealer_id {
        condition = condition.add(Column::DealerId.eq(dealer_id));
    }
    if let Some(status) = query.status {
        condition = condition.add(Column::Status.eq(status));
    }

    condition
}

fn sort_key(sort: CarSort) -> Option<(Column, Order)> {
    match sort {
        CarSort::Newest => None,
        CarSort::PriceAsc => Some((Column::Price, Order::Asc)),
        CarSort::PriceDesc => Some((Column::Price, Order::Desc)),
        CarSort::YearDesc => Some((Column::Year, Order::Desc)),
        CarSort::MileageAsc => Some((Column::Mileage, Order::Asc)),
    }
}

fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

pub async fn list_cars(state: &AppState, query: CarQuery) -> AppResult<Vec<CarWithDealer>> {
    let limit = query.limit.map_or(DEFAULT_LIMIT, NonZeroU64::get);
    let offset = query.offset.unwrap_or(0);

    let mut finder = Cars::find()
        .find_also_related(Dealers)
        .filter(car_condition(&query));
    if let Some((column, order)) = sort_key(query.sort) {
        finder = finder.order_by(column, order);
    }
    // Newest first, then id, so rows with equal sort keys keep a stable order.
    finder = finder
        .order_by_desc(Column::CreatedAt)
        .order_by_asc(Column::Id);

    let rows = finder
        .limit(limit)
        .offset(offset)
        .all(&state.orm)
        .await?;

    tracing::debug!(count = rows.len(), limit, offset, "listed cars");
    rows.into_iter().map(with_dealer).collect()
}

pub async fn get_car(state: &AppState, id: Uuid) -> AppResult<Option<CarWithDealer>> {
    Cars::find_by_id(id)
        .find_also_related(Dealers)
        .one(&state.orm)
        .await?
        .map(with_dealer)
        .transpose()
}

/// Inventory of the dealer behind `slug`; an unknown slug yields no cars.
pub async fn list_cars_by_dealer_slug(
    state: &AppState,
    slug: &str,
) -> AppResult<Vec<CarWithDealer>> {
    let dealer = Dealers::find()
        .filter(DealerCol::Slug.eq(slug))
        .one(&state.orm)
        .await?;
    match dealer {
        Some(dealer) => list_cars(state, CarQuery::for_dealer(dealer.id)).await,
        None => Ok(Vec::new()),
    }
}

pub async fn create_car(state: &AppState, payload: NewCar) -> AppResult<Car> {
    payload.validate().map_err(AppError::Validation)?;

    if dealer_service::get_dealer_by_id(state, payload.dealer_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Dealer"));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        dealer_id: Set(payload.dealer_id),
        make: Set(payload.make.trim().to_string()),
        model: Set(payload.model.trim().to_string()),
        year: Set(payload.year),
        price: Set(payload.price),
        mileage: Set(payload.mileage),
        fuel_type: Set(payload.fuel_type),
        transmission: Set(payload.transmission),
        body_type: Set(payload.body_type),
        color: Set(payload.color),
        engine_size: Set(payload.engine_size),
        description: Set(payload.description),
        image_url: Set(payload.image_url),
        images: Set(payload.images.map(ImageList)),
        status: Set(payload.status),
        featured: Set(payload.featured),
        city: Set(payload.city),
        region: Set(payload.region),
        created_at: Set(Utc::now().into()),
    };
    let car = active.insert(&state.orm).await?;

    tracing::info!(car_id = %car.id, dealer_id = %car.dealer_id, "car listed");
    Ok(car.into())
}

// The foreign key guarantees a dealer row, so a miss here is corrupt data.
fn with_dealer((car, dealer): (CarModel, Option<DealerModel>)) -> AppResult<CarWithDealer> {
    let dealer = dealer.ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "car {} references missing dealer {}",
            car.id,
            car.dealer_id
        ))
    })?;
    Ok(CarWithDealer {
        car: car.into(),
        dealer: dealer.into(),
    })
}
