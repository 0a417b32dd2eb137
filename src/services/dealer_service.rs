use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};
use uuid::Uuid;

use crate::{
    dto::dealers::NewDealer,
    entity::{
        cars::Column as CarCol,
        dealers::{ActiveModel, Column, Entity as Dealers},
        enums::Region,
        Cars,
    },
    error::{AppError, AppResult},
    models::{Dealer, DealerWithCarCount},
    response::FieldError,
    state::AppState,
};

/// A dealer row plus the number of cars referencing it, whatever their status.
#[derive(Debug, FromQueryResult)]
struct DealerRow {
    id: Uuid,
    name: String,
    slug: String,
    description: Option<String>,
    phone: String,
    address: String,
    city: String,
    region: Region,
    logo_url: Option<String>,
    verified: bool,
    rating: Decimal,
    total_sales: i32,
    created_at: DateTimeWithTimeZone,
    car_count: i64,
}

impl From<DealerRow> for DealerWithCarCount {
    fn from(row: DealerRow) -> Self {
        Self {
            dealer: Dealer {
                id: row.id,
                name: row.name,
                slug: row.slug,
                description: row.description,
                phone: row.phone,
                address: row.address,
                city: row.city,
                region: row.region,
                logo_url: row.logo_url,
                verified: row.verified,
                rating: row.rating,
                total_sales: row.total_sales,
                created_at: row.created_at.with_timezone(&Utc),
            },
            car_count: row.car_count,
        }
    }
}

fn with_car_count() -> Select<Dealers> {
    Dealers::find()
        .column_as(CarCol::Id.count(), "car_count")
        .left_join(Cars)
        .group_by(Column::Id)
}

/// All dealers, verified ones first, each group ordered by name.
pub async fn list_dealers(state: &AppState) -> AppResult<Vec<DealerWithCarCount>> {
    let dealers = with_car_count()
        .order_by_desc(Column::Verified)
        .order_by_asc(Column::Name)
        .into_model::<DealerRow>()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(DealerWithCarCount::from)
        .collect();
    Ok(dealers)
}

pub async fn get_dealer_by_slug(
    state: &AppState,
    slug: &str,
) -> AppResult<Option<DealerWithCarCount>> {
    let dealer = with_car_count()
        .filter(Column::Slug.eq(slug))
        .into_model::<DealerRow>()
        .one(&state.orm)
        .await?
        .map(DealerWithCarCount::from);
    Ok(dealer)
}

pub async fn get_dealer_by_id(state: &AppState, id: Uuid) -> AppResult<Option<Dealer>> {
    let dealer = Dealers::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Dealer::from);
    Ok(dealer)
}

pub async fn create_dealer(state: &AppState, payload: NewDealer) -> AppResult<Dealer> {
    payload.validate().map_err(AppError::Validation)?;

    let slug = payload
        .slug
        .as_deref()
        .map(slugify)
        .unwrap_or_else(|| slugify(&payload.name));
    if slug.is_empty() {
        return Err(AppError::Validation(vec![FieldError::new(
            "slug",
            "Must contain at least one letter or digit",
        )]));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name.trim().to_string()),
        slug: Set(slug),
        description: Set(payload.description),
        phone: Set(payload.phone),
        address: Set(payload.address),
        city: Set(payload.city),
        region: Set(payload.region),
        logo_url: Set(payload.logo_url),
        verified: Set(payload.verified),
        rating: Set(payload.rating),
        total_sales: Set(payload.total_sales),
        created_at: Set(Utc::now().into()),
    };
    let dealer = active.insert(&state.orm).await?;

    tracing::info!(dealer_id = %dealer.id, slug = %dealer.slug, "dealer created");
    Ok(dealer.into())
}

/// Lowercase `text` and collapse every run of characters outside `[a-z0-9]`
/// into a single `-`, trimming dashes at either end.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}
