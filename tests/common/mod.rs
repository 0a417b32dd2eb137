#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, Schema, Set,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use avtouz_api::{
    entity::{
        Cars, Dealers, Inquiries, cars, dealers,
        enums::{BodyType, CarStatus, FuelType, Region, Transmission},
    },
    state::AppState,
};

/// Fresh in-memory database with the marketplace tables.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    // A second connection would open a second, empty in-memory database.
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;

    let backend = orm.get_database_backend();
    let schema = Schema::new(backend);
    orm.execute(backend.build(&schema.create_table_from_entity(Dealers)))
        .await?;
    orm.execute(backend.build(&schema.create_table_from_entity(Cars)))
        .await?;
    orm.execute(backend.build(&schema.create_table_from_entity(Inquiries)))
        .await?;

    Ok(AppState { orm })
}

fn at_minute(minute: i64) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minute)
}

pub async fn insert_dealer(
    state: &AppState,
    name: &str,
    verified: bool,
    region: Region,
) -> anyhow::Result<dealers::Model> {
    let slug = avtouz_api::services::dealer_service::slugify(name);
    let dealer = dealers::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        slug: Set(slug),
        description: Set(None),
        phone: Set("+998901112233".into()),
        address: Set("Navoiy ko'chasi 1".into()),
        city: Set("Toshkent".into()),
        region: Set(region),
        logo_url: Set(None),
        verified: Set(verified),
        rating: Set(Decimal::ZERO),
        total_sales: Set(0),
        created_at: Set(at_minute(0).into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(dealer)
}

/// Listing fixture; `minute` spaces creation times so newest-first order is known.
#[derive(Debug, Clone)]
pub struct CarFixture {
    pub make: &'static str,
    pub model: &'static str,
    pub year: i32,
    pub price: i32,
    pub mileage: i32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub status: CarStatus,
    pub featured: bool,
    pub region: Region,
    pub minute: i64,
}

impl CarFixture {
    pub fn new(make: &'static str, model: &'static str) -> Self {
        Self {
            make,
            model,
            year: 2020,
            price: 10000,
            mileage: 50000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            body_type: BodyType::Sedan,
            status: CarStatus::Available,
            featured: false,
            region: Region::ToshkentShahri,
            minute: 0,
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn mileage(mut self, mileage: i32) -> Self {
        self.mileage = mileage;
        self
    }

    pub fn fuel(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = fuel_type;
        self
    }

    pub fn body(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        self
    }

    pub fn transmission(mut self, transmission: Transmission) -> Self {
        self.transmission = transmission;
        self
    }

    pub fn status(mut self, status: CarStatus) -> Self {
        self.status = status;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn minute(mut self, minute: i64) -> Self {
        self.minute = minute;
        self
    }
}

pub async fn insert_car(
    state: &AppState,
    dealer: &dealers::Model,
    fixture: CarFixture,
) -> anyhow::Result<cars::Model> {
    let car = cars::ActiveModel {
        id: Set(Uuid::new_v4()),
        dealer_id: Set(dealer.id),
        make: Set(fixture.make.to_string()),
        model: Set(fixture.model.to_string()),
        year: Set(fixture.year),
        price: Set(fixture.price),
        mileage: Set(fixture.mileage),
        fuel_type: Set(fixture.fuel_type),
        transmission: Set(fixture.transmission),
        body_type: Set(fixture.body_type),
        color: Set("White".into()),
        engine_size: Set(None),
        description: Set(None),
        image_url: Set(None),
        images: Set(None),
        status: Set(fixture.status),
        featured: Set(fixture.featured),
        city: Set("Toshkent".into()),
        region: Set(fixture.region),
        created_at: Set(at_minute(fixture.minute).into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(car)
}

pub fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())?)
}

pub fn post_json(uri: &str, body: &Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

pub async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Ok((status, body))
}
