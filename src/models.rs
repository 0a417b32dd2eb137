use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{
    cars,
    dealers,
    enums::{BodyType, CarStatus, FuelType, Region, Transmission},
    inquiries,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dealer {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub region: Region,
    pub logo_url: Option<String>,
    pub verified: bool,
    #[schema(value_type = String, example = "4.5")]
    pub rating: Decimal,
    pub total_sales: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealerWithCarCount {
    #[serde(flatten)]
    pub dealer: Dealer,
    pub car_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    pub dealer_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: i32,
    pub mileage: i32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub color: String,
    #[schema(value_type = Option<String>, example = "1.5")]
    pub engine_size: Option<Decimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub status: CarStatus,
    pub featured: bool,
    pub city: String,
    pub region: Region,
    pub created_at: DateTime<Utc>,
}

/// A listing joined with the dealer that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarWithDealer {
    #[serde(flatten)]
    pub car: Car,
    pub dealer: Dealer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub car_id: Uuid,
    pub dealer_id: Uuid,
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_cars: u64,
    pub total_dealers: u64,
    pub total_regions: u64,
}

impl From<dealers::Model> for Dealer {
    fn from(model: dealers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            phone: model.phone,
            address: model.address,
            city: model.city,
            region: model.region,
            logo_url: model.logo_url,
            verified: model.verified,
            rating: model.rating,
            total_sales: model.total_sales,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<cars::Model> for Car {
    fn from(model: cars::Model) -> Self {
        Self {
            id: model.id,
            dealer_id: model.dealer_id,
            make: model.make,
            model: model.model,
            year: model.year,
            price: model.price,
            mileage: model.mileage,
            fuel_type: model.fuel_type,
            transmission: model.transmission,
            body_type: model.body_type,
            color: model.color,
            engine_size: model.engine_size,
            description: model.description,
            image_url: model.image_url,
            images: model.images.map(|list| list.0),
            status: model.status,
            featured: model.featured,
            city: model.city,
            region: model.region,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<inquiries::Model> for Inquiry {
    fn from(model: inquiries::Model) -> Self {
        Self {
            id: model.id,
            car_id: model.car_id,
            dealer_id: model.dealer_id,
            name: model.name,
            phone: model.phone,
            message: model.message,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
