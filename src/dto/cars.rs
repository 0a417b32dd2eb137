use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    entity::enums::{BodyType, CarStatus, FuelType, Region, Transmission},
    response::FieldError,
};

pub const MIN_YEAR: i32 = 1900;
/// Exclusive upper bound imposed by the `NUMERIC(2, 1)` column.
pub const MAX_ENGINE_SIZE: Decimal = Decimal::from_parts(100, 0, 0, false, 1);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
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
    #[serde(default)]
    pub engine_size: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub status: CarStatus,
    #[serde(default)]
    pub featured: bool,
    pub city: String,
    pub region: Region,
}

impl NewCar {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("make", &self.make),
            ("model", &self.model),
            ("color", &self.color),
            ("city", &self.city),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "Required"));
            }
        }
        if self.year < MIN_YEAR {
            errors.push(FieldError::new("year", format!("Must be {MIN_YEAR} or later")));
        }
        if self.price < 0 {
            errors.push(FieldError::new("price", "Must not be negative"));
        }
        if self.mileage < 0 {
            errors.push(FieldError::new("mileage", "Must not be negative"));
        }
        if self
            .engine_size
            .is_some_and(|size| size <= Decimal::ZERO || size >= MAX_ENGINE_SIZE)
        {
            errors.push(FieldError::new(
                "engineSize",
                "Must be greater than 0.0 and less than 10.0",
            ));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
