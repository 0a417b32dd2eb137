use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{entity::enums::Region, response::FieldError};

pub const MAX_RATING: Decimal = Decimal::from_parts(50, 0, 0, false, 1);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDealer {
    pub name: String,
    /// Derived from `name` when absent.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub region: Region,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub rating: Decimal,
    #[serde(default)]
    pub total_sales: i32,
}

impl NewDealer {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "Required"));
            }
        }
        if self.rating < Decimal::ZERO || self.rating > MAX_RATING {
            errors.push(FieldError::new("rating", "Must be between 0.0 and 5.0"));
        }
        if self.total_sales < 0 {
            errors.push(FieldError::new("totalSales", "Must not be negative"));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
