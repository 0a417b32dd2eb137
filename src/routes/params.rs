use std::{fmt::Display, num::NonZeroU64, str::FromStr};

use sea_orm::ActiveEnum;
use serde::{Deserialize, Deserializer, de};
use uuid::Uuid;

use crate::entity::enums::{BodyType, CarStatus, FuelType, Region, Transmission};

/// Ordering of a car listing. Unrecognized sort keys fall back to `Newest`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CarSort {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    YearDesc,
    MileageAsc,
}

impl CarSort {
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "price_asc" => CarSort::PriceAsc,
            "price_desc" => CarSort::PriceDesc,
            "year_desc" => CarSort::YearDesc,
            "mileage_asc" => CarSort::MileageAsc,
            _ => CarSort::Newest,
        }
    }
}

/// Listing filters. Every field is optional and an absent field places no
/// constraint on its dimension.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub make: Option<String>,
    #[serde(default, deserialize_with = "enum_value")]
    pub region: Option<Region>,
    #[serde(default, deserialize_with = "enum_value")]
    pub body_type: Option<BodyType>,
    #[serde(default, deserialize_with = "enum_value")]
    pub fuel_type: Option<FuelType>,
    #[serde(default, deserialize_with = "enum_value")]
    pub transmission: Option<Transmission>,
    #[serde(default, deserialize_with = "parsed")]
    pub min_price: Option<i32>,
    #[serde(default, deserialize_with = "parsed")]
    pub max_price: Option<i32>,
    #[serde(default, deserialize_with = "parsed")]
    pub min_year: Option<i32>,
    #[serde(default, deserialize_with = "parsed")]
    pub max_year: Option<i32>,
    #[serde(default, deserialize_with = "parsed")]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "parsed")]
    pub dealer_id: Option<Uuid>,
    #[serde(default, deserialize_with = "enum_value")]
    pub status: Option<CarStatus>,
    #[serde(default, deserialize_with = "row_count")]
    pub limit: Option<NonZeroU64>,
    #[serde(default, deserialize_with = "row_count")]
    pub offset: Option<u64>,
    #[serde(default, deserialize_with = "sort_or_newest")]
    pub sort: CarSort,
}

impl CarQuery {
    pub fn for_dealer(dealer_id: Uuid) -> Self {
        Self {
            dealer_id: Some(dealer_id),
            ..Self::default()
        }
    }
}

// Query strings carry empty values for cleared form inputs (`minPrice=`).
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

fn parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match blank_as_none(deserializer)? {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|err| de::Error::custom(format!("invalid value `{raw}`: {err}"))),
        None => Ok(None),
    }
}

/// Largest `limit` or `offset` accepted; the database drivers bind both as
/// signed 64-bit integers.
pub const MAX_ROW_COUNT: u64 = i64::MAX as u64;

fn row_count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Copy + Into<u64>,
    T::Err: Display,
{
    let value: Option<T> = parsed(deserializer)?;
    if let Some(count) = value.map(Into::<u64>::into) {
        if count > MAX_ROW_COUNT {
            return Err(de::Error::custom(format!(
                "invalid value `{count}`: must not exceed {MAX_ROW_COUNT}"
            )));
        }
    }
    Ok(value)
}

fn enum_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ActiveEnum<Value = String>,
{
    match blank_as_none(deserializer)? {
        Some(raw) => T::try_from_value(&raw)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("unknown value `{raw}`"))),
        None => Ok(None),
    }
}

fn sort_or_newest<'de, D>(deserializer: D) -> Result<CarSort, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(CarSort::from_param).unwrap_or_default())
}
