use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    #[sea_orm(string_value = "petrol")]
    Petrol,
    #[sea_orm(string_value = "diesel")]
    Diesel,
    #[sea_orm(string_value = "gas")]
    Gas,
    #[sea_orm(string_value = "electric")]
    Electric,
    #[sea_orm(string_value = "hybrid")]
    Hybrid,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    #[sea_orm(string_value = "automatic")]
    Automatic,
    #[sea_orm(string_value = "manual")]
    Manual,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    #[sea_orm(string_value = "sedan")]
    Sedan,
    #[sea_orm(string_value = "suv")]
    Suv,
    #[sea_orm(string_value = "hatchback")]
    Hatchback,
    #[sea_orm(string_value = "wagon")]
    Wagon,
    #[sea_orm(string_value = "coupe")]
    Coupe,
    #[sea_orm(string_value = "minivan")]
    Minivan,
    #[sea_orm(string_value = "pickup")]
    Pickup,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    #[default]
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "sold")]
    Sold,
    #[sea_orm(string_value = "reserved")]
    Reserved,
}

/// Administrative regions of Uzbekistan. Wire and storage values are the
/// display names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Region {
    #[sea_orm(string_value = "Toshkent shahri")]
    #[serde(rename = "Toshkent shahri")]
    ToshkentShahri,
    #[sea_orm(string_value = "Toshkent viloyati")]
    #[serde(rename = "Toshkent viloyati")]
    ToshkentViloyati,
    #[sea_orm(string_value = "Samarqand")]
    Samarqand,
    #[sea_orm(string_value = "Buxoro")]
    Buxoro,
    #[sea_orm(string_value = "Andijon")]
    Andijon,
    #[sea_orm(string_value = "Farg'ona")]
    #[serde(rename = "Farg'ona")]
    Fargona,
    #[sea_orm(string_value = "Namangan")]
    Namangan,
    #[sea_orm(string_value = "Qashqadaryo")]
    Qashqadaryo,
    #[sea_orm(string_value = "Surxondaryo")]
    Surxondaryo,
    #[sea_orm(string_value = "Navoiy")]
    Navoiy,
    #[sea_orm(string_value = "Xorazm")]
    Xorazm,
    #[sea_orm(string_value = "Jizzax")]
    Jizzax,
    #[sea_orm(string_value = "Sirdaryo")]
    Sirdaryo,
    #[sea_orm(string_value = "Qoraqalpog'iston")]
    #[serde(rename = "Qoraqalpog'iston")]
    Qoraqalpogiston,
}
