use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{BodyType, CarStatus, FuelType, Region, Transmission};

/// Gallery URLs in display order, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ImageList(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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
    #[sea_orm(column_type = "Decimal(Some((2, 1)))", nullable)]
    pub engine_size: Option<Decimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub images: Option<ImageList>,
    pub status: CarStatus,
    pub featured: bool,
    pub city: String,
    pub region: Region,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dealers::Entity",
        from = "Column::DealerId",
        to = "super::dealers::Column::Id"
    )]
    Dealers,
    #[sea_orm(has_many = "super::inquiries::Entity")]
    Inquiries,
}

impl Related<super::dealers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dealers.def()
    }
}

impl Related<super::inquiries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inquiries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
