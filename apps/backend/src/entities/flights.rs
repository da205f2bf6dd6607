use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "airline_id")]
    pub airline_id: i64,
    #[sea_orm(column_name = "flight_number")]
    pub flight_number: String,
    #[sea_orm(column_name = "dpt_airport")]
    pub dpt_airport: String,
    #[sea_orm(column_name = "arr_airport")]
    pub arr_airport: String,
    /// Derived cache flag: true iff at least one bid references this flight.
    #[sea_orm(column_name = "has_bid")]
    pub has_bid: bool,
    pub active: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bids::Entity")]
    Bids,
    #[sea_orm(has_many = "super::flight_fares::Entity")]
    FlightFares,
    #[sea_orm(has_many = "super::flight_subfleet::Entity")]
    FlightSubfleet,
}

impl Related<super::bids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bids.def()
    }
}

impl Related<super::flight_fares::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightFares.def()
    }
}

impl Related<super::flight_subfleet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightSubfleet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
