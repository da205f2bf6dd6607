use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pivot between flights and fares. Non-null pivot columns override the
/// base fare values for that flight.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flight_fares")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "flight_id")]
    pub flight_id: i64,
    #[sea_orm(column_name = "fare_id")]
    pub fare_id: i64,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub capacity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flights::Entity",
        from = "Column::FlightId",
        to = "super::flights::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Flights,
    #[sea_orm(
        belongs_to = "super::fares::Entity",
        from = "Column::FareId",
        to = "super::fares::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Fares,
}

impl Related<super::flights::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flights.def()
    }
}

impl Related<super::fares::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fares.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
