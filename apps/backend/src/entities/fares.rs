use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fares")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub code: String,
    pub name: String,
    pub price: f64,
    pub cost: f64,
    pub capacity: i32,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight_fares::Entity")]
    FlightFares,
}

impl Related<super::flight_fares::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightFares.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
