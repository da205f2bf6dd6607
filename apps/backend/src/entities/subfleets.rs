use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subfleets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "airline_id")]
    pub airline_id: i64,
    pub name: String,
    #[sea_orm(column_name = "type_code")]
    pub type_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight_subfleet::Entity")]
    FlightSubfleet,
}

impl Related<super::flight_subfleet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightSubfleet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
