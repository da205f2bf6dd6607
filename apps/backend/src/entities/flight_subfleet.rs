use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flight_subfleet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "flight_id")]
    pub flight_id: i64,
    #[sea_orm(column_name = "subfleet_id")]
    pub subfleet_id: i64,
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
        belongs_to = "super::subfleets::Entity",
        from = "Column::SubfleetId",
        to = "super::subfleets::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Subfleets,
}

impl Related<super::flights::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flights.def()
    }
}

impl Related<super::subfleets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subfleets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
