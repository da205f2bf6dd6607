//! SeaORM adapter for flight reports.

use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entities::pireps;

/// Find a flight report by primary key
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    pirep_id: i64,
) -> Result<Option<pireps::Model>, sea_orm::DbErr> {
    pireps::Entity::find_by_id(pirep_id).one(conn).await
}
