//! SeaORM adapter for users.

use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entities::users;

/// Find a user by primary key
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}
