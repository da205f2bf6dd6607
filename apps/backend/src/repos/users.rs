//! Users repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::DomainError;

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub airline_id: i64,
}

/// Find a user by id
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            airline_id: model.airline_id,
        }
    }
}
