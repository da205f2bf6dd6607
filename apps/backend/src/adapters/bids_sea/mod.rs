//! SeaORM adapter for the bids table.

use sea_orm::error::SqlErr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::bids;

pub mod dto;

pub use dto::BidCreate;

/// Find a bid by primary key
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bid_id: i64,
) -> Result<Option<bids::Model>, sea_orm::DbErr> {
    bids::Entity::find_by_id(bid_id).one(conn).await
}

/// Find the bid for a (user, flight) pair, if any
pub async fn find_by_user_and_flight<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    flight_id: i64,
) -> Result<Option<bids::Model>, sea_orm::DbErr> {
    bids::Entity::find()
        .filter(bids::Column::UserId.eq(user_id))
        .filter(bids::Column::FlightId.eq(flight_id))
        .one(conn)
        .await
}

/// Find all bids on a flight
pub async fn find_all_by_flight<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
) -> Result<Vec<bids::Model>, sea_orm::DbErr> {
    bids::Entity::find()
        .filter(bids::Column::FlightId.eq(flight_id))
        .order_by(bids::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// Find all bids held by a user
pub async fn find_all_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<bids::Model>, sea_orm::DbErr> {
    bids::Entity::find()
        .filter(bids::Column::UserId.eq(user_id))
        .order_by(bids::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// Count bids held by a user across all flights
pub async fn count_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    bids::Entity::find()
        .filter(bids::Column::UserId.eq(user_id))
        .count(conn)
        .await
}

/// Count bids on a flight
pub async fn count_by_flight<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    bids::Entity::find()
        .filter(bids::Column::FlightId.eq(flight_id))
        .count(conn)
        .await
}

/// Create the bid for a (user, flight) pair, or fetch the existing one.
///
/// Never duplicates a row for the pair: the lookup-then-insert runs inside
/// the caller's transaction, and the unique index on (user_id, flight_id)
/// turns a lost race into a refetch.
pub async fn create_or_fetch(
    txn: &DatabaseTransaction,
    dto: BidCreate,
) -> Result<bids::Model, sea_orm::DbErr> {
    if let Some(existing) = find_by_user_and_flight(txn, dto.user_id, dto.flight_id).await? {
        return Ok(existing);
    }

    let now = time::OffsetDateTime::now_utc();
    let bid = bids::ActiveModel {
        id: sea_orm::NotSet,
        user_id: Set(dto.user_id),
        flight_id: Set(dto.flight_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    match bid.insert(txn).await {
        Ok(model) => Ok(model),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            match find_by_user_and_flight(txn, dto.user_id, dto.flight_id).await? {
                Some(existing) => Ok(existing),
                None => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}

/// Hard-delete every bid row for a (user, flight) pair; returns rows affected.
pub async fn delete_by_user_and_flight(
    txn: &DatabaseTransaction,
    user_id: i64,
    flight_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = bids::Entity::delete_many()
        .filter(bids::Column::UserId.eq(user_id))
        .filter(bids::Column::FlightId.eq(flight_id))
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}
