//! SeaORM adapter for flights and their fare/subfleet relations.
//!
//! Related records are loaded with explicit queries instead of ORM-level
//! eager loading, so every fetch this component performs is visible here.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder};

use crate::entities::{fares, flight_fares, flight_subfleet, flights, subfleets};

/// Find a flight by primary key
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
) -> Result<Option<flights::Model>, sea_orm::DbErr> {
    flights::Entity::find_by_id(flight_id).one(conn).await
}

/// Persist the denormalized has_bid flag
pub async fn set_has_bid<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
    has_bid: bool,
) -> Result<(), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    flights::Entity::update_many()
        .col_expr(flights::Column::HasBid, Expr::value(has_bid))
        .col_expr(flights::Column::UpdatedAt, Expr::value(now))
        .filter(flights::Column::Id.eq(flight_id))
        .exec(conn)
        .await?;
    Ok(())
}

/// Load the flight's fare pivot rows together with their base fares
pub async fn fares_with_overrides<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
) -> Result<Vec<(flight_fares::Model, Option<fares::Model>)>, sea_orm::DbErr> {
    flight_fares::Entity::find()
        .filter(flight_fares::Column::FlightId.eq(flight_id))
        .find_also_related(fares::Entity)
        .order_by(flight_fares::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// Load the subfleets attached to a flight
pub async fn subfleets_for_flight<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
) -> Result<Vec<subfleets::Model>, sea_orm::DbErr> {
    let rows = flight_subfleet::Entity::find()
        .filter(flight_subfleet::Column::FlightId.eq(flight_id))
        .find_also_related(subfleets::Entity)
        .order_by(flight_subfleet::Column::Id, Order::Asc)
        .all(conn)
        .await?;

    Ok(rows.into_iter().filter_map(|(_, sf)| sf).collect())
}
