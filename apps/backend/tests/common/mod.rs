#![allow(dead_code)]

// tests/common/mod.rs

use backend::entities::{bids, fares, flight_fares, flight_subfleet, flights, pireps, users};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryFilter, Set};

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

fn now() -> time::OffsetDateTime {
    time::OffsetDateTime::now_utc()
}

pub async fn create_user(db: &DatabaseConnection, name: &str, airline_id: i64) -> i64 {
    let user = users::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(format!("{name}@example.com")),
        airline_id: Set(airline_id),
        created_at: Set(now()),
        updated_at: Set(now()),
    }
    .insert(db)
    .await
    .expect("insert user");
    user.id
}

pub async fn create_flight(db: &DatabaseConnection, airline_id: i64, flight_number: &str) -> i64 {
    create_flight_flagged(db, airline_id, flight_number, false).await
}

pub async fn create_flight_flagged(
    db: &DatabaseConnection,
    airline_id: i64,
    flight_number: &str,
    has_bid: bool,
) -> i64 {
    let flight = flights::ActiveModel {
        id: NotSet,
        airline_id: Set(airline_id),
        flight_number: Set(flight_number.to_string()),
        dpt_airport: Set("KAUS".to_string()),
        arr_airport: Set("KJFK".to_string()),
        has_bid: Set(has_bid),
        active: Set(true),
        created_at: Set(now()),
        updated_at: Set(now()),
    }
    .insert(db)
    .await
    .expect("insert flight");
    flight.id
}

/// Insert a bid row directly, bypassing the service.
pub async fn create_bid_row(db: &DatabaseConnection, user_id: i64, flight_id: i64) -> i64 {
    let bid = bids::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        flight_id: Set(flight_id),
        created_at: Set(now()),
        updated_at: Set(now()),
    }
    .insert(db)
    .await
    .expect("insert bid");
    bid.id
}

pub async fn create_fare(
    db: &DatabaseConnection,
    code: &str,
    price: f64,
    cost: f64,
    capacity: i32,
) -> i64 {
    let fare = fares::ActiveModel {
        id: NotSet,
        code: Set(code.to_string()),
        name: Set(format!("{code} fare")),
        price: Set(price),
        cost: Set(cost),
        capacity: Set(capacity),
        notes: Set(None),
    }
    .insert(db)
    .await
    .expect("insert fare");
    fare.id
}

pub async fn link_fare(
    db: &DatabaseConnection,
    flight_id: i64,
    fare_id: i64,
    price: Option<f64>,
    cost: Option<f64>,
    capacity: Option<i32>,
) {
    flight_fares::ActiveModel {
        id: NotSet,
        flight_id: Set(flight_id),
        fare_id: Set(fare_id),
        price: Set(price),
        cost: Set(cost),
        capacity: Set(capacity),
    }
    .insert(db)
    .await
    .expect("insert flight fare");
}

pub async fn create_subfleet(
    db: &DatabaseConnection,
    airline_id: i64,
    name: &str,
    type_code: &str,
) -> i64 {
    let subfleet = backend::entities::subfleets::ActiveModel {
        id: NotSet,
        airline_id: Set(airline_id),
        name: Set(name.to_string()),
        type_code: Set(type_code.to_string()),
    }
    .insert(db)
    .await
    .expect("insert subfleet");
    subfleet.id
}

pub async fn link_subfleet(db: &DatabaseConnection, flight_id: i64, subfleet_id: i64) {
    flight_subfleet::ActiveModel {
        id: NotSet,
        flight_id: Set(flight_id),
        subfleet_id: Set(subfleet_id),
    }
    .insert(db)
    .await
    .expect("insert flight subfleet");
}

pub async fn create_pirep(db: &DatabaseConnection, user_id: i64, flight_id: Option<i64>) -> i64 {
    let pirep = pireps::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        flight_id: Set(flight_id),
        state: Set("accepted".to_string()),
        created_at: Set(now()),
        updated_at: Set(now()),
    }
    .insert(db)
    .await
    .expect("insert pirep");
    pirep.id
}

pub async fn flight_has_bid(db: &DatabaseConnection, flight_id: i64) -> bool {
    flights::Entity::find_by_id(flight_id)
        .one(db)
        .await
        .expect("load flight")
        .expect("flight exists")
        .has_bid
}

pub async fn bid_rows_for_flight(db: &DatabaseConnection, flight_id: i64) -> u64 {
    bids::Entity::find()
        .filter(bids::Column::FlightId.eq(flight_id))
        .count(db)
        .await
        .expect("count bids")
}

pub async fn bid_rows_for_pair(db: &DatabaseConnection, user_id: i64, flight_id: i64) -> u64 {
    bids::Entity::find()
        .filter(bids::Column::UserId.eq(user_id))
        .filter(bids::Column::FlightId.eq(flight_id))
        .count(db)
        .await
        .expect("count bids")
}
