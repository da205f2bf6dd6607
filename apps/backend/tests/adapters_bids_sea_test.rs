mod common;

use backend::adapters::bids_sea;
use backend_test_support::db::sqlite_mem;
use sea_orm::TransactionTrait;

use common::{bid_rows_for_pair, create_flight, create_user};

#[tokio::test]
async fn create_or_fetch_never_duplicates_a_pair() {
    let db = sqlite_mem().await.expect("build test db");
    let user_id = create_user(&db, "nora", 1).await;
    let flight_id = create_flight(&db, 1, "VA401").await;

    let txn = db.begin().await.expect("begin txn");
    let first = bids_sea::create_or_fetch(&txn, bids_sea::BidCreate { user_id, flight_id })
        .await
        .expect("create bid");
    let second = bids_sea::create_or_fetch(&txn, bids_sea::BidCreate { user_id, flight_id })
        .await
        .expect("fetch bid");
    txn.commit().await.expect("commit");

    assert_eq!(first.id, second.id);
    assert_eq!(bid_rows_for_pair(&db, user_id, flight_id).await, 1);
}

#[tokio::test]
async fn delete_by_pair_reports_rows_affected() {
    let db = sqlite_mem().await.expect("build test db");
    let user_id = create_user(&db, "omar", 1).await;
    let flight_id = create_flight(&db, 1, "VA402").await;

    let txn = db.begin().await.expect("begin txn");
    bids_sea::create_or_fetch(&txn, bids_sea::BidCreate { user_id, flight_id })
        .await
        .expect("create bid");
    txn.commit().await.expect("commit");

    let txn = db.begin().await.expect("begin txn");
    let deleted = bids_sea::delete_by_user_and_flight(&txn, user_id, flight_id)
        .await
        .expect("delete bid");
    let deleted_again = bids_sea::delete_by_user_and_flight(&txn, user_id, flight_id)
        .await
        .expect("delete nothing");
    txn.commit().await.expect("commit");

    assert_eq!(deleted, 1);
    assert_eq!(deleted_again, 0);
    assert_eq!(bid_rows_for_pair(&db, user_id, flight_id).await, 0);
}

#[tokio::test]
async fn counts_track_users_and_flights_separately() {
    let db = sqlite_mem().await.expect("build test db");
    let u1 = create_user(&db, "pere", 1).await;
    let u2 = create_user(&db, "quon", 1).await;
    let f1 = create_flight(&db, 1, "VA403").await;
    let f2 = create_flight(&db, 1, "VA404").await;

    let txn = db.begin().await.expect("begin txn");
    for (user_id, flight_id) in [(u1, f1), (u1, f2), (u2, f1)] {
        bids_sea::create_or_fetch(&txn, bids_sea::BidCreate { user_id, flight_id })
            .await
            .expect("create bid");
    }
    txn.commit().await.expect("commit");

    assert_eq!(bids_sea::count_by_user(&db, u1).await.expect("count"), 2);
    assert_eq!(bids_sea::count_by_user(&db, u2).await.expect("count"), 1);
    assert_eq!(bids_sea::count_by_flight(&db, f1).await.expect("count"), 2);
    assert_eq!(bids_sea::count_by_flight(&db, f2).await.expect("count"), 1);

    let flight_bids = bids_sea::find_all_by_flight(&db, f1).await.expect("list");
    let users: Vec<i64> = flight_bids.iter().map(|b| b.user_id).collect();
    assert_eq!(users, vec![u1, u2]);
}
