use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    AirlineId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Flights {
    Table,
    Id,
    AirlineId,
    FlightNumber,
    DptAirport,
    ArrAirport,
    HasBid,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Bids {
    Table,
    Id,
    UserId,
    FlightId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Pireps {
    Table,
    Id,
    UserId,
    FlightId,
    State,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Fares {
    Table,
    Id,
    Code,
    Name,
    Price,
    Cost,
    Capacity,
    Notes,
}

#[derive(Iden)]
enum FlightFares {
    Table,
    Id,
    FlightId,
    FareId,
    Price,
    Cost,
    Capacity,
}

#[derive(Iden)]
enum Subfleets {
    Table,
    Id,
    AirlineId,
    Name,
    TypeCode,
}

#[derive(Iden)]
enum FlightSubfleet {
    Table,
    Id,
    FlightId,
    SubfleetId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::AirlineId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email_unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // flights
        manager
            .create_table(
                Table::create()
                    .table(Flights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Flights::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Flights::AirlineId).big_integer().not_null())
                    .col(ColumnDef::new(Flights::FlightNumber).string().not_null())
                    .col(ColumnDef::new(Flights::DptAirport).string().not_null())
                    .col(ColumnDef::new(Flights::ArrAirport).string().not_null())
                    .col(
                        ColumnDef::new(Flights::HasBid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Flights::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Flights::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Flights::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // bids
        manager
            .create_table(
                Table::create()
                    .table(Bids::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bids::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Bids::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Bids::FlightId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Bids::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bids::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bids_user_id")
                            .from(Bids::Table, Bids::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bids_flight_id")
                            .from(Bids::Table, Bids::FlightId)
                            .to(Flights::Table, Flights::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One active bid per (user, flight): backs the idempotent
        // create-or-fetch and closes the concurrent-insert window.
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_user_flight_unique")
                    .table(Bids::Table)
                    .col(Bids::UserId)
                    .col(Bids::FlightId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bids_flight_id")
                    .table(Bids::Table)
                    .col(Bids::FlightId)
                    .to_owned(),
            )
            .await?;

        // pireps
        manager
            .create_table(
                Table::create()
                    .table(Pireps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pireps::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Pireps::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Pireps::FlightId).big_integer().null())
                    .col(
                        ColumnDef::new(Pireps::State)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Pireps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Pireps::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pireps_user_id")
                            .from(Pireps::Table, Pireps::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pireps_flight_id")
                            .from(Pireps::Table, Pireps::FlightId)
                            .to(Flights::Table, Flights::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pireps_user_id")
                    .table(Pireps::Table)
                    .col(Pireps::UserId)
                    .to_owned(),
            )
            .await?;

        // fares
        manager
            .create_table(
                Table::create()
                    .table(Fares::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fares::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Fares::Code).string().not_null())
                    .col(ColumnDef::new(Fares::Name).string().not_null())
                    .col(ColumnDef::new(Fares::Price).double().not_null())
                    .col(ColumnDef::new(Fares::Cost).double().not_null())
                    .col(ColumnDef::new(Fares::Capacity).integer().not_null())
                    .col(ColumnDef::new(Fares::Notes).text().null())
                    .to_owned(),
            )
            .await?;

        // flight_fares pivot; nullable columns override the base fare
        manager
            .create_table(
                Table::create()
                    .table(FlightFares::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FlightFares::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(FlightFares::FlightId).big_integer().not_null())
                    .col(ColumnDef::new(FlightFares::FareId).big_integer().not_null())
                    .col(ColumnDef::new(FlightFares::Price).double().null())
                    .col(ColumnDef::new(FlightFares::Cost).double().null())
                    .col(ColumnDef::new(FlightFares::Capacity).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_fares_flight_id")
                            .from(FlightFares::Table, FlightFares::FlightId)
                            .to(Flights::Table, Flights::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_fares_fare_id")
                            .from(FlightFares::Table, FlightFares::FareId)
                            .to(Fares::Table, Fares::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flight_fares_flight_fare_unique")
                    .table(FlightFares::Table)
                    .col(FlightFares::FlightId)
                    .col(FlightFares::FareId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // subfleets
        manager
            .create_table(
                Table::create()
                    .table(Subfleets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subfleets::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Subfleets::AirlineId).big_integer().not_null())
                    .col(ColumnDef::new(Subfleets::Name).string().not_null())
                    .col(ColumnDef::new(Subfleets::TypeCode).string().not_null())
                    .to_owned(),
            )
            .await?;

        // flight_subfleet pivot
        manager
            .create_table(
                Table::create()
                    .table(FlightSubfleet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FlightSubfleet::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(FlightSubfleet::FlightId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FlightSubfleet::SubfleetId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_subfleet_flight_id")
                            .from(FlightSubfleet::Table, FlightSubfleet::FlightId)
                            .to(Flights::Table, Flights::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_subfleet_subfleet_id")
                            .from(FlightSubfleet::Table, FlightSubfleet::SubfleetId)
                            .to(Subfleets::Table, Subfleets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flight_subfleet_unique")
                    .table(FlightSubfleet::Table)
                    .col(FlightSubfleet::FlightId)
                    .col(FlightSubfleet::SubfleetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightSubfleet::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subfleets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FlightFares::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fares::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pireps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bids::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Flights::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
