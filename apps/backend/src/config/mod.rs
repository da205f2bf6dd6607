pub mod db;
pub mod settings;

pub use db::{db_url, ConfigError, DbProfile};
pub use settings::BidSettings;
