// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_account;
mod postgres_profile;
mod postgres_store;

pub use error::map_sqlx;
pub use postgres_account::PostgresAccountRepository;
pub use postgres_profile::PostgresProfileRepository;
pub use postgres_store::{PostgresAccountStore, PostgresAccountTransaction};
