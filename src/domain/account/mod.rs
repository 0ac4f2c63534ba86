// src/domain/account/mod.rs
pub mod entity;
pub mod events;
pub mod repository;
pub mod value_objects;

pub use entity::{Account, AccountUpdate, NewAccount};
pub use events::AccountSaved;
pub use repository::{AccountRepository, AccountStore, AccountTransaction};
pub use value_objects::{AccountId, DisplayName, Email};
