pub mod accounts;
pub mod profiles;
pub mod serde_time;

pub use accounts::{AccountDto, RegisteredAccountDto};
pub use profiles::{ProfileCardDto, ProfileDto};
