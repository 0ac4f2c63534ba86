pub mod accounts;
pub mod profiles;
