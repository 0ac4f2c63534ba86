//! User profiles for a web backend: unique slug allocation, avatar paths and
//! automatic profile provisioning when an account is created.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
