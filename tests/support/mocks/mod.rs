// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod store;
pub mod time;
pub mod util;

pub use store::InMemoryStore;
pub use time::fixed_now;
pub use util::{DummyClock, DummySlug, TickingClock};
