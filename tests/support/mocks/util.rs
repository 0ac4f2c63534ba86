// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};

#[derive(Clone)]
pub struct DummyClock;

impl populus_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Advances one second per call, starting at `fixed_now()`.
#[derive(Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl populus_core::application::ports::time::Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        super::time::fixed_now() + Duration::seconds(tick)
    }
}

/// Passes input through untouched.
#[derive(Clone)]
pub struct DummySlug;

impl populus_core::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}
