// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of wall-clock time, injected so timestamps are deterministic in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
