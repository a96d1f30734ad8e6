use chrono::{DateTime, Utc};

/// Time source consumed by store-hours and seasonal-discount logic.
/// Injected so tests can pin arbitrary instants without process-wide
/// side effects.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to an RFC 3339 timestamp, e.g. "2023-12-25T00:01:00Z".
    /// Panics on a malformed timestamp; intended for test setup.
    pub fn at(timestamp: &str) -> Self {
        let instant = DateTime::parse_from_rfc3339(timestamp)
            .expect("valid RFC 3339 timestamp")
            .with_timezone(&Utc);
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
