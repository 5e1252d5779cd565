use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicU32, Ordering};

/// Time source used to stamp game start times.
///
/// Callers are expected to supply non-decreasing instants across calls. The
/// board does not check this; a clock that goes backwards only affects how
/// ties in the summary are broken.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock advancing by a fixed step on every call.
///
/// The first call returns `start`, the next `start + step`, and so on. Once
/// the next instant falls outside chrono's range the clock stays pinned at
/// `DateTime::<Utc>::MAX_UTC` (or `MIN_UTC` for a negative step).
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: Duration,
    ticks: AtomicU32,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        SteppingClock {
            start,
            step,
            ticks: AtomicU32::new(0),
        }
    }

    /// Number of instants handed out so far.
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self
            .ticks
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |t| {
                Some(t.saturating_add(1))
            })
            .unwrap_or_else(|t| t);

        i32::try_from(tick)
            .ok()
            .and_then(|tick| self.step.checked_mul(tick))
            .and_then(|offset| self.start.checked_add_signed(offset))
            .unwrap_or(if self.step < Duration::zero() {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
