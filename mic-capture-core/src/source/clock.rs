use std::time::Instant;

/// Clock used to seed the presentation timestamp at the first frame of a run.
///
/// A trait so tests can pin the reading; production code uses
/// `MonotonicClock`.
pub trait SampleClock: Send + Sync {
    /// Monotonic reading in nanoseconds.
    fn now_nanos(&self) -> i64;
}

/// Monotonic nanosecond clock anchored at construction time.
///
/// All timestamps produced by one source derive from the same anchor, so
/// readings are comparable across runs of that source.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    anchor: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            anchor: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleClock for MonotonicClock {
    fn now_nanos(&self) -> i64 {
        self.anchor.elapsed().as_nanos() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn readings_never_decrease() {
        let clock = MonotonicClock::new();
        let first = clock.now_nanos();
        thread::sleep(Duration::from_millis(5));
        let second = clock.now_nanos();
        assert!(second > first);
    }

    #[test]
    fn readings_are_non_negative() {
        let clock = MonotonicClock::new();
        assert!(clock.now_nanos() >= 0);
    }
}
