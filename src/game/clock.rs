//! Elapsed-time bookkeeping, advanced once per simulation tick.

use crate::constants::TICKS_PER_SECOND;

/// Monotonic play-time counter. [`Clock::tick`] is the only mutation; the
/// accessors are pure.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    mins: i32,
    secs: i32,
    ticks: i32,
}

impl Clock {
    /// Create a clock with all fields zeroed.
    pub fn new() -> Clock {
        Clock {
            mins: 0,
            secs: 0,
            ticks: 0,
        }
    }

    /// Advance the clock by one tick. Once [`TICKS_PER_SECOND`] ticks
    /// accumulate, the seconds advance; once 60 seconds accumulate, the
    /// minutes advance. Returns whether a whole-second boundary was crossed,
    /// so the caller can refresh the elapsed-time display.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks < TICKS_PER_SECOND as i32 {
            return false;
        }
        self.ticks = 0;
        self.secs += 1;
        if self.secs == 60 {
            self.secs = 0;
            self.mins += 1;
        }
        true
    }

    pub fn mins(&self) -> i32 {
        self.mins
    }

    pub fn secs(&self) -> i32 {
        self.secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_time_matches_tick_count() {
        let mut clock = Clock::new();
        for n in 1..=3 * 60 * TICKS_PER_SECOND as i32 {
            clock.tick();
            let elapsed = n / TICKS_PER_SECOND as i32;
            assert_eq!(clock.secs() + 60 * clock.mins(), elapsed);
            assert_eq!(clock.secs(), elapsed % 60);
        }
    }

    #[test]
    fn three_seconds_after_150_ticks() {
        let mut clock = Clock::new();
        for _ in 0..150 {
            clock.tick();
        }
        assert_eq!(clock.mins(), 0);
        assert_eq!(clock.secs(), 3);
    }

    #[test]
    fn tick_reports_second_boundaries() {
        let mut clock = Clock::new();
        for _ in 0..TICKS_PER_SECOND as i32 - 1 {
            assert!(!clock.tick());
        }
        assert!(clock.tick());
        assert!(!clock.tick());
    }

    #[test]
    fn seconds_wrap_into_minutes() {
        let mut clock = Clock::new();
        for _ in 0..60 * TICKS_PER_SECOND as i32 {
            clock.tick();
        }
        assert_eq!(clock.mins(), 1);
        assert_eq!(clock.secs(), 0);
    }

    #[test]
    fn accessors_are_pure() {
        let mut clock = Clock::new();
        for _ in 0..75 {
            clock.tick();
        }
        let (mins, secs) = (clock.mins(), clock.secs());
        assert_eq!((clock.mins(), clock.secs()), (mins, secs));
        assert_eq!((clock.mins(), clock.secs()), (mins, secs));
    }
}
