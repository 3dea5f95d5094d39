//! One-shot round countdown
//!
//! Driven by real elapsed time rather than frame count so a round lasts the
//! same wall-clock duration at any frame rate.

#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
    fired: bool,
}

impl Countdown {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration: duration_secs.max(0.0),
            elapsed: 0.0,
            fired: false,
        }
    }

    /// Advance by `elapsed_secs` of real time.
    ///
    /// Returns true exactly once: on the call that takes the countdown to
    /// zero. Negative and non-finite deltas are ignored.
    pub fn advance(&mut self, elapsed_secs: f32) -> bool {
        if self.fired {
            return false;
        }
        if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.elapsed = (self.elapsed + elapsed_secs).min(self.duration);
        }
        if self.elapsed >= self.duration {
            self.fired = true;
            return true;
        }
        false
    }

    /// Seconds left, in `[0, duration]`
    pub fn remaining_seconds(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    pub fn is_expired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_and_fires_once() {
        let mut timer = Countdown::new(30.0);
        assert_eq!(timer.remaining_seconds(), 30.0);

        assert!(!timer.advance(10.0));
        assert_eq!(timer.remaining_seconds(), 20.0);

        assert!(timer.advance(25.0));
        assert_eq!(timer.remaining_seconds(), 0.0);
        assert!(timer.is_expired());

        // Never fires again
        assert!(!timer.advance(5.0));
        assert!(!timer.advance(0.0));
        assert_eq!(timer.remaining_seconds(), 0.0);
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut timer = Countdown::new(5.0);
        assert!(!timer.advance(-3.0));
        assert!(!timer.advance(f32::NAN));
        assert!(!timer.advance(f32::INFINITY));
        assert_eq!(timer.remaining_seconds(), 5.0);
    }

    #[test]
    fn test_zero_duration_fires_on_first_advance() {
        let mut timer = Countdown::new(0.0);
        assert!(timer.advance(0.0));
        assert!(!timer.advance(0.0));
    }
}
