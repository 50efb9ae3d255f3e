//! Serving calculator state

use std::fmt;

use tracing::{debug, warn};

/// Serving count shown when the screen is created
pub const DEFAULT_SERVINGS: i32 = 6;

/// Serving count with unconditional increment/decrement.
///
/// No floor is enforced; dropping below one serving is logged as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServingCounter {
    value: i32,
}

impl ServingCounter {
    pub fn new(initial: i32) -> Self {
        Self { value: initial }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
        debug!("Servings: {}", self.value);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
        if self.value < 1 {
            warn!("Serving count dropped to {}", self.value);
        } else {
            debug!("Servings: {}", self.value);
        }
    }
}

impl Default for ServingCounter {
    fn default() -> Self {
        Self::new(DEFAULT_SERVINGS)
    }
}

impl fmt::Display for ServingCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_six() {
        let counter = ServingCounter::default();
        assert_eq!(counter.value(), 6);
        assert_eq!(counter.to_string(), "6");
    }

    #[test]
    fn test_interleaved_steps() {
        let mut counter = ServingCounter::default();
        // k = 4 increments, m = 3 decrements
        counter.increment();
        counter.decrement();
        counter.increment();
        counter.increment();
        counter.decrement();
        counter.decrement();
        counter.increment();
        assert_eq!(counter.value(), 6 + 4 - 3);
    }

    #[test]
    fn test_no_floor() {
        let mut counter = ServingCounter::default();
        for _ in 0..10 {
            counter.decrement();
        }
        assert_eq!(counter.value(), -4);
        assert_eq!(counter.to_string(), "-4");
    }

    #[test]
    fn test_custom_initial_value() {
        let mut counter = ServingCounter::new(2);
        counter.increment();
        assert_eq!(counter.value(), 3);
    }
}
