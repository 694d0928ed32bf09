//! Input model: keyboard keys and the vertical swipe tracker.
//!
//! The browser layer converts `KeyboardEvent` and `TouchEvent` into these
//! types before handing them to [`crate::controller::PageCore`], so the
//! gesture rules can be exercised without a DOM.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A keyboard key as reported by `KeyboardEvent.key` (e.g. `"ArrowDown"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key is one of the configured "next section" keys.
    #[must_use]
    pub fn is_section_advance(&self, scroll_keys: &[String]) -> bool {
        scroll_keys.iter().any(|k| *k == self.0)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Direction of a completed vertical swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved up the screen (content should advance).
    Up,
    /// Finger moved down the screen.
    Down,
}

/// Vertical touch sample for one gesture.
///
/// `begin` records the start coordinate; `end` classifies the gesture. The
/// start value is simply overwritten by the next `begin`, so no reset is
/// needed between gestures.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    start_y: f64,
    threshold_px: f64,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { start_y: 0.0, threshold_px }
    }

    /// Record the client Y coordinate where the touch began.
    pub fn begin(&mut self, y: f64) {
        self.start_y = y;
    }

    /// Classify the gesture ending at `y`.
    ///
    /// Returns `None` when the vertical travel does not strictly exceed the
    /// threshold.
    #[must_use]
    pub fn end(&self, y: f64) -> Option<SwipeDirection> {
        let diff = self.start_y - y;
        if diff.abs() <= self.threshold_px {
            return None;
        }
        if diff > 0.0 { Some(SwipeDirection::Up) } else { Some(SwipeDirection::Down) }
    }
}
