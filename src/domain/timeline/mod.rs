// SPDX-License-Identifier: MPL-2.0
//! Timeline domain types: event tags and the highlight window.

mod tag;

pub use tag::{EventTag, TagId};

/// Highlight window bounds (0.5 to 60 seconds).
pub mod highlight_bounds {
    /// Minimum highlight window in seconds.
    pub const MIN: f64 = 0.5;
    /// Maximum highlight window in seconds.
    pub const MAX: f64 = 60.0;
    /// Default highlight window for tags without an explicit end.
    pub const DEFAULT: f64 = 5.0;
}

/// How long a tag without an explicit end stays active after its start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightWindow(f64);

impl HighlightWindow {
    /// Creates a new highlight window, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(highlight_bounds::MIN, highlight_bounds::MAX))
    }

    /// Returns the window in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for HighlightWindow {
    fn default() -> Self {
        Self(highlight_bounds::DEFAULT)
    }
}
