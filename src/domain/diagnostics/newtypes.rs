// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.
//!
//! This module provides type-safe wrappers for diagnostics values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Log Capacity Bounds
// =============================================================================

/// Activity log capacity bounds (16 to 10000 events).
pub mod log_capacity_bounds {
    /// Minimum log capacity.
    pub const MIN: usize = 16;
    /// Maximum log capacity.
    pub const MAX: usize = 10000;
    /// Default log capacity.
    pub const DEFAULT: usize = 500;
}

// =============================================================================
// LogCapacity
// =============================================================================

/// Number of diagnostic events the playback activity log retains.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (16–10000 events).
///
/// # Example
///
/// ```
/// use scout_lens::domain::diagnostics::LogCapacity;
///
/// let capacity = LogCapacity::new(1000);
/// assert_eq!(capacity.value(), 1000);
///
/// // Values outside range are clamped
/// let too_high = LogCapacity::new(50000);
/// assert_eq!(too_high.value(), 10000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCapacity(usize);

impl LogCapacity {
    /// Creates a new log capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(log_capacity_bounds::MIN, log_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for LogCapacity {
    fn default() -> Self {
        Self(log_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
