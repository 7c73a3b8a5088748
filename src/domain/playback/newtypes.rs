// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = full native volume).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 1.0;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// This newtype enforces validity at the type level, making it impossible
/// to hand an out-of-range value to the media primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// `NaN` falls back to the default level.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self::default();
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate bounds. Only the listed presets are valid rates.
pub mod rate_bounds {
    /// Rates the player accepts, in ascending order.
    pub const ALLOWED: &[f64] = &[0.5, 1.0, 1.25, 1.5, 2.0];
    /// Default playback rate (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
}

/// Playback rate, guaranteed to be one of [`rate_bounds::ALLOWED`].
///
/// Arbitrary inputs snap to the nearest allowed rate; on a tie the slower
/// rate wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a playback rate, snapping to the nearest allowed preset.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if !rate.is_finite() {
            return Self::default();
        }
        let mut nearest = rate_bounds::ALLOWED[0];
        for &allowed in rate_bounds::ALLOWED {
            if (allowed - rate).abs() < (nearest - rate).abs() {
                nearest = allowed;
            }
        }
        Self(nearest)
    }

    /// Returns the rate as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_bounds::DEFAULT)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Skip step bounds (1 to 60 seconds).
pub mod skip_step_bounds {
    /// Minimum skip step in seconds.
    pub const MIN: f64 = 1.0;
    /// Maximum skip step in seconds.
    pub const MAX: f64 = 60.0;
    /// Default skip step in seconds (arrow keys).
    pub const DEFAULT: f64 = 10.0;
}

/// Distance in seconds covered by one keyboard skip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step value, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(skip_step_bounds::MIN, skip_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(skip_step_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Volume tests
    // -------------------------------------------------------------------------

    #[test]
    fn volume_clamps_to_valid_range() {
        assert!((Volume::new(-0.5).value() - volume_bounds::MIN).abs() < f32::EPSILON);
        assert!((Volume::new(2.0).value() - volume_bounds::MAX).abs() < f32::EPSILON);
        assert!((Volume::new(0.5).value() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn volume_nan_falls_back_to_default() {
        assert_eq!(Volume::new(f32::NAN), Volume::default());
    }

    // -------------------------------------------------------------------------
    // PlaybackRate tests
    // -------------------------------------------------------------------------

    #[test]
    fn rate_snaps_to_nearest_preset() {
        assert!((PlaybackRate::new(0.1).value() - 0.5).abs() < 1e-9);
        assert!((PlaybackRate::new(1.2).value() - 1.25).abs() < 1e-9);
        assert!((PlaybackRate::new(1.74).value() - 1.5).abs() < 1e-9);
        assert!((PlaybackRate::new(8.0).value() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn rate_tie_prefers_slower_preset() {
        // 0.75 is equidistant from 0.5 and 1.0
        assert!((PlaybackRate::new(0.75).value() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rate_non_finite_is_default() {
        assert_eq!(PlaybackRate::new(f64::NAN), PlaybackRate::default());
        assert_eq!(PlaybackRate::new(f64::INFINITY), PlaybackRate::default());
    }

    // -------------------------------------------------------------------------
    // SkipStep tests
    // -------------------------------------------------------------------------

    #[test]
    fn skip_step_clamps_to_valid_range() {
        assert!((SkipStep::new(0.0).value() - skip_step_bounds::MIN).abs() < 0.001);
        assert!((SkipStep::new(100.0).value() - skip_step_bounds::MAX).abs() < 0.001);
        assert!((SkipStep::new(5.0).value() - 5.0).abs() < 0.001);
    }

    #[test]
    fn skip_step_default_is_ten_seconds() {
        assert!((SkipStep::default().value() - 10.0).abs() < 0.001);
    }
}
