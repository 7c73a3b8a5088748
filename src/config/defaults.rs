// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the engine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Loading**: Load timeout and slow-load hint
//! - **Timeline**: Highlight window for tags without an end
//! - **Input**: Keyboard skip step
//! - **Audio**: Volume defaults
//! - **Adapter**: Time-update debounce
//! - **Diagnostics**: Activity log capacity

use crate::domain::diagnostics::log_capacity_bounds;
use crate::domain::playback::{skip_step_bounds, volume_bounds};
use crate::domain::timeline::highlight_bounds;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Seconds a source may stay in `Loading` before it fails with `LoadTimeout`.
pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 30;

/// Minimum load timeout (in seconds).
pub const MIN_LOAD_TIMEOUT_SECS: u64 = 1;

/// Maximum load timeout (in seconds).
pub const MAX_LOAD_TIMEOUT_SECS: u64 = 300;

/// Seconds after which a load still in progress is reported as slow.
pub const DEFAULT_SLOW_LOAD_HINT_SECS: u64 = 10;

// ==========================================================================
// Timeline Defaults
// ==========================================================================

/// Highlight window for tags without an explicit end (in seconds).
pub const DEFAULT_HIGHLIGHT_WINDOW_SECS: f64 = highlight_bounds::DEFAULT;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Seconds skipped by the arrow keys.
pub const DEFAULT_SKIP_STEP_SECS: f64 = skip_step_bounds::DEFAULT;

// ==========================================================================
// Audio Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = volume_bounds::DEFAULT;

// ==========================================================================
// Adapter Defaults
// ==========================================================================

/// Two time updates closer than this are treated as duplicates (in seconds).
pub const TIME_UPDATE_EPSILON_SECS: f64 = 0.001;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept in the activity log.
pub const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = log_capacity_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_LOAD_TIMEOUT_SECS > 0);
    assert!(DEFAULT_LOAD_TIMEOUT_SECS >= MIN_LOAD_TIMEOUT_SECS);
    assert!(DEFAULT_LOAD_TIMEOUT_SECS <= MAX_LOAD_TIMEOUT_SECS);
    assert!(DEFAULT_SLOW_LOAD_HINT_SECS < DEFAULT_LOAD_TIMEOUT_SECS);

    assert!(DEFAULT_HIGHLIGHT_WINDOW_SECS > 0.0);
    assert!(DEFAULT_SKIP_STEP_SECS > 0.0);
    assert!(DEFAULT_VOLUME >= volume_bounds::MIN);
    assert!(DEFAULT_VOLUME <= volume_bounds::MAX);
    assert!(TIME_UPDATE_EPSILON_SECS > 0.0);
    assert!(DEFAULT_ACTIVITY_LOG_CAPACITY >= log_capacity_bounds::MIN);
};
