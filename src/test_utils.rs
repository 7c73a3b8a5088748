// SPDX-License-Identifier: MPL-2.0
//! Test helpers for comparing playback positions, volumes and rates.
//!
//! Positions go through clamping and rate arithmetic, so tests compare them
//! with the `approx` macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
