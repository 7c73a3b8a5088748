// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides the playback error taxonomy, independent of any
//! platform or infrastructure concerns.

mod playback;

pub use playback::{ErrorSeverity, NativeErrorCause, PlaybackError};
