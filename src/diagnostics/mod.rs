// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for the playback activity log.
//!
//! The controller records user operations, status transitions, discarded
//! callbacks and surfaced errors in a bounded activity log. The log can be
//! exported as a JSON report for debugging field issues.
//!
//! # Architecture
//!
//! - [`ActivityLog`]: Most recent events with per-type counts
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`ActivityReport`]: Serializable snapshot of the log

mod events;
mod log;
mod report;

pub use crate::domain::diagnostics::LogCapacity;
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use log::ActivityLog;
pub use report::{ActivityReport, ReportMetadata, SerializableEvent};
