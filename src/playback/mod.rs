// SPDX-License-Identifier: MPL-2.0
//! Playback engine.
//!
//! - [`PlaybackController`]: synchronous state machine owning [`PlaybackState`]
//! - [`MediaAdapter`]: normalizes media element callbacks into [`MediaEvent`]s
//! - [`session`]: Tokio task running a controller as a single control loop
//!
//! # Example
//!
//! ```
//! use scout_lens::playback::{Outcome, PlaybackController};
//! use scout_lens::domain::playback::PlaybackStatus;
//! use scout_lens::testing::FakeMediaElement;
//!
//! let element = FakeMediaElement::new();
//! let probe = element.probe();
//! let mut controller = PlaybackController::new(element);
//!
//! assert_eq!(controller.load_source("match.mp4"), Outcome::Applied);
//! for event in probe.ready(5400.0) {
//!     controller.handle_native(event);
//! }
//! assert_eq!(controller.status(), PlaybackStatus::Ready);
//!
//! // Play completes once the element resolves it
//! assert_eq!(controller.play(), Outcome::Pending);
//! controller.handle_native(probe.resolve_play().unwrap());
//! assert_eq!(controller.status(), PlaybackStatus::Playing);
//! ```

mod adapter;
mod controller;
mod listeners;
mod outcome;
pub mod session;
mod state;

pub use adapter::{MediaAdapter, MediaEvent};
pub use controller::{LoadHint, PlaybackController};
pub use listeners::SubscriptionId;
pub use outcome::{IgnoreReason, Outcome};
pub use session::{Notification, SessionClosed, SessionHandle};
pub use state::PlaybackState;
