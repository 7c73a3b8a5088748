// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the engine depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Platform adapters implement application layer ports
//! - The playback engine only talks to the platform through these ports
//!
//! # Example
//!
//! ```ignore
//! use scout_lens::application::port::{MediaElement, OpTicket, SourceId};
//!
//! // A platform adapter implements the port trait
//! struct HtmlVideo { /* ... */ }
//! impl MediaElement for HtmlVideo { /* ... */ }
//! ```

pub mod port;
