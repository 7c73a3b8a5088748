// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete I/O around the engine. The media element and fullscreen ports
//! are implemented by the embedding platform, not here.
//!
//! # Available Adapters
//!
//! - [`tag_file`]: Reads event tag snapshots exported as JSON

pub mod tag_file;

pub use tag_file::{load_tags, parse_tags};
