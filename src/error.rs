// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type for I/O, configuration and tag snapshot failures.
//!
//! Playback failures are not reported here: they are classified as
//! [`PlaybackError`] and returned from controller operations.

pub use crate::domain::error::{ErrorSeverity, NativeErrorCause, PlaybackError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Tag Error: {0}")]
    Tags(String),

    #[error("Playback Error: {0}")]
    Playback(PlaybackError),
}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Tags(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
