// SPDX-License-Identifier: MPL-2.0
//! Result of a controller operation.

use crate::domain::error::PlaybackError;
use std::fmt;

/// Why an operation was accepted without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// `play()` while already playing.
    AlreadyPlaying,
    /// `pause()` while not playing.
    AlreadyPaused,
    /// The requested value equals the current one.
    Unchanged,
    /// `retry()` while the source has not failed.
    NotErrored,
    /// `retry()` before any source was loaded.
    NoSource,
    /// Non-finite seek target or skip offset.
    InvalidTarget,
}

/// What the controller did with an operation.
///
/// Operations never panic and never return `Result`: every request gets
/// exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Took effect synchronously.
    Applied,
    /// A native asynchronous step was issued, or the request waits behind
    /// the one in flight.
    Pending,
    /// Merged with an identical request still pending.
    Coalesced,
    /// Replaced an older pending request of the same kind.
    Superseded,
    /// Accepted, nothing to do.
    Ignored(IgnoreReason),
    /// Refused; state is unchanged.
    Rejected(PlaybackError),
}

impl Outcome {
    /// Returns true unless the operation was rejected.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !self.is_rejected()
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns the rejection error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&PlaybackError> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// Short lowercase name used in logs and diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Pending => "pending",
            Self::Coalesced => "coalesced",
            Self::Superseded => "superseded",
            Self::Ignored(_) => "ignored",
            Self::Rejected(_) => "rejected",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignored(reason) => write!(f, "ignored ({reason:?})"),
            Self::Rejected(err) => write!(f, "rejected ({err})"),
            other => f.write_str(other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_is_not_accepted() {
        let outcome = Outcome::Rejected(PlaybackError::Busy);
        assert!(outcome.is_rejected());
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.error(), Some(&PlaybackError::Busy));
    }

    #[test]
    fn ignored_counts_as_accepted() {
        let outcome = Outcome::Ignored(IgnoreReason::AlreadyPaused);
        assert!(outcome.is_accepted());
        assert_eq!(outcome.as_str(), "ignored");
        assert_eq!(outcome.to_string(), "ignored (AlreadyPaused)");
    }
}
