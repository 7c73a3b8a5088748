// SPDX-License-Identifier: MPL-2.0
//! Playback error taxonomy and classification of native media failures.

/// How an error affects the current source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The caller may retry the operation.
    Recoverable,
    /// Cooperative cancellation; never shown to the user.
    Benign,
    /// The current source is unusable until it is reloaded.
    Fatal,
}

/// Classified playback error.
///
/// Fatal variants move the controller to `Errored` and are surfaced exactly
/// once through the error listeners. The other variants are returned from
/// operations or absorbed internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// Another play or seek is in flight; the caller may retry.
    #[error("another playback operation is in flight")]
    Busy,

    /// A deliberate later request cancelled the operation.
    #[error("playback operation aborted")]
    Aborted,

    /// The media could not be fetched.
    #[error("network failure while loading media")]
    NetworkError,

    /// The container or codec is unsupported, or the file is corrupt.
    #[error("media format is not supported")]
    FormatUnsupported,

    /// The media resource does not exist.
    #[error("media source not found")]
    SourceNotFound,

    /// The source did not become ready before the load timeout.
    #[error("media did not become ready in time")]
    LoadTimeout,

    /// A failure the platform did not classify.
    #[error("playback failed: {0}")]
    UnknownPlaybackError(String),

    /// A seek target outside `[0, duration]`; always clamped.
    #[error("seek target out of range")]
    SeekOutOfRange,

    /// The operation needs a ready source.
    #[error("no ready media source")]
    NotReady,

    /// The resolver rejected the URL.
    #[error("source URL is invalid")]
    InvalidSource,

    /// The URL belongs to a platform that only supports embedding.
    #[error("source can only be embedded from {platform}")]
    EmbedOnly {
        /// Platform name reported by the resolver.
        platform: String,
    },
}

impl PlaybackError {
    /// Returns the severity of this error.
    #[must_use]
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Busy | Self::NotReady | Self::InvalidSource | Self::EmbedOnly { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::Aborted | Self::SeekOutOfRange => ErrorSeverity::Benign,
            Self::NetworkError
            | Self::FormatUnsupported
            | Self::SourceNotFound
            | Self::LoadTimeout
            | Self::UnknownPlaybackError(_) => ErrorSeverity::Fatal,
        }
    }

    /// Returns true if this error moves the controller to `Errored`.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.severity() == ErrorSeverity::Fatal
    }

    /// Returns true if retrying the same source may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Busy | Self::NetworkError | Self::LoadTimeout | Self::UnknownPlaybackError(_)
        )
    }

    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Busy => "error-playback-busy",
            Self::Aborted => "error-playback-aborted",
            Self::NetworkError => "error-playback-network",
            Self::FormatUnsupported => "error-playback-format-unsupported",
            Self::SourceNotFound => "error-playback-source-not-found",
            Self::LoadTimeout => "error-playback-load-timeout",
            Self::UnknownPlaybackError(_) => "error-playback-unknown",
            Self::SeekOutOfRange => "error-playback-seek-out-of-range",
            Self::NotReady => "error-playback-not-ready",
            Self::InvalidSource => "error-playback-invalid-source",
            Self::EmbedOnly { .. } => "error-playback-embed-only",
        }
    }
}

/// Failure cause as reported by the platform media primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeErrorCause {
    /// Fetching or starting was aborted.
    Aborted,
    /// Network failure.
    Network,
    /// The media could not be decoded.
    Decode,
    /// The source type is not supported.
    SourceNotSupported,
    /// The resource is missing.
    NotFound,
    /// Anything else, with the raw platform message.
    Other(String),
}

impl NativeErrorCause {
    /// Maps a numeric media error code (1 = aborted, 2 = network,
    /// 3 = decode, 4 = source not supported).
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Aborted,
            2 => Self::Network,
            3 => Self::Decode,
            4 => Self::SourceNotSupported,
            other => Self::Other(format!("media error code {other}")),
        }
    }

    /// Attempts to categorize a raw platform error message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Abort first: "the play() request was interrupted by a new load request"
        if msg_lower.contains("abort") || msg_lower.contains("interrupted") {
            return Self::Aborted;
        }

        if msg_lower.contains("404")
            || msg_lower.contains("not found")
            || msg_lower.contains("no such file")
        {
            return Self::NotFound;
        }

        if msg_lower.contains("network")
            || msg_lower.contains("connection")
            || msg_lower.contains("offline")
            || msg_lower.contains("timed out")
        {
            return Self::Network;
        }

        if msg_lower.contains("decode")
            || msg_lower.contains("corrupt")
            || msg_lower.contains("malformed")
        {
            return Self::Decode;
        }

        if msg_lower.contains("unsupported")
            || msg_lower.contains("not supported")
            || msg_lower.contains("codec")
            || msg_lower.contains("format")
        {
            return Self::SourceNotSupported;
        }

        Self::Other(msg.to_string())
    }

    /// Classifies the native cause into the playback taxonomy.
    #[must_use]
    pub fn classify(&self) -> PlaybackError {
        match self {
            Self::Aborted => PlaybackError::Aborted,
            Self::Network => PlaybackError::NetworkError,
            Self::Decode | Self::SourceNotSupported => PlaybackError::FormatUnsupported,
            Self::NotFound => PlaybackError::SourceNotFound,
            Self::Other(msg) => PlaybackError::UnknownPlaybackError(msg.clone()),
        }
    }
}

impl From<NativeErrorCause> for PlaybackError {
    fn from(cause: NativeErrorCause) -> Self {
        cause.classify()
    }
}
