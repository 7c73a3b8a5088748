// SPDX-License-Identifier: MPL-2.0
//! Source resolver port definition.
//!
//! Resolving third-party platform URLs into playable sources is an external
//! concern. The controller only needs to know whether a URL can be handed to
//! the media primitive, must be embedded, or is unusable.

use url::Url;

/// Result of resolving a user-supplied URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The URL can be loaded by the media primitive as is.
    DirectPlayable(String),
    /// The URL belongs to a platform that only supports its own embed player.
    EmbedOnly { platform: String },
    /// The URL is unusable.
    Invalid,
}

/// Port for URL classification.
pub trait SourceResolver {
    fn resolve(&self, url: &str) -> Resolution;
}

/// Hosts served only through their own embed player.
const EMBED_HOSTS: &[(&str, &str)] = &[
    ("youtube.com", "YouTube"),
    ("youtu.be", "YouTube"),
    ("vimeo.com", "Vimeo"),
    ("dailymotion.com", "Dailymotion"),
    ("twitch.tv", "Twitch"),
];

/// Schemes the media primitive can fetch directly.
const DIRECT_SCHEMES: &[&str] = &["http", "https", "file", "blob"];

fn embed_platform(host: &str) -> Option<&'static str> {
    EMBED_HOSTS
        .iter()
        .find(|(embed_host, _)| {
            host == *embed_host
                || host
                    .strip_suffix(embed_host)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
        .map(|(_, platform)| *platform)
}

/// Default resolver: recognizes embed-only hosts, accepts direct
/// http(s)/file/blob URLs and relative paths, rejects everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectUrlResolver;

impl DirectUrlResolver {
    fn resolve_absolute(url: &Url, raw: &str) -> Resolution {
        if !DIRECT_SCHEMES.contains(&url.scheme()) {
            return Resolution::Invalid;
        }
        if let Some(platform) = url.host_str().and_then(embed_platform) {
            return Resolution::EmbedOnly {
                platform: platform.to_string(),
            };
        }
        Resolution::DirectPlayable(raw.to_string())
    }

    /// A path without scheme ("clips/a.mp4", "youtube.com/watch?v=x").
    fn resolve_relative(raw: &str) -> Resolution {
        let first_segment = raw.split('/').next().unwrap_or_default();
        let host = Url::parse(&format!("https://{first_segment}"))
            .ok()
            .and_then(|url| url.host_str().map(str::to_string));
        if let Some(platform) = host.as_deref().and_then(embed_platform) {
            return Resolution::EmbedOnly {
                platform: platform.to_string(),
            };
        }
        Resolution::DirectPlayable(raw.to_string())
    }
}

impl SourceResolver for DirectUrlResolver {
    fn resolve(&self, url: &str) -> Resolution {
        let raw = url.trim();
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Resolution::Invalid;
        }

        match Url::parse(raw) {
            Ok(parsed) => Self::resolve_absolute(&parsed, raw),
            Err(url::ParseError::RelativeUrlWithoutBase) => Self::resolve_relative(raw),
            Err(err) => {
                tracing::debug!(url = raw, %err, "unparseable source url");
                Resolution::Invalid
            }
        }
    }
}
