// SPDX-License-Identifier: MPL-2.0
//! JSON tag snapshot reader.
//!
//! The tag store exports event tags as a JSON array:
//!
//! ```json
//! [
//!   { "id": 1, "startTime": 10.0, "endTime": 15.0, "label": "Goal",
//!     "metadata": { "player": 9, "team": "home" } },
//!   { "id": "t-2", "startTime": 12.0, "label": "Tackle" }
//! ]
//! ```
//!
//! Ids may be numbers or strings. Metadata values of any JSON type are kept
//! as their string form. The result is ordered by start time, ties in file
//! order.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::timeline::{EventTag, TagId};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl From<RawId> for TagId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => TagId::from(n),
            RawId::Text(s) => TagId::new(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagRecord {
    id: RawId,
    start_time: f64,
    #[serde(default)]
    end_time: Option<f64>,
    #[serde(default)]
    label: String,
    #[serde(default)]
    metadata: BTreeMap<String, serde_json::Value>,
}

impl TagRecord {
    fn into_tag(self) -> Result<EventTag> {
        if !self.start_time.is_finite() || self.start_time < 0.0 {
            return Err(Error::Tags(format!(
                "tag has invalid start time {}",
                self.start_time
            )));
        }
        let mut tag = EventTag::new(self.id, self.start_time, self.label);
        if let Some(end) = self.end_time {
            tag = tag.with_end(end);
        }
        for (key, value) in self.metadata {
            let value = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            tag = tag.with_metadata(key, value);
        }
        Ok(tag)
    }
}

/// Parses a JSON tag snapshot.
///
/// # Errors
///
/// Returns [`Error::Tags`] for malformed JSON or a tag with a negative or
/// non-finite start time.
pub fn parse_tags(json: &str) -> Result<Vec<EventTag>> {
    let records: Vec<TagRecord> = serde_json::from_str(json)?;
    let mut tags = records
        .into_iter()
        .map(TagRecord::into_tag)
        .collect::<Result<Vec<_>>>()?;
    tags.sort_by(|a, b| a.start_secs.total_cmp(&b.start_secs));
    Ok(tags)
}

/// Reads and parses a JSON tag snapshot file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise see
/// [`parse_tags`].
pub fn load_tags(path: &Path) -> Result<Vec<EventTag>> {
    let json = std::fs::read_to_string(path)?;
    let tags = parse_tags(&json)?;
    tracing::debug!(path = %path.display(), count = tags.len(), "tag snapshot loaded");
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"[
        { "id": 2, "startTime": 12.0, "label": "Tackle" },
        { "id": "goal-1", "startTime": 10.0, "endTime": 15.0, "label": "Goal",
          "metadata": { "player": 9, "team": "home", "assisted": true } }
    ]"#;

    #[test]
    fn parses_and_orders_by_start() {
        let tags = parse_tags(SAMPLE).expect("valid snapshot");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].id.as_str(), "goal-1");
        assert_eq!(tags[0].end_secs, Some(15.0));
        assert_eq!(tags[1].id.as_str(), "2");
        assert_eq!(tags[1].end_secs, None);
    }

    #[test]
    fn metadata_values_become_strings() {
        let tags = parse_tags(SAMPLE).expect("valid snapshot");
        let meta = &tags[0].metadata;
        assert_eq!(meta.get("player").map(String::as_str), Some("9"));
        assert_eq!(meta.get("team").map(String::as_str), Some("home"));
        assert_eq!(meta.get("assisted").map(String::as_str), Some("true"));
    }

    #[test]
    fn negative_start_is_rejected() {
        let result = parse_tags(r#"[{ "id": 1, "startTime": -2.0 }]"#);
        assert!(matches!(result, Err(Error::Tags(_))));
    }

    #[test]
    fn malformed_json_is_a_tag_error() {
        assert!(matches!(parse_tags("{ not json"), Err(Error::Tags(_))));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("tags.json");
        fs::write(&path, SAMPLE).expect("failed to write tags");
        assert_eq!(load_tags(&path).expect("loads").len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = load_tags(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
