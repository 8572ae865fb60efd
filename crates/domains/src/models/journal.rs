//! Journal entities: immutable mood-tagged entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mood::MoodScore;
use super::string_id;
use crate::errors::{require_text, Result};

string_id!(
    /// Unique within the journal.
    EntryId
);

/// A single journal entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    id: EntryId,
    created_at: DateTime<Utc>,
    mood: MoodScore,
    title: String,
    body: String,
    /// Insertion order preserved, duplicates allowed.
    tags: Vec<String>,
}

impl JournalEntry {
    pub fn new(
        id: EntryId,
        created_at: DateTime<Utc>,
        mood: MoodScore,
        title: impl Into<String>,
        body: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Self> {
        let title = title.into();
        let body = body.into();
        require_text("title", &title)?;
        require_text("body", &body)?;
        Ok(Self {
            id,
            created_at,
            mood,
            title,
            body,
            tags,
        })
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn mood(&self) -> MoodScore {
        self.mood
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Splits a raw comma separated tag string.
///
/// Pieces are trimmed and blanks dropped; order and duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_keep_order_and_duplicates() {
        assert_eq!(parse_tags("work, , grateful,work"), vec!["work", "grateful", "work"]);
    }

    #[test]
    fn empty_tag_string_yields_no_tags() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,, ").is_empty());
    }

    #[test]
    fn blank_title_or_body_rejected() {
        let now = Utc::now();
        let mood = MoodScore::neutral();
        assert!(JournalEntry::new("1".into(), now, mood, "", "b", vec![]).is_err());
        assert!(JournalEntry::new("1".into(), now, mood, "t", "  ", vec![]).is_err());
        assert!(JournalEntry::new("1".into(), now, mood, "t", "b", vec![]).is_ok());
    }
}
