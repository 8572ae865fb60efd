//! Resource library catalogue entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::string_id;
use crate::errors::{DomainError, Result};

string_id!(ResourceId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Article,
    Coping,
    Crisis,
    Motivation,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Article,
        ResourceCategory::Coping,
        ResourceCategory::Crisis,
        ResourceCategory::Motivation,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ResourceCategory::Article => "article",
            ResourceCategory::Coping => "coping",
            ResourceCategory::Crisis => "crisis",
            ResourceCategory::Motivation => "motivation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceCategory::Article => "Articles",
            ResourceCategory::Coping => "Coping Tools",
            ResourceCategory::Crisis => "Crisis Support",
            ResourceCategory::Motivation => "Motivation",
        }
    }

    /// Badge color name used by the presentation layer.
    pub fn color(self) -> &'static str {
        match self {
            ResourceCategory::Article => "blue",
            ResourceCategory::Coping => "green",
            ResourceCategory::Crisis => "red",
            ResourceCategory::Motivation => "purple",
        }
    }

    /// Parses a category filter where `all` (or blank) means no filter.
    pub fn parse_filter(raw: &str) -> Result<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

impl FromStr for ResourceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown resource category '{s}'")))
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A curated article, coping tool, crisis line, or motivational piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub category: ResourceCategory,
    pub description: String,
    /// Full text for in-app reading; `None` for external links.
    pub content: Option<String>,
    pub is_external: bool,
    pub rating: f32,
    pub read_time: String,
}

impl Resource {
    /// Case-insensitive substring match on title or description.
    pub fn matches(&self, search: &str) -> bool {
        let needle = search.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
