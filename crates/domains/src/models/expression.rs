//! Expression feed entities: flat anonymous mood posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mood::MoodTag;
use super::string_id;
use crate::errors::{require_text, Result};

string_id!(
    /// Unique within the expression feed.
    ExpressionId
);

/// A simpler sibling of the community post without a comment thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionPost {
    id: ExpressionId,
    body: String,
    mood: Option<MoodTag>,
    created_at: DateTime<Utc>,
    reactions: u64,
    /// Informational only, there are no backing comment entities.
    comment_count: u32,
}

impl ExpressionPost {
    pub fn new(
        id: ExpressionId,
        body: impl Into<String>,
        mood: Option<MoodTag>,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let body = body.into();
        require_text("post body", &body)?;
        Ok(Self {
            id,
            body,
            mood,
            created_at,
            reactions: 0,
            comment_count: 0,
        })
    }

    /// Seed-only: starting counters for curated content.
    pub fn with_counts(mut self, reactions: u64, comment_count: u32) -> Self {
        self.reactions = reactions;
        self.comment_count = comment_count;
        self
    }

    pub fn id(&self) -> &ExpressionId {
        &self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn mood(&self) -> Option<MoodTag> {
        self.mood
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn reactions(&self) -> u64 {
        self.reactions
    }

    pub fn comment_count(&self) -> u32 {
        self.comment_count
    }

    pub fn record_reaction(&mut self) -> u64 {
        self.reactions = self.reactions.saturating_add(1);
        self.reactions
    }
}
