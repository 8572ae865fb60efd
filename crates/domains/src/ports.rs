//! # Core Traits (Ports)
//!
//! Services depend only on these traits; `storage-adapters` provides the
//! in-memory and system implementations wired up by the binary.
//!
//! All ports are synchronous. Every operation is a local, in-memory step
//! triggered by a discrete user action.

use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::models::{
    Comment, CommentId, ExpressionId, ExpressionPost, JournalEntry, MoodTag, Post, PostId,
};

/// Source of "now" for timestamps and relative age rendering.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Hands out ids that are never repeated for the lifetime of the process.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// External moderation decision for the "Supported" badge.
///
/// Consulted exactly once per post, at creation.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait SupportPolicy: Send + Sync {
    fn is_supported(&self, body: &str, mood: Option<MoodTag>) -> bool;
}

/// Canned companion replies.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ReplySource: Send + Sync {
    fn pick_reply(&self) -> String;
}

/// Storage contract for the community feed.
///
/// Posts are never edited or deleted; the only mutations are reaction
/// increments and comment appends.
pub trait CommunityRepository: Send + Sync {
    /// Posts in display order.
    fn list_posts(&self) -> &[Post];

    fn get_post(&self, id: &PostId) -> Option<&Post> {
        self.list_posts().iter().find(|p| p.id() == id)
    }

    /// Fails with `Conflict` if the id is already taken.
    fn insert_post(&mut self, post: Post) -> Result<()>;

    fn increment_post_reactions(&mut self, id: &PostId) -> Result<u64>;

    fn increment_comment_reactions(&mut self, post_id: &PostId, comment_id: &CommentId)
        -> Result<u64>;

    fn append_comment(&mut self, post_id: &PostId, comment: Comment) -> Result<()>;
}

/// Storage contract for the expression feed. Newest post first.
pub trait ExpressionRepository: Send + Sync {
    fn list_posts(&self) -> &[ExpressionPost];

    fn get_post(&self, id: &ExpressionId) -> Option<&ExpressionPost> {
        self.list_posts().iter().find(|p| p.id() == id)
    }

    fn insert_post(&mut self, post: ExpressionPost) -> Result<()>;

    fn increment_reactions(&mut self, id: &ExpressionId) -> Result<u64>;
}

/// Storage contract for the journal. Most recent entry first.
pub trait JournalRepository: Send + Sync {
    fn list_entries(&self) -> &[JournalEntry];

    fn insert_entry(&mut self, entry: JournalEntry) -> Result<()>;
}
