//! Community feed entities: posts with threaded supportive comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mood::MoodTag;
use super::string_id;
use crate::errors::{require_text, DomainError, Result};

string_id!(
    /// Unique within the community feed.
    PostId
);
string_id!(
    /// Unique within its parent post only.
    CommentId
);

/// How the community feed places newly created posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedOrder {
    /// Curated posts stay on top in their authored order; new posts go
    /// directly below them, newest first.
    #[default]
    Pinned,
    /// New posts go to the very top. Existing posts are never re-sorted.
    NewestFirst,
}

/// A reply to a community post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    body: String,
    created_at: DateTime<Utc>,
    reactions: u64,
    /// Curated badge; user submissions are never marked helpful.
    helpful: bool,
}

impl Comment {
    pub fn new(id: CommentId, body: impl Into<String>, created_at: DateTime<Utc>) -> Result<Self> {
        let body = body.into();
        require_text("comment body", &body)?;
        Ok(Self {
            id,
            body,
            created_at,
            reactions: 0,
            helpful: false,
        })
    }

    /// Seed-only: starting reaction count for curated content.
    pub fn with_reactions(mut self, reactions: u64) -> Self {
        self.reactions = reactions;
        self
    }

    /// Seed-only: marks curated content as helpful.
    pub fn with_helpful(mut self, helpful: bool) -> Self {
        self.helpful = helpful;
        self
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn reactions(&self) -> u64 {
        self.reactions
    }

    pub fn is_helpful(&self) -> bool {
        self.helpful
    }

    /// Adds exactly one reaction and returns the new count.
    pub fn record_reaction(&mut self) -> u64 {
        self.reactions = self.reactions.saturating_add(1);
        self.reactions
    }
}

/// An anonymous top-level community submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    body: String,
    mood: Option<MoodTag>,
    created_at: DateTime<Utc>,
    reactions: u64,
    /// Decided once by the moderation policy at creation; never toggled.
    supported: bool,
    comments: Vec<Comment>,
}

impl Post {
    pub fn new(
        id: PostId,
        body: impl Into<String>,
        mood: Option<MoodTag>,
        created_at: DateTime<Utc>,
        supported: bool,
    ) -> Result<Self> {
        let body = body.into();
        require_text("post body", &body)?;
        Ok(Self {
            id,
            body,
            mood,
            created_at,
            reactions: 0,
            supported,
            comments: Vec::new(),
        })
    }

    /// Seed-only: starting reaction count for curated content.
    pub fn with_reactions(mut self, reactions: u64) -> Self {
        self.reactions = reactions;
        self
    }

    /// Seed-only: attaches curated comments in authored order.
    pub fn with_comments(mut self, comments: impl IntoIterator<Item = Comment>) -> Result<Self> {
        for comment in comments {
            self.push_comment(comment)?;
        }
        Ok(self)
    }

    pub fn id(&self) -> &PostId {
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

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Comments in submission order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }

    /// Adds exactly one reaction to the post and returns the new count.
    pub fn record_reaction(&mut self) -> u64 {
        self.reactions = self.reactions.saturating_add(1);
        self.reactions
    }

    pub fn record_comment_reaction(&mut self, comment_id: &CommentId) -> Result<u64> {
        self.comments
            .iter_mut()
            .find(|c| &c.id == comment_id)
            .map(Comment::record_reaction)
            .ok_or_else(|| DomainError::not_found("Comment", comment_id.as_str()))
    }

    /// Appends to the end of the thread. Comment ids are unique per post.
    pub fn push_comment(&mut self, comment: Comment) -> Result<()> {
        if self.comment(&comment.id).is_some() {
            return Err(DomainError::Conflict(format!(
                "comment {} already exists on post {}",
                comment.id, self.id
            )));
        }
        self.comments.push(comment);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn new_post_starts_empty() {
        let post = Post::new("p1".into(), "Hello", Some(MoodTag::Hopeful), at(9), true).unwrap();
        assert_eq!(post.reactions(), 0);
        assert!(post.comments().is_empty());
        assert!(post.is_supported());
    }

    #[test]
    fn blank_post_is_rejected() {
        let err = Post::new("p1".into(), "  ", None, at(9), false).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn duplicate_comment_id_conflicts() {
        let mut post = Post::new("p1".into(), "Hello", None, at(9), false).unwrap();
        post.push_comment(Comment::new("c1".into(), "hi", at(10)).unwrap()).unwrap();
        let err = post
            .push_comment(Comment::new("c1".into(), "again", at(11)).unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(post.comments().len(), 1);
    }

    #[test]
    fn comment_reaction_on_missing_comment_is_not_found() {
        let mut post = Post::new("p1".into(), "Hello", None, at(9), false).unwrap();
        let err = post.record_comment_reaction(&"nope".into()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn new_comment_is_never_helpful() {
        let comment = Comment::new("c1".into(), "You got this", at(9)).unwrap();
        assert!(!comment.is_helpful());
        assert_eq!(comment.reactions(), 0);
    }
}
