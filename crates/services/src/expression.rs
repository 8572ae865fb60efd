//! # Expression Service
//!
//! The anonymous "express yourself" feed. Flat posts, newest first, with a
//! reaction counter and an informational comment count.

use std::sync::Arc;

use domains::{
    Clock, DomainError, ExpressionId, ExpressionPost, ExpressionRepository, IdGenerator, MoodTag,
    Result,
};

pub struct ExpressionService {
    repo: Box<dyn ExpressionRepository>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl ExpressionService {
    pub fn new(
        repo: Box<dyn ExpressionRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { repo, clock, ids }
    }

    pub fn create_post(&mut self, body: &str, mood: Option<MoodTag>) -> Result<ExpressionPost> {
        let id = ExpressionId::new(self.ids.next_id());
        let post = ExpressionPost::new(id, body, mood, self.clock.now())
            .inspect_err(|e| tracing::warn!(error = %e, "expression post rejected"))?;

        self.repo.insert_post(post.clone())?;
        tracing::info!(post_id = %post.id(), "expression post created");
        Ok(post)
    }

    /// Newest first.
    pub fn list_posts(&self) -> &[ExpressionPost] {
        self.repo.list_posts()
    }

    pub fn get_post(&self, id: &ExpressionId) -> Result<&ExpressionPost> {
        self.repo
            .get_post(id)
            .ok_or_else(|| DomainError::not_found("ExpressionPost", id.as_str()))
    }

    pub fn react(&mut self, id: &ExpressionId) -> Result<u64> {
        self.repo
            .increment_reactions(id)
            .inspect(|count| tracing::debug!(post_id = %id, count, "reaction recorded"))
            .inspect_err(|e| tracing::warn!(post_id = %id, error = %e, "reaction ignored"))
    }
}
