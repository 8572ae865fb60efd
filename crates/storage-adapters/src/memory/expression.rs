//! In-memory expression feed.

use domains::{DomainError, ExpressionId, ExpressionPost, ExpressionRepository, Result};

/// Newest post first, always.
#[derive(Debug, Default)]
pub struct InMemoryExpressionRepo {
    posts: Vec<ExpressionPost>,
}

impl InMemoryExpressionRepo {
    /// `seed` is already in display order (newest first).
    pub fn with_seed(seed: Vec<ExpressionPost>) -> Result<Self> {
        let mut repo = Self::default();
        for post in seed {
            repo.ensure_unique(post.id())?;
            repo.posts.push(post);
        }
        Ok(repo)
    }

    fn ensure_unique(&self, id: &ExpressionId) -> Result<()> {
        if self.posts.iter().any(|p| p.id() == id) {
            return Err(DomainError::Conflict(format!("expression post {id} already exists")));
        }
        Ok(())
    }
}

impl ExpressionRepository for InMemoryExpressionRepo {
    fn list_posts(&self) -> &[ExpressionPost] {
        &self.posts
    }

    fn insert_post(&mut self, post: ExpressionPost) -> Result<()> {
        self.ensure_unique(post.id())?;
        self.posts.insert(0, post);
        Ok(())
    }

    fn increment_reactions(&mut self, id: &ExpressionId) -> Result<u64> {
        self.posts
            .iter_mut()
            .find(|p| p.id() == id)
            .map(ExpressionPost::record_reaction)
            .ok_or_else(|| DomainError::not_found("ExpressionPost", id.as_str()))
    }
}
