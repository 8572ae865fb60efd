//! In-memory community feed.

use domains::{
    Comment, CommentId, CommunityRepository, DomainError, FeedOrder, Post, PostId, Result,
};

/// Vec-backed community feed.
///
/// Seeded posts form a pinned block that keeps its authored order. Where new
/// posts land depends on the [`FeedOrder`]; existing posts are never
/// re-sorted.
#[derive(Debug, Default)]
pub struct InMemoryCommunityRepo {
    posts: Vec<Post>,
    order: FeedOrder,
    pinned: usize,
}

impl InMemoryCommunityRepo {
    pub fn new(order: FeedOrder) -> Self {
        Self {
            posts: Vec::new(),
            order,
            pinned: 0,
        }
    }

    /// Loads curated posts in the exact order given.
    pub fn with_seed(order: FeedOrder, seed: Vec<Post>) -> Result<Self> {
        let mut repo = Self::new(order);
        for post in seed {
            repo.ensure_unique(post.id())?;
            repo.posts.push(post);
        }
        repo.pinned = repo.posts.len();
        Ok(repo)
    }

    fn ensure_unique(&self, id: &PostId) -> Result<()> {
        if self.posts.iter().any(|p| p.id() == id) {
            return Err(DomainError::Conflict(format!("post {id} already exists")));
        }
        Ok(())
    }

    fn post_mut(&mut self, id: &PostId) -> Result<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| DomainError::not_found("Post", id.as_str()))
    }
}

impl CommunityRepository for InMemoryCommunityRepo {
    fn list_posts(&self) -> &[Post] {
        &self.posts
    }

    fn insert_post(&mut self, post: Post) -> Result<()> {
        self.ensure_unique(post.id())?;
        let at = match self.order {
            FeedOrder::Pinned => self.pinned,
            FeedOrder::NewestFirst => 0,
        };
        self.posts.insert(at, post);
        Ok(())
    }

    fn increment_post_reactions(&mut self, id: &PostId) -> Result<u64> {
        Ok(self.post_mut(id)?.record_reaction())
    }

    fn increment_comment_reactions(
        &mut self,
        post_id: &PostId,
        comment_id: &CommentId,
    ) -> Result<u64> {
        self.post_mut(post_id)?.record_comment_reaction(comment_id)
    }

    fn append_comment(&mut self, post_id: &PostId, comment: Comment) -> Result<()> {
        self.post_mut(post_id)?.push_comment(comment)
    }
}
