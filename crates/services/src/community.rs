//! # Community Service
//!
//! Orchestrates the community feed: post creation, threaded comments and
//! the reaction ledger for both. All mutations are validated before the
//! repository is touched, so a rejected call leaves the feed unchanged.

use std::sync::Arc;

use domains::{
    Clock, Comment, CommentId, CommunityRepository, DomainError, IdGenerator, MoodTag, Post,
    PostId, Result, SupportPolicy,
};

/// Community feed orchestration, scoped to one session.
pub struct CommunityService {
    repo: Box<dyn CommunityRepository>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    support: Arc<dyn SupportPolicy>,
}

impl CommunityService {
    pub fn new(
        repo: Box<dyn CommunityRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        support: Arc<dyn SupportPolicy>,
    ) -> Self {
        Self { repo, clock, ids, support }
    }

    /// Creates a post with zero reactions and an empty thread.
    ///
    /// The supported badge is decided here, once, by the injected policy.
    pub fn create_post(&mut self, body: &str, mood: Option<MoodTag>) -> Result<Post> {
        let supported = self.support.is_supported(body, mood);
        let id = PostId::new(self.ids.next_id());
        let post = Post::new(id, body, mood, self.clock.now(), supported)
            .inspect_err(|e| tracing::warn!(error = %e, "community post rejected"))?;

        self.repo.insert_post(post.clone())?;
        tracing::info!(post_id = %post.id(), supported, "community post created");
        Ok(post)
    }

    /// Posts in the configured feed order.
    pub fn list_posts(&self) -> &[Post] {
        self.repo.list_posts()
    }

    pub fn get_post(&self, id: &PostId) -> Result<&Post> {
        self.repo
            .get_post(id)
            .ok_or_else(|| DomainError::not_found("Post", id.as_str()))
    }

    /// Appends a supportive comment to the end of a post's thread.
    pub fn append_comment(&mut self, post_id: &PostId, body: &str) -> Result<Comment> {
        let comment = Comment::new(CommentId::new(self.ids.next_id()), body, self.clock.now())
            .inspect_err(|e| tracing::warn!(%post_id, error = %e, "comment rejected"))?;

        self.repo
            .append_comment(post_id, comment.clone())
            .inspect_err(|e| tracing::warn!(%post_id, error = %e, "comment rejected"))?;
        tracing::info!(%post_id, comment_id = %comment.id(), "comment appended");
        Ok(comment)
    }

    /// Read-only view of a post's thread in submission order.
    pub fn list_comments(&self, post_id: &PostId) -> Result<&[Comment]> {
        self.get_post(post_id).map(Post::comments)
    }

    /// Adds one reaction to a post, or to one of its comments when
    /// `comment_id` is given. Returns the new count.
    pub fn react(&mut self, post_id: &PostId, comment_id: Option<&CommentId>) -> Result<u64> {
        let result = match comment_id {
            Some(comment_id) => self.repo.increment_comment_reactions(post_id, comment_id),
            None => self.repo.increment_post_reactions(post_id),
        };
        match &result {
            Ok(count) => tracing::debug!(%post_id, ?comment_id, count, "reaction recorded"),
            Err(e) => tracing::warn!(%post_id, ?comment_id, error = %e, "reaction ignored"),
        }
        result
    }

    /// UI flavour of [`react`](Self::react): stale targets are ignored and
    /// reported as `false`.
    pub fn try_react(&mut self, post_id: &PostId, comment_id: Option<&CommentId>) -> bool {
        self.react(post_id, comment_id).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixed_clock, sequential_ids};
    use storage_adapters::memory::InMemoryCommunityRepo;
    use domains::MockSupportPolicy;
    use mockall::predicate::{eq, function};

    fn service(supported: bool) -> CommunityService {
        let mut support = MockSupportPolicy::new();
        support.expect_is_supported().return_const(supported);
        CommunityService::new(
            Box::new(InMemoryCommunityRepo::default()),
            fixed_clock(),
            sequential_ids(),
            Arc::new(support),
        )
    }

    #[test]
    fn create_post_uses_policy_and_ids() {
        let mut svc = service(false);
        let post = svc.create_post("Hello", Some(MoodTag::Hopeful)).unwrap();
        assert_eq!(post.id().as_str(), "id-1");
        assert!(!post.is_supported());
        assert_eq!(svc.list_posts().len(), 1);
    }

    #[test]
    fn policy_sees_body_and_mood_once() {
        let mut support = MockSupportPolicy::new();
        support
            .expect_is_supported()
            .with(function(|body: &str| body == "Hello"), eq(Some(MoodTag::Hopeful)))
            .times(1)
            .return_const(true);
        let mut svc = CommunityService::new(
            Box::new(InMemoryCommunityRepo::default()),
            fixed_clock(),
            sequential_ids(),
            Arc::new(support),
        );

        let post = svc.create_post("Hello", Some(MoodTag::Hopeful)).unwrap();
        svc.append_comment(post.id(), "welcome").unwrap();
        svc.react(post.id(), None).unwrap();
        assert!(svc.get_post(post.id()).unwrap().is_supported());
    }

    #[test]
    fn blank_post_leaves_feed_unchanged() {
        let mut svc = service(true);
        assert!(svc.create_post("   ", None).unwrap_err().is_validation());
        assert!(svc.list_posts().is_empty());
    }

    #[test]
    fn comments_keep_submission_order() {
        let mut svc = service(true);
        let post = svc.create_post("Hello", None).unwrap();
        let c1 = svc.append_comment(post.id(), "first").unwrap();
        let c2 = svc.append_comment(post.id(), "second").unwrap();
        let ids: Vec<_> = svc
            .list_comments(post.id())
            .unwrap()
            .iter()
            .map(|c| c.id().clone())
            .collect();
        assert_eq!(ids, vec![c1.id().clone(), c2.id().clone()]);
    }

    #[test]
    fn blank_comment_is_rejected_before_lookup() {
        let mut svc = service(true);
        let err = svc.append_comment(&"missing".into(), " ").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn comment_on_missing_post_is_not_found() {
        let mut svc = service(true);
        let err = svc.append_comment(&"missing".into(), "hi").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn reactions_count_only_successful_calls() {
        let mut svc = service(true);
        let post = svc.create_post("Hello", None).unwrap();
        let comment = svc.append_comment(post.id(), "hang in there").unwrap();

        assert_eq!(svc.react(post.id(), None).unwrap(), 1);
        assert!(!svc.try_react(&"ghost".into(), None));
        assert!(!svc.try_react(post.id(), Some(&"ghost".into())));
        assert_eq!(svc.react(post.id(), None).unwrap(), 2);
        assert_eq!(svc.react(post.id(), Some(comment.id())).unwrap(), 1);

        let stored = svc.get_post(post.id()).unwrap();
        assert_eq!(stored.reactions(), 2);
        assert_eq!(stored.comments()[0].reactions(), 1);
    }
}
