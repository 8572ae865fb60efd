//! # System adapters
//!
//! Production implementations of the non-storage ports: wall clock,
//! UUID v7 ids, the canned reply pool and the fixed support policy.

use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use uuid::Uuid;

use domains::{Clock, IdGenerator, MoodTag, ReplySource, SupportPolicy};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time-ordered UUID v7 ids, monotonic within the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Applies the same moderation decision to every new post.
#[derive(Debug, Clone, Copy)]
pub struct FixedSupportPolicy(pub bool);

impl SupportPolicy for FixedSupportPolicy {
    fn is_supported(&self, _body: &str, _mood: Option<MoodTag>) -> bool {
        self.0
    }
}

pub const CANNED_REPLIES: [&str; 8] = [
    "I hear you, and your feelings are completely valid. It takes courage to share what you're going through.",
    "Thank you for trusting me with your thoughts. Remember, it's okay to not be okay sometimes.",
    "That sounds really challenging. You're showing strength by reaching out and talking about it.",
    "I'm here with you. Take a deep breath - you're not alone in this journey.",
    "Your awareness of your feelings shows great emotional intelligence. That's something to be proud of.",
    "It's completely normal to feel this way. Many people experience similar emotions, and seeking support is a positive step.",
    "I can sense that you're going through a difficult time. Remember, healing isn't linear, and every small step matters.",
    "Thank you for sharing that with me. Your willingness to be open about your struggles shows incredible bravery.",
];

/// Picks uniformly at random from a fixed pool.
#[derive(Debug, Clone)]
pub struct RandomReplies {
    pool: Vec<String>,
}

impl RandomReplies {
    /// An empty pool falls back to the built-in replies.
    pub fn new(pool: Vec<String>) -> Self {
        if pool.is_empty() {
            return Self::default();
        }
        Self { pool }
    }
}

impl Default for RandomReplies {
    fn default() -> Self {
        Self {
            pool: CANNED_REPLIES.iter().map(|r| (*r).to_owned()).collect(),
        }
    }
}

impl ReplySource for RandomReplies {
    fn pick_reply(&self) -> String {
        self.pool
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(|| CANNED_REPLIES[0].to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_do_not_repeat() {
        let ids = UuidV7Ids;
        let seen: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn replies_come_from_pool() {
        let replies = RandomReplies::new(vec!["only one".to_owned()]);
        assert_eq!(replies.pick_reply(), "only one");

        let default = RandomReplies::new(Vec::new());
        assert!(CANNED_REPLIES.contains(&default.pick_reply().as_str()));
    }

    #[test]
    fn fixed_policy() {
        assert!(FixedSupportPolicy(true).is_supported("x", None));
        assert!(!FixedSupportPolicy(false).is_supported("x", Some(MoodTag::Sad)));
    }
}
