//! Shared fixtures for the cross-crate scenario tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use domains::{Clock, FeedOrder, IdGenerator, MockReplySource};
use services::{Session, SessionPorts, SessionRepos, SessionSettings};
use storage_adapters::memory::{
    InMemoryCommunityRepo, InMemoryExpressionRepo, InMemoryJournalRepo,
};
use storage_adapters::{seed, FixedSupportPolicy};

pub const COMPANION_REPLY: &str = "I'm here with you.";

/// Clock the test moves by hand.
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self(Mutex::new(now)))
    }

    pub fn advance(&self, by: Duration) {
        *self.0.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Yields "gen-1", "gen-2", ... which never collide with seed ids.
#[derive(Default)]
pub struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("gen-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Shortly after the seed threads were written.
pub fn seed_evening() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 10, 18, 0, 0).unwrap()
}

pub struct Harness {
    pub session: Session,
    pub clock: Arc<ManualClock>,
}

pub struct HarnessBuilder {
    seeded: bool,
    order: FeedOrder,
    support: bool,
    settings: SessionSettings,
    now: DateTime<Utc>,
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self {
            seeded: false,
            order: FeedOrder::Pinned,
            support: true,
            settings: SessionSettings::default(),
            now: seed_evening(),
        }
    }
}

impl HarnessBuilder {
    pub fn seeded(mut self) -> Self {
        self.seeded = true;
        self
    }

    pub fn order(mut self, order: FeedOrder) -> Self {
        self.order = order;
        self
    }

    pub fn support(mut self, support: bool) -> Self {
        self.support = support;
        self
    }

    pub fn settings(mut self, settings: SessionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Harness {
        let clock = ManualClock::at(self.now);
        let mut replies = MockReplySource::new();
        replies.expect_pick_reply().return_const(COMPANION_REPLY.to_owned());

        let ports = SessionPorts {
            clock: clock.clone(),
            ids: Arc::new(SequentialIds::default()),
            support: Arc::new(FixedSupportPolicy(self.support)),
            replies: Arc::new(replies),
        };

        let repos = if self.seeded {
            let community =
                InMemoryCommunityRepo::with_seed(self.order, seed::community_posts().unwrap());
            let expression = InMemoryExpressionRepo::with_seed(seed::expression_posts().unwrap());
            let journal = InMemoryJournalRepo::with_seed(seed::journal_entries().unwrap());
            SessionRepos {
                community: Box::new(community.unwrap()),
                expression: Box::new(expression.unwrap()),
                journal: Box::new(journal.unwrap()),
                resources: seed::resources().unwrap(),
            }
        } else {
            SessionRepos {
                community: Box::new(InMemoryCommunityRepo::new(self.order)),
                expression: Box::new(InMemoryExpressionRepo::default()),
                journal: Box::new(InMemoryJournalRepo::default()),
                resources: Vec::new(),
            }
        };

        Harness {
            session: Session::new(ports, repos, self.settings),
            clock,
        }
    }
}

pub fn harness() -> HarnessBuilder {
    HarnessBuilder::default()
}
