//! # services
//!
//! Business rules for Solace, written against the ports in `domains`.
//! Every service is owned by a [`Session`]; nothing here is a
//! process-wide singleton.

pub mod chat;
pub mod community;
pub mod expression;
pub mod journal;
pub mod resources;
pub mod session;

pub use chat::{CompanionChat, PendingReply, SendOutcome, GREETING};
pub use community::CommunityService;
pub use expression::ExpressionService;
pub use journal::{JournalService, JournalStats};
pub use resources::ResourceLibrary;
pub use session::{Session, SessionPorts, SessionRepos, SessionSettings};

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};
    use domains::{MockClock, MockIdGenerator};

    pub fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap()
    }

    pub fn clock_at(now: DateTime<Utc>) -> Arc<MockClock> {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        Arc::new(clock)
    }

    pub fn fixed_clock() -> Arc<MockClock> {
        clock_at(noon())
    }

    /// Yields "id-1", "id-2", ...
    pub fn sequential_ids() -> Arc<MockIdGenerator> {
        let counter = AtomicUsize::new(0);
        let mut ids = MockIdGenerator::new();
        ids.expect_next_id()
            .returning(move || format!("id-{}", counter.fetch_add(1, Ordering::SeqCst) + 1));
        Arc::new(ids)
    }
}
