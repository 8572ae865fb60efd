//! Assembles a [`Session`] from settings and the storage adapters.

use std::sync::Arc;

use anyhow::Context;
use chrono::Duration;

use configs::Settings;
use services::{Session, SessionPorts, SessionRepos, SessionSettings};
use storage_adapters::memory::{InMemoryCommunityRepo, InMemoryExpressionRepo, InMemoryJournalRepo};
use storage_adapters::{seed, FixedSupportPolicy, RandomReplies, SystemClock, UuidV7Ids};

pub fn build_session(settings: &Settings) -> anyhow::Result<Session> {
    let ports = SessionPorts {
        clock: Arc::new(SystemClock),
        ids: Arc::new(UuidV7Ids),
        support: Arc::new(FixedSupportPolicy(settings.community.support_new_posts)),
        replies: Arc::new(RandomReplies::new(settings.chat.replies.clone())),
    };

    let order = settings.community.order;
    let repos = if settings.seed.enabled {
        SessionRepos {
            community: Box::new(InMemoryCommunityRepo::with_seed(order, seed::community_posts()?)?),
            expression: Box::new(InMemoryExpressionRepo::with_seed(seed::expression_posts()?)?),
            journal: Box::new(InMemoryJournalRepo::with_seed(seed::journal_entries()?)?),
            resources: seed::resources().context("loading resource catalogue")?,
        }
    } else {
        SessionRepos {
            community: Box::new(InMemoryCommunityRepo::new(order)),
            expression: Box::new(InMemoryExpressionRepo::default()),
            journal: Box::new(InMemoryJournalRepo::default()),
            resources: Vec::new(),
        }
    };

    let reply_delay_ms = i64::try_from(settings.chat.reply_delay_ms)
        .context("chat.reply_delay_ms is too large")?;
    let session_settings = SessionSettings {
        reply_delay: Duration::milliseconds(reply_delay_ms),
        neutral_mood: settings.journal.neutral_mood,
    };

    tracing::info!(seeded = settings.seed.enabled, ?order, "session ready");
    Ok(Session::new(ports, repos, session_settings))
}
