//! # Session
//!
//! The session-scoped context that owns every collection. A presentation
//! layer holds exactly one `Session` per tab/process and passes it by
//! reference to whatever needs to read or mutate it.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use domains::{
    relative_age, Clock, CommunityRepository, ExpressionRepository, IdGenerator,
    JournalRepository, ReplySource, Resource, SupportPolicy,
};

use crate::chat::{CompanionChat, DEFAULT_REPLY_DELAY_MS};
use crate::community::CommunityService;
use crate::expression::ExpressionService;
use crate::journal::{JournalService, DEFAULT_NEUTRAL_MOOD};
use crate::resources::ResourceLibrary;

/// Collaborators shared by every service in the session.
#[derive(Clone)]
pub struct SessionPorts {
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGenerator>,
    pub support: Arc<dyn SupportPolicy>,
    pub replies: Arc<dyn ReplySource>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub reply_delay: Duration,
    pub neutral_mood: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            reply_delay: Duration::milliseconds(DEFAULT_REPLY_DELAY_MS),
            neutral_mood: DEFAULT_NEUTRAL_MOOD,
        }
    }
}

/// Storage for one session, usually the in-memory adapters.
pub struct SessionRepos {
    pub community: Box<dyn CommunityRepository>,
    pub expression: Box<dyn ExpressionRepository>,
    pub journal: Box<dyn JournalRepository>,
    pub resources: Vec<Resource>,
}

pub struct Session {
    pub community: CommunityService,
    pub expression: ExpressionService,
    pub journal: JournalService,
    pub chat: CompanionChat,
    pub resources: ResourceLibrary,
    clock: Arc<dyn Clock>,
}

impl Session {
    pub fn new(ports: SessionPorts, repos: SessionRepos, settings: SessionSettings) -> Self {
        let SessionPorts { clock, ids, support, replies } = ports;
        Self {
            community: CommunityService::new(repos.community, clock.clone(), ids.clone(), support),
            expression: ExpressionService::new(repos.expression, clock.clone(), ids.clone()),
            journal: JournalService::new(repos.journal, clock.clone(), ids.clone())
                .with_neutral_mood(settings.neutral_mood),
            chat: CompanionChat::new(replies, clock.clone(), ids)
                .with_reply_delay(settings.reply_delay),
            resources: ResourceLibrary::new(repos.resources),
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Relative age of `timestamp`, computed against the session clock on
    /// every call.
    pub fn age_label(&self, timestamp: DateTime<Utc>) -> String {
        relative_age(self.clock.now(), timestamp)
    }
}
