//! # Companion Chat
//!
//! Canned-reply chat. Each user message schedules one reply, due after a
//! fixed delay. The schedule has a single slot: sending again before the
//! reply is due cancels the stale one, so at most one reply is ever pending.
//!
//! The service never sleeps. Drivers ask for [`next_due`](CompanionChat::next_due)
//! and call [`poll`](CompanionChat::poll) once that instant has passed.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use domains::{
    require_text, ChatMessage, Clock, DomainError, IdGenerator, MessageId, ReplySource, Result,
    Sender,
};

pub const GREETING: &str = "Hello! I'm here to provide you with a safe, non-judgmental space to share your thoughts and feelings. How are you doing today?";

pub const DEFAULT_REPLY_DELAY_MS: i64 = 1000;

/// A reply waiting in the schedule slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// The user message this reply answers.
    pub reply_to: MessageId,
    pub due_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub message: ChatMessage,
    /// The reply that was pending before this send, now cancelled.
    pub cancelled: Option<PendingReply>,
}

pub struct CompanionChat {
    transcript: Vec<ChatMessage>,
    pending: Option<PendingReply>,
    replies: Arc<dyn ReplySource>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    reply_delay: Duration,
}

impl CompanionChat {
    /// Starts a transcript holding only the companion's greeting.
    pub fn new(
        replies: Arc<dyn ReplySource>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let greeting = ChatMessage {
            id: MessageId::new(ids.next_id()),
            text: GREETING.to_owned(),
            sender: Sender::Companion,
            sent_at: clock.now(),
        };
        Self {
            transcript: vec![greeting],
            pending: None,
            replies,
            clock,
            ids,
            reply_delay: Duration::milliseconds(DEFAULT_REPLY_DELAY_MS),
        }
    }

    pub fn with_reply_delay(mut self, reply_delay: Duration) -> Self {
        self.reply_delay = reply_delay;
        self
    }

    /// Appends the user's message and schedules a reply.
    pub fn send(&mut self, text: &str) -> Result<SendOutcome> {
        require_text("message", text)
            .inspect_err(|e| tracing::warn!(error = %e, "chat message rejected"))?;

        let now = self.clock.now();
        let due_at = now.checked_add_signed(self.reply_delay).ok_or_else(|| {
            let e = DomainError::validation(format!(
                "reply delay of {}ms is out of range",
                self.reply_delay.num_milliseconds()
            ));
            tracing::warn!(error = %e, "chat message rejected");
            e
        })?;
        let message = ChatMessage {
            id: MessageId::new(self.ids.next_id()),
            text: text.to_owned(),
            sender: Sender::User,
            sent_at: now,
        };
        self.transcript.push(message.clone());

        let cancelled = self.pending.replace(PendingReply {
            reply_to: message.id.clone(),
            due_at,
        });
        if let Some(stale) = &cancelled {
            tracing::debug!(reply_to = %stale.reply_to, "pending reply cancelled");
        }

        Ok(SendOutcome { message, cancelled })
    }

    /// Emits the pending reply if it is due.
    pub fn poll(&mut self) -> Option<ChatMessage> {
        let now = self.clock.now();
        let pending = match self.pending.take() {
            Some(p) if p.due_at <= now => p,
            other => {
                self.pending = other;
                return None;
            }
        };

        let reply = ChatMessage {
            id: MessageId::new(self.ids.next_id()),
            text: self.replies.pick_reply(),
            sender: Sender::Companion,
            sent_at: now,
        };
        self.transcript.push(reply.clone());
        tracing::debug!(reply_to = %pending.reply_to, "companion replied");
        Some(reply)
    }

    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    pub fn pending(&self) -> Option<&PendingReply> {
        self.pending.as_ref()
    }

    pub fn cancel_pending(&mut self) -> Option<PendingReply> {
        self.pending.take()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}
