use std::sync::Arc;

use chrono::Duration;

use domains::{MockReplySource, Sender};
use integration_tests::{harness, COMPANION_REPLY};
use services::{Session, SessionPorts, SessionRepos, SessionSettings, GREETING};
use storage_adapters::{FixedSupportPolicy, SystemClock, UuidV7Ids};

#[test]
fn greeting_opens_the_transcript() {
    let h = harness().build();
    let transcript = h.session.chat.transcript();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].text, GREETING);
    assert_eq!(transcript[0].sender, Sender::Companion);
}

#[test]
fn reply_lands_after_default_delay() {
    let mut h = harness().build();
    let sent = h.session.chat.send("I'm feeling anxious today").unwrap();
    assert_eq!(h.session.chat.next_due(), Some(sent.message.sent_at + Duration::seconds(1)));

    h.clock.advance(Duration::milliseconds(999));
    assert!(h.session.chat.poll().is_none());

    h.clock.advance(Duration::milliseconds(1));
    let reply = h.session.chat.poll().unwrap();
    assert_eq!(reply.text, COMPANION_REPLY);

    let senders: Vec<_> = h.session.chat.transcript().iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::Companion, Sender::User, Sender::Companion]);
}

#[test]
fn rapid_messages_yield_one_reply() {
    let mut h = harness().build();
    h.session.chat.send("first").unwrap();
    h.clock.advance(Duration::milliseconds(300));
    let second = h.session.chat.send("second").unwrap();
    assert!(second.cancelled.is_some());

    h.clock.advance(Duration::seconds(5));
    assert!(h.session.chat.poll().is_some());
    assert!(h.session.chat.poll().is_none());
    assert_eq!(h.session.chat.transcript().len(), 4);
}

#[test]
fn configured_delay_is_honoured() {
    let settings = SessionSettings {
        reply_delay: Duration::seconds(3),
        ..SessionSettings::default()
    };
    let mut h = harness().settings(settings).build();
    h.session.chat.send("hello").unwrap();

    h.clock.advance(Duration::seconds(2));
    assert!(h.session.chat.poll().is_none());
    h.clock.advance(Duration::seconds(1));
    assert!(h.session.chat.poll().is_some());
}

#[tokio::test]
async fn wall_clock_driver_receives_reply() {
    let mut replies = MockReplySource::new();
    replies.expect_pick_reply().times(1).return_const(COMPANION_REPLY.to_owned());
    let ports = SessionPorts {
        clock: Arc::new(SystemClock),
        ids: Arc::new(UuidV7Ids),
        support: Arc::new(FixedSupportPolicy(true)),
        replies: Arc::new(replies),
    };
    let repos = SessionRepos {
        community: Box::new(storage_adapters::memory::InMemoryCommunityRepo::default()),
        expression: Box::new(storage_adapters::memory::InMemoryExpressionRepo::default()),
        journal: Box::new(storage_adapters::memory::InMemoryJournalRepo::default()),
        resources: Vec::new(),
    };
    let settings = SessionSettings {
        reply_delay: Duration::milliseconds(20),
        ..SessionSettings::default()
    };
    let mut session = Session::new(ports, repos, settings);

    session.chat.send("are you there?").unwrap();
    assert!(session.chat.poll().is_none());

    let due = session.chat.next_due().unwrap();
    let wait = (due - session.now()).to_std().unwrap_or_default();
    tokio::time::sleep(wait + std::time::Duration::from_millis(5)).await;

    let reply = session.chat.poll().unwrap();
    assert_eq!(reply.sender, Sender::Companion);
    assert!(session.chat.pending().is_none());
}

#[test]
fn polling_without_pending_reply_is_quiet() {
    let mut h = harness().build();
    h.clock.advance(Duration::hours(1));
    assert!(h.session.chat.poll().is_none());
    assert_eq!(h.session.chat.transcript().len(), 1);
}

#[test]
fn out_of_range_delay_rejects_message_instead_of_panicking() {
    let settings = SessionSettings {
        reply_delay: Duration::milliseconds(i64::MAX),
        ..SessionSettings::default()
    };
    let mut h = harness().settings(settings).build();

    assert!(h.session.chat.send("hello").unwrap_err().is_validation());
    assert_eq!(h.session.chat.transcript().len(), 1);
    assert_eq!(h.session.chat.next_due(), None);
}
