use chrono::Duration;

use integration_tests::harness;
use services::SessionSettings;

#[test]
fn average_is_exact_mean() {
    let mut h = harness().build();
    let journal = &mut h.session.journal;
    for mood in [4, 2, 3] {
        journal.add_entry(mood, "title", "body", "").unwrap();
    }
    assert_eq!(journal.average_mood(), 3.0);
}

#[test]
fn empty_journal_reports_neutral_default() {
    let h = harness().build();
    assert_eq!(h.session.journal.average_mood(), 3.0);
}

#[test]
fn configured_neutral_default() {
    let settings = SessionSettings { neutral_mood: 4.0, ..SessionSettings::default() };
    let h = harness().settings(settings).build();
    assert_eq!(h.session.journal.average_mood(), 4.0);
    assert_eq!(h.session.journal.average_mood_score().label(), "Good");
}

#[test]
fn invalid_entries_change_nothing() {
    let mut h = harness().seeded().build();
    let journal = &mut h.session.journal;
    let before = journal.list_entries().to_vec();
    let average = journal.average_mood();

    assert!(journal.add_entry(6, "t", "b", "").unwrap_err().is_validation());
    assert!(journal.add_entry(3, "", "b", "").unwrap_err().is_validation());

    assert_eq!(journal.list_entries(), before.as_slice());
    assert_eq!(journal.average_mood(), average);
}

#[test]
fn new_entry_goes_first_and_moves_average() {
    let mut h = harness().seeded().build();
    let journal = &mut h.session.journal;
    assert_eq!(journal.average_mood(), 3.0);

    let entry = journal
        .add_entry(5, "Sunny walk", "Felt lighter today", "work, , grateful,work")
        .unwrap();
    assert_eq!(journal.list_entries()[0].id(), entry.id());
    assert_eq!(entry.tags(), ["work", "grateful", "work"]);
    assert_eq!(journal.average_mood(), 3.5);
}

#[test]
fn stats_follow_the_clock() {
    let mut h = harness().seeded().build();
    // Seeds cover Jan 8-10; the harness clock is Jan 10, 18:00.
    let stats = h.session.journal.stats();
    assert_eq!(stats.total_entries, 3);
    assert_eq!(stats.this_week, 3);
    assert_eq!(stats.streak_days, 3);

    h.clock.advance(Duration::days(1));
    h.session.journal.add_entry(4, "Next day", "Kept going", "").unwrap();
    let stats = h.session.journal.stats();
    assert_eq!(stats.streak_days, 4);

    h.clock.advance(Duration::days(10));
    let stats = h.session.journal.stats();
    assert_eq!(stats.this_week, 0);
    assert_eq!(stats.streak_days, 0);
}
