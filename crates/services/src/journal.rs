//! # Journal Service
//!
//! Mood journal with a derived average. The average and the stats are
//! recomputed from the full entry list on every read and never stored.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use domains::{
    parse_tags, Clock, EntryId, IdGenerator, JournalEntry, JournalRepository, MoodScore, Result,
};

/// Neutral average reported for an empty journal.
///
/// This biases "no data" toward "neutral" rather than signalling absence.
pub const DEFAULT_NEUTRAL_MOOD: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JournalStats {
    pub total_entries: usize,
    /// Entries written in the 7 days up to now.
    pub this_week: usize,
    /// Consecutive days with at least one entry, ending today or yesterday.
    pub streak_days: u32,
}

pub struct JournalService {
    repo: Box<dyn JournalRepository>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    neutral_mood: f64,
}

impl JournalService {
    pub fn new(
        repo: Box<dyn JournalRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repo,
            clock,
            ids,
            neutral_mood: DEFAULT_NEUTRAL_MOOD,
        }
    }

    /// Overrides the empty-journal average. Callers validate the range.
    pub fn with_neutral_mood(mut self, neutral_mood: f64) -> Self {
        self.neutral_mood = neutral_mood;
        self
    }

    /// Validates and prepends a new entry.
    ///
    /// `raw_tags` is the comma separated tag field as typed by the user.
    pub fn add_entry(
        &mut self,
        mood: i64,
        title: &str,
        body: &str,
        raw_tags: &str,
    ) -> Result<JournalEntry> {
        let entry = MoodScore::new(mood)
            .and_then(|mood| {
                JournalEntry::new(
                    EntryId::new(self.ids.next_id()),
                    self.clock.now(),
                    mood,
                    title,
                    body,
                    parse_tags(raw_tags),
                )
            })
            .inspect_err(|e| tracing::warn!(error = %e, "journal entry rejected"))?;

        self.repo.insert_entry(entry.clone())?;
        tracing::info!(entry_id = %entry.id(), mood = entry.mood().value(), "journal entry added");
        Ok(entry)
    }

    /// Most recent first.
    pub fn list_entries(&self) -> &[JournalEntry] {
        self.repo.list_entries()
    }

    /// Arithmetic mean of every mood score, or the neutral default when
    /// the journal is empty.
    pub fn average_mood(&self) -> f64 {
        let entries = self.repo.list_entries();
        if entries.is_empty() {
            return self.neutral_mood;
        }
        let sum: u32 = entries.iter().map(|e| u32::from(e.mood().value())).sum();
        f64::from(sum) / entries.len() as f64
    }

    /// The average rounded to the nearest score, for emoji display.
    pub fn average_mood_score(&self) -> MoodScore {
        MoodScore::nearest(self.average_mood())
    }

    pub fn stats(&self) -> JournalStats {
        let now = self.clock.now();
        let entries = self.repo.list_entries();
        let week_start = now - Duration::days(7);

        let this_week = entries
            .iter()
            .filter(|e| e.created_at() > week_start && e.created_at() <= now)
            .count();

        let days: BTreeSet<NaiveDate> =
            entries.iter().map(|e| e.created_at().date_naive()).collect();

        JournalStats {
            total_entries: entries.len(),
            this_week,
            streak_days: streak(&days, now.date_naive()),
        }
    }
}

fn streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut cursor = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut count = 0;
    while days.contains(&cursor) {
        count += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{clock_at, fixed_clock, noon, sequential_ids};
    use storage_adapters::memory::InMemoryJournalRepo;

    fn service() -> JournalService {
        JournalService::new(
            Box::new(InMemoryJournalRepo::default()),
            fixed_clock(),
            sequential_ids(),
        )
    }

    #[test]
    fn average_of_scores() {
        let mut svc = service();
        for mood in [4, 2, 3] {
            svc.add_entry(mood, "t", "b", "").unwrap();
        }
        assert_eq!(svc.average_mood(), 3.0);
    }

    #[test]
    fn empty_journal_is_neutral() {
        let svc = service();
        assert_eq!(svc.average_mood(), DEFAULT_NEUTRAL_MOOD);
        assert_eq!(svc.average_mood_score().label(), "Neutral");
    }

    #[test]
    fn neutral_default_is_configurable() {
        let svc = service().with_neutral_mood(2.5);
        assert_eq!(svc.average_mood(), 2.5);
    }

    #[test]
    fn rejected_entries_leave_journal_unchanged() {
        let mut svc = service();
        assert!(svc.add_entry(6, "t", "b", "").unwrap_err().is_validation());
        assert!(svc.add_entry(3, "", "b", "").unwrap_err().is_validation());
        assert!(svc.add_entry(0, "t", "b", "").unwrap_err().is_validation());
        assert!(svc.add_entry(3, "t", "   ", "").unwrap_err().is_validation());
        assert!(svc.list_entries().is_empty());
    }

    #[test]
    fn entries_are_prepended_with_parsed_tags() {
        let mut svc = service();
        svc.add_entry(2, "older", "b", "").unwrap();
        let latest = svc.add_entry(5, "newer", "b", "work, , grateful,work").unwrap();
        assert_eq!(svc.list_entries()[0].id(), latest.id());
        assert_eq!(latest.tags(), ["work", "grateful", "work"]);
    }

    #[test]
    fn stats_count_week_and_streak() {
        let now = noon();
        let mut days = BTreeSet::new();
        for offset in [1, 2, 3, 5] {
            days.insert(now.date_naive() - Duration::days(offset));
        }
        // Yesterday back to three days ago, the gap at four days ends it.
        assert_eq!(streak(&days, now.date_naive()), 3);

        days.insert(now.date_naive());
        assert_eq!(streak(&days, now.date_naive()), 4);
    }

    #[test]
    fn streak_is_zero_without_recent_entries() {
        let today = noon().date_naive();
        let days = BTreeSet::from([today - Duration::days(2)]);
        assert_eq!(streak(&days, today), 0);
    }

    #[test]
    fn stats_use_clock() {
        let mut svc = JournalService::new(
            Box::new(InMemoryJournalRepo::default()),
            clock_at(noon()),
            sequential_ids(),
        );
        svc.add_entry(4, "today", "b", "").unwrap();
        let stats = svc.stats();
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.this_week, 1);
        assert_eq!(stats.streak_days, 1);
    }
}
