//! # Seed data
//!
//! Curated content shipped with the app. The community threads are authored
//! in a deliberate narrative order, which the pinned feed preserves.

use chrono::{DateTime, Utc};
use thiserror::Error;

use domains::{
    parse_tags, Comment, DomainError, ExpressionPost, JournalEntry, MoodScore, MoodTag, Post,
    Resource,
};

const RESOURCES_JSON: &str = include_str!("../seed/resources.json");

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("invalid seed timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("invalid resource catalogue: {0}")]
    Catalogue(#[from] serde_json::Error),

    #[error("invalid seed entity: {0}")]
    Domain(#[from] DomainError),
}

pub type SeedResult<T> = std::result::Result<T, SeedError>;

fn at(rfc3339: &str) -> SeedResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(rfc3339)?.with_timezone(&Utc))
}

fn comment(id: &str, body: &str, ts: &str, reactions: u64, helpful: bool) -> SeedResult<Comment> {
    Ok(Comment::new(id.into(), body, at(ts)?)?
        .with_reactions(reactions)
        .with_helpful(helpful))
}

/// The three curated supportive threads, in pinned order.
pub fn community_posts() -> SeedResult<Vec<Post>> {
    let meditation = Post::new(
        "1".into(),
        "Today marks 30 days of consistent meditation practice. It's been challenging but I'm starting to notice small improvements in my anxiety levels.",
        Some(MoodTag::Calm),
        at("2025-01-10T14:30:00Z")?,
        true,
    )?
    .with_reactions(24)
    .with_comments([
        comment(
            "1-1",
            "That's amazing progress! Meditation has been a game-changer for me too. Keep it up! 🌟",
            "2025-01-10T15:00:00Z",
            8,
            true,
        )?,
        comment(
            "1-2",
            "30 days is such an accomplishment! What type of meditation do you practice?",
            "2025-01-10T15:30:00Z",
            5,
            false,
        )?,
    ])?;

    let tough_day = Post::new(
        "2".into(),
        "Having a really tough day with depression. Everything feels overwhelming and I can't seem to get out of bed. Just need some encouragement.",
        Some(MoodTag::Sad),
        at("2025-01-10T12:15:00Z")?,
        true,
    )?
    .with_reactions(18)
    .with_comments([
        comment(
            "2-1",
            "Sending you love and strength. Depression lies to us - you ARE worthy and this feeling will pass. Take it one moment at a time. 💙",
            "2025-01-10T12:45:00Z",
            12,
            true,
        )?,
        comment(
            "2-2",
            "I see you and I hear you. You're not alone in this. Even sharing here took courage. That's a strength to hold onto.",
            "2025-01-10T13:00:00Z",
            9,
            true,
        )?,
        comment(
            "2-3",
            "Bad days don't last, but resilient people do. You've gotten through 100% of your worst days so far. 🌈",
            "2025-01-10T13:30:00Z",
            15,
            true,
        )?,
    ])?;

    let therapy = Post::new(
        "3".into(),
        "Started therapy last week and it's bringing up a lot of emotions. Feeling hopeful but also scared about the journey ahead.",
        Some(MoodTag::Hopeful),
        at("2025-01-10T10:45:00Z")?,
        true,
    )?
    .with_reactions(16)
    .with_comments([comment(
        "3-1",
        "Therapy can feel overwhelming at first, but you're taking such a brave step. The fact that you're feeling emotions means you're processing - that's growth! 🌟",
        "2025-01-10T11:15:00Z",
        7,
        true,
    )?])?;

    Ok(vec![meditation, tough_day, therapy])
}

/// Anonymous mood posts, newest first.
pub fn expression_posts() -> SeedResult<Vec<ExpressionPost>> {
    let seed = [
        (
            "1",
            "Feeling overwhelmed with work today, but trying to remember that it's okay to take breaks.",
            MoodTag::Sad,
            "2025-01-10T14:30:00Z",
            12,
            3,
        ),
        (
            "2",
            "Had a really good therapy session today. Starting to see some patterns in my thinking.",
            MoodTag::Hopeful,
            "2025-01-10T12:15:00Z",
            8,
            2,
        ),
        (
            "3",
            "Anxiety is hitting hard today, but I'm practicing my breathing exercises.",
            MoodTag::Anxious,
            "2025-01-10T10:45:00Z",
            15,
            5,
        ),
    ];

    seed.into_iter()
        .map(|(id, body, mood, ts, reactions, comments)| -> SeedResult<ExpressionPost> {
            Ok(ExpressionPost::new(id.into(), body, Some(mood), at(ts)?)?
                .with_counts(reactions, comments))
        })
        .collect()
}

/// Sample journal entries, most recent first.
pub fn journal_entries() -> SeedResult<Vec<JournalEntry>> {
    let seed = [
        (
            "1",
            "2025-01-10T00:00:00Z",
            4,
            "Productive Day",
            "Had a great day at work today. Managed to complete all my tasks and even had time for a nice walk in the evening. Feeling grateful for the small wins.",
            "work, grateful, productive",
        ),
        (
            "2",
            "2025-01-09T00:00:00Z",
            2,
            "Feeling Overwhelmed",
            "Struggling with anxiety today. Too many things on my plate and feeling like I cant catch up. Trying to remember my breathing exercises.",
            "anxiety, overwhelmed, coping",
        ),
        (
            "3",
            "2025-01-08T00:00:00Z",
            3,
            "Mixed Emotions",
            "Had therapy today. Some difficult topics came up but Im glad I went. Progress isnt always linear.",
            "therapy, progress, self-care",
        ),
    ];

    seed.into_iter()
        .map(|(id, ts, mood, title, body, tags)| -> SeedResult<JournalEntry> {
            Ok(JournalEntry::new(
                id.into(),
                at(ts)?,
                MoodScore::new(mood)?,
                title,
                body,
                parse_tags(tags),
            )?)
        })
        .collect()
}

pub fn resources() -> SeedResult<Vec<Resource>> {
    let resources: Vec<Resource> = serde_json::from_str(RESOURCES_JSON)?;
    tracing::debug!(count = resources.len(), "resource catalogue loaded");
    Ok(resources)
}
