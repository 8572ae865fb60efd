//! # Mood lookup tables
//!
//! Closed enumerations for the two mood scales used across the app:
//! the emoji tag attached to feed posts and the 1-5 journal score.
//! Unknown keys are rejected at the boundary so an invalid mood can
//! never be constructed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, Result};

/// Emoji marker attached to a community or expression post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTag {
    Happy,
    Sad,
    Anxious,
    Angry,
    Hopeful,
    Tired,
    Grateful,
    Confused,
    /// Only used by curated community content (meditation milestones).
    Calm,
}

impl MoodTag {
    /// Tags offered by the post composer, in display order.
    pub const SELECTABLE: [MoodTag; 8] = [
        MoodTag::Happy,
        MoodTag::Sad,
        MoodTag::Anxious,
        MoodTag::Angry,
        MoodTag::Hopeful,
        MoodTag::Tired,
        MoodTag::Grateful,
        MoodTag::Confused,
    ];

    const ALL: [MoodTag; 9] = [
        MoodTag::Happy,
        MoodTag::Sad,
        MoodTag::Anxious,
        MoodTag::Angry,
        MoodTag::Hopeful,
        MoodTag::Tired,
        MoodTag::Grateful,
        MoodTag::Confused,
        MoodTag::Calm,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            MoodTag::Happy => "😊",
            MoodTag::Sad => "😔",
            MoodTag::Anxious => "😰",
            MoodTag::Angry => "😡",
            MoodTag::Hopeful => "🌱",
            MoodTag::Tired => "😴",
            MoodTag::Grateful => "🤗",
            MoodTag::Confused => "😕",
            MoodTag::Calm => "🧘",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodTag::Happy => "Happy",
            MoodTag::Sad => "Sad",
            MoodTag::Anxious => "Anxious",
            MoodTag::Angry => "Angry",
            MoodTag::Hopeful => "Hopeful",
            MoodTag::Tired => "Tired",
            MoodTag::Grateful => "Grateful",
            MoodTag::Confused => "Confused",
            MoodTag::Calm => "Calm",
        }
    }

    pub fn from_emoji(emoji: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.emoji() == emoji)
    }

    /// Parses raw composer input: empty means "no mood selected".
    pub fn parse_optional(raw: &str) -> Result<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

impl FromStr for MoodTag {
    type Err = DomainError;

    /// Accepts either the emoji or the label (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::from_emoji(s)
            .or_else(|| Self::ALL.into_iter().find(|tag| tag.label().eq_ignore_ascii_case(s)))
            .ok_or_else(|| DomainError::validation(format!("unknown mood tag '{s}'")))
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

/// Journal mood on a 1 (very low) to 5 (excellent) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    const EMOJIS: [&'static str; 5] = ["😢", "😔", "😐", "😊", "😄"];
    const LABELS: [&'static str; 5] = ["Very Low", "Low", "Neutral", "Good", "Excellent"];

    /// Accepts any integer so out-of-range input from the UI is a
    /// validation error rather than a truncation.
    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::validation(format!(
                "mood score must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn neutral() -> Self {
        Self(3)
    }

    /// Nearest score to a fractional average, clamped into range.
    pub fn nearest(average: f64) -> Self {
        let rounded = average.round().clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        Self(rounded as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn emoji(self) -> &'static str {
        Self::EMOJIS[usize::from(self.0 - 1)]
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[usize::from(self.0 - 1)]
    }
}

impl TryFrom<u8> for MoodScore {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(i64::from(value))
    }
}

impl From<MoodScore> for u8 {
    fn from(score: MoodScore) -> u8 {
        score.0
    }
}
