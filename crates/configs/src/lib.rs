//! # configs
//!
//! Layered settings for the Solace binary.
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. `config/default.toml`
//! 3. `config/{SOLACE_ENV}.toml` (defaults to `development`)
//! 4. `SOLACE__SECTION__KEY` environment variables, after `.env` is loaded

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

use domains::{FeedOrder, MoodScore};

pub const ENV_PREFIX: &str = "SOLACE";

/// Upper bound for `chat.reply_delay_ms` (one hour).
pub const MAX_REPLY_DELAY_MS: u64 = 60 * 60 * 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub seed: SeedSettings,
    pub chat: ChatSettings,
    pub community: CommunitySettings,
    pub journal: JournalSettings,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedSettings {
    /// Load the curated threads, journal samples and resource catalogue.
    pub enabled: bool,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChatSettings {
    pub reply_delay_ms: u64,
    /// Replaces the built-in canned replies when non-empty.
    pub replies: Vec<String>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            replies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CommunitySettings {
    pub order: FeedOrder,
    /// Moderation decision applied to every newly created post.
    pub support_new_posts: bool,
}

impl Default for CommunitySettings {
    fn default() -> Self {
        Self {
            order: FeedOrder::Pinned,
            support_new_posts: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct JournalSettings {
    /// Average reported for an empty journal.
    pub neutral_mood: f64,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self { neutral_mood: 3.0 }
    }
}

impl Settings {
    /// Loads `.env`, the config files and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let env = std::env::var(format!("{ENV_PREFIX}_ENV"))
            .unwrap_or_else(|_| "development".to_owned());

        let settings: Settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()
    }

    /// Parses settings from a TOML document only. Used by tests and tools.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let (min, max) = (f64::from(MoodScore::MIN), f64::from(MoodScore::MAX));
        if !(min..=max).contains(&self.journal.neutral_mood) {
            return Err(ConfigError::Invalid(format!(
                "journal.neutral_mood must be between {min} and {max}, got {}",
                self.journal.neutral_mood
            )));
        }
        if self.chat.reply_delay_ms > MAX_REPLY_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "chat.reply_delay_ms must be at most {MAX_REPLY_DELAY_MS}, got {}",
                self.chat.reply_delay_ms
            )));
        }
        if self.chat.replies.iter().any(|r| r.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "chat.replies must not contain blank replies".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.chat.reply_delay_ms, 1000);
        assert!(settings.seed.enabled);
        assert_eq!(settings.community.order, FeedOrder::Pinned);
    }

    #[test]
    fn overrides_apply() {
        let settings = Settings::from_toml(
            r#"
            [log]
            format = "json"

            [community]
            order = "newest_first"
            support_new_posts = false

            [chat]
            reply_delay_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.community.order, FeedOrder::NewestFirst);
        assert!(!settings.community.support_new_posts);
        assert_eq!(settings.chat.reply_delay_ms, 250);
    }

    #[test]
    fn neutral_mood_out_of_range_is_invalid() {
        let err = Settings::from_toml("[journal]\nneutral_mood = 7.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn reply_delay_is_bounded() {
        let err = Settings::from_toml("[chat]\nreply_delay_ms = 9223372036854775807").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = Settings::from_toml("[chat]\nreply_delay_ms = 3600001").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let settings = Settings::from_toml("[chat]\nreply_delay_ms = 3600000").unwrap();
        assert_eq!(settings.chat.reply_delay_ms, MAX_REPLY_DELAY_MS);
    }

    #[test]
    fn blank_reply_is_invalid() {
        let err = Settings::from_toml("[chat]\nreplies = [\"ok\", \"  \"]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
