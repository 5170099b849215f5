use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated "typing" pause before each reply. Zero disables it.
    pub reply_delay_ms: u64,
    /// Longest accepted utterance, in characters.
    pub max_message_chars: usize,
    /// Sessions with no messages for this long are dropped. Zero disables pruning.
    pub session_idle_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            reply_delay_ms: parse_env("REPLY_DELAY_MS", defaults.reply_delay_ms)?,
            max_message_chars: parse_env("MAX_MESSAGE_CHARS", defaults.max_message_chars)?,
            session_idle_timeout_secs: parse_env(
                "SESSION_IDLE_TIMEOUT_SECS",
                defaults.session_idle_timeout_secs,
            )?,
        })
    }

    pub fn reply_delay(&self) -> Option<Duration> {
        (self.reply_delay_ms > 0).then(|| Duration::from_millis(self.reply_delay_ms))
    }

    pub fn session_idle_timeout(&self) -> Option<Duration> {
        (self.session_idle_timeout_secs > 0)
            .then(|| Duration::from_secs(self.session_idle_timeout_secs))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            reply_delay_ms: 0,
            max_message_chars: 4000,
            session_idle_timeout_secs: 1800,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
