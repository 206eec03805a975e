// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engine configuration loaded from environment variables.
//!
//! Callers embedding the engine in a service can tune the few knobs it
//! owns without recompiling; tests use `Default`.

use std::env;

/// Engine configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of weeks of history produced by the weekly-history view
    pub history_weeks: usize,
    /// Sport types that qualify for streaks; `None` counts every type
    pub streak_sport_types: Option<Vec<String>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_weeks: 12,
            streak_sport_types: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// `INSIGHTS_HISTORY_WEEKS` overrides the history length;
    /// `INSIGHTS_STREAK_SPORTS` is a comma-separated type whitelist.
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let history_weeks = match env::var("INSIGHTS_HISTORY_WEEKS") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("INSIGHTS_HISTORY_WEEKS"))?,
            Err(_) => Self::default().history_weeks,
        };

        let streak_sport_types = env::var("INSIGHTS_STREAK_SPORTS").ok().and_then(|raw| {
            let types: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if types.is_empty() {
                None
            } else {
                Some(types)
            }
        });

        Ok(Self {
            history_weeks,
            streak_sport_types,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
