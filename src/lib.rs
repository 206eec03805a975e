// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Insights: derive aggregates, records, streaks, and goal
//! progress from exercise-activity history.
//!
//! This crate is the deterministic computation core of a fitness app:
//! given a flat, append-only collection of activity records, it produces
//! period aggregates, personal records, continuity streaks, achievement
//! progress, and goal progress. Ingestion, storage, and presentation are
//! external collaborators; the only mutation the engine performs is the
//! streak-state write through the [`streaks::StreakStore`] trait.

pub mod achievements;
pub mod aggregator;
pub mod config;
pub mod error;
pub mod goals;
pub mod models;
pub mod period;
pub mod records;
pub mod streaks;

use chrono::{NaiveDate, NaiveDateTime};

use achievements::{AchievementEvaluator, AchievementProgress, AchievementStats, AchievementUnlock};
use aggregator::WeeklyHistory;
use config::EngineConfig;
use error::Result;
use models::{ActivityRecord, Goal, GoalProgress, StreakState};
use streaks::StreakStore;

/// Facade bundling the engine's configuration and achievement catalog.
///
/// All methods delegate to the module-level functions; construct the
/// engine once and share it freely, since it holds no per-user state.
pub struct InsightsEngine {
    pub config: EngineConfig,
    evaluator: AchievementEvaluator,
}

impl Default for InsightsEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl InsightsEngine {
    /// Create an engine with the built-in achievement catalog.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            evaluator: AchievementEvaluator::default(),
        }
    }

    /// Create an engine with a custom achievement catalog.
    pub fn with_catalog(config: EngineConfig, evaluator: AchievementEvaluator) -> Self {
        Self { config, evaluator }
    }

    /// The configured number of recent weekly aggregates, oldest first.
    pub fn weekly_history<'a>(
        &self,
        activities: &'a [ActivityRecord],
        today: NaiveDate,
    ) -> WeeklyHistory<'a> {
        aggregator::weekly_history(activities, self.config.history_weeks, today)
    }

    /// Recompute and persist streaks using the configured type filter.
    pub fn update_streaks<S: StreakStore>(
        &self,
        store: &S,
        user_id: u64,
        activities: &[ActivityRecord],
        now: NaiveDateTime,
    ) -> Result<StreakState> {
        streaks::update_streaks(
            store,
            user_id,
            activities,
            now,
            self.config.streak_sport_types.as_deref(),
        )
    }

    /// Progress for every catalog rule against the full history.
    pub fn achievement_progress(&self, activities: &[ActivityRecord]) -> Vec<AchievementProgress> {
        self.evaluator.progress(activities)
    }

    /// Unlocked vs. total achievement counts.
    pub fn achievement_stats(&self, activities: &[ActivityRecord]) -> AchievementStats {
        self.evaluator.stats(activities)
    }

    /// Achievements newly unlocked by one additional activity.
    pub fn check_achievements(
        &self,
        activities: &[ActivityRecord],
        trigger: Option<&ActivityRecord>,
    ) -> Vec<AchievementUnlock> {
        self.evaluator.check_new(activities, trigger)
    }

    /// Progress toward a goal for its active period.
    pub fn goal_progress(
        &self,
        activities: &[ActivityRecord],
        goal: &Goal,
        today: NaiveDate,
    ) -> GoalProgress {
        goals::goal_progress(activities, goal, today)
    }
}
