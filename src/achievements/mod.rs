// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gamified achievement evaluation.
//!
//! The evaluator holds an explicitly constructed, immutable catalog of
//! milestone rules; there is no module-level state, so tests can
//! substitute a smaller catalog. Each rule's progress function is pure
//! and works from a precomputed [`AchievementContext`].

pub mod catalog;

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::ActivityRecord;
use crate::streaks;

/// Catalog-defined grouping for an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Distance,
    Elevation,
    Consistency,
    Speed,
    Special,
}

/// One milestone rule in the catalog.
///
/// The progress function returns a fraction in `[0.0, 1.0]`; a rule is
/// unlocked once it reports 1.0. Boolean rules report 0.0 until
/// satisfied, then 1.0.
#[derive(Debug, Clone)]
pub struct AchievementDefinition {
    /// Stable identifier
    pub id: &'static str,
    /// Category for caller-side grouping
    pub category: AchievementCategory,
    /// Human-readable title
    pub title: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Pure progress function over the precomputed context
    pub progress: fn(&AchievementContext) -> f64,
}

/// Per-rule progress for a steady-state query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementProgress {
    /// Rule ID
    pub id: String,
    /// Rule category
    pub category: AchievementCategory,
    /// Rule title
    pub title: String,
    /// Progress fraction in `[0.0, 1.0]`
    pub progress: f64,
    /// Whether the rule is satisfied (progress >= 1.0)
    pub unlocked: bool,
}

/// Unlocked vs. total counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementStats {
    pub unlocked: u32,
    pub total: u32,
}

/// A milestone newly satisfied by one additional activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementUnlock {
    /// Rule ID
    pub id: String,
    /// Activity that tipped the rule over, if known
    pub triggering_activity_id: Option<u64>,
    /// When the unlock happened (the triggering activity's start)
    pub unlocked_at: NaiveDateTime,
}

/// Precomputed history facts shared by every rule in one evaluation pass.
///
/// Malformed records (negative distance or elevation) are excluded from
/// the cumulative sums and counts.
#[derive(Debug)]
pub struct AchievementContext<'a> {
    activities: &'a [ActivityRecord],
    /// Cumulative distance in meters
    pub total_distance_meters: f64,
    /// Cumulative elevation gain in meters
    pub total_elevation_meters: f64,
    /// Number of well-formed activities
    pub activity_count: u32,
    /// Longest consecutive-day streak anywhere in the history
    pub longest_streak_days: u32,
    active_days: BTreeSet<NaiveDate>,
}

impl<'a> AchievementContext<'a> {
    /// Build the context with one pass over the history.
    pub fn new(activities: &'a [ActivityRecord]) -> Self {
        let mut total_distance_meters = 0.0;
        let mut total_elevation_meters = 0.0;
        let mut activity_count = 0u32;
        let mut active_days = BTreeSet::new();

        for activity in activities {
            if !activity.is_well_formed() {
                continue;
            }
            total_distance_meters += activity.distance_meters;
            total_elevation_meters += activity.elevation_gain_meters;
            activity_count += 1;
            active_days.insert(activity.start_day());
        }

        Self {
            activities,
            total_distance_meters,
            total_elevation_meters,
            activity_count,
            longest_streak_days: streaks::longest_streak(activities, None),
            active_days,
        }
    }

    /// Longest single-activity distance for one sport type, in meters.
    pub fn best_single_distance(&self, sport_type: &str) -> f64 {
        self.activities
            .iter()
            .filter(|a| a.is_well_formed() && a.sport_type == sport_type)
            .map(|a| a.distance_meters)
            .fold(0.0, f64::max)
    }

    /// Whether some activity of a sport covers at least `min_distance`
    /// meters at a pace of at most `max_pace` seconds per meter.
    pub fn has_pace_at_distance(
        &self,
        sport_type: &str,
        min_distance: f64,
        max_pace: f64,
    ) -> bool {
        self.activities
            .iter()
            .filter(|a| a.sport_type == sport_type && a.distance_meters >= min_distance)
            .filter_map(ActivityRecord::pace_seconds_per_meter)
            .any(|pace| pace <= max_pace)
    }

    /// Whether any activity started before the given hour of day.
    pub fn has_start_before_hour(&self, hour: u32) -> bool {
        self.activities.iter().any(|a| a.start_date.hour() < hour)
    }

    /// Whether a Saturday and the following Sunday both have activity.
    pub fn has_weekend_pair(&self) -> bool {
        self.active_days
            .iter()
            .filter(|d| d.weekday() == Weekday::Sat)
            .any(|d| self.active_days.contains(&(*d + Duration::days(1))))
    }
}

/// Evaluates a catalog of achievement rules against activity history.
#[derive(Debug, Clone)]
pub struct AchievementEvaluator {
    catalog: Vec<AchievementDefinition>,
}

impl Default for AchievementEvaluator {
    fn default() -> Self {
        Self::new(catalog::default_catalog())
    }
}

impl AchievementEvaluator {
    /// Create an evaluator over an explicit rule list.
    pub fn new(catalog: Vec<AchievementDefinition>) -> Self {
        Self { catalog }
    }

    /// The rules this evaluator holds, in stable catalog order.
    pub fn catalog(&self) -> &[AchievementDefinition] {
        &self.catalog
    }

    /// Progress for every rule against the full history, catalog order.
    pub fn progress(&self, activities: &[ActivityRecord]) -> Vec<AchievementProgress> {
        let ctx = AchievementContext::new(activities);
        self.catalog
            .iter()
            .map(|def| {
                let progress = (def.progress)(&ctx).clamp(0.0, 1.0);
                AchievementProgress {
                    id: def.id.to_string(),
                    category: def.category,
                    title: def.title.to_string(),
                    progress,
                    unlocked: progress >= 1.0,
                }
            })
            .collect()
    }

    /// Unlocked vs. total counts for the history.
    pub fn stats(&self, activities: &[ActivityRecord]) -> AchievementStats {
        let unlocked = self
            .progress(activities)
            .iter()
            .filter(|p| p.unlocked)
            .count();
        AchievementStats {
            unlocked: unlocked as u32,
            total: self.catalog.len() as u32,
        }
    }

    /// Rules newly satisfied by one additional activity.
    ///
    /// Evaluates the catalog with the trigger excluded and then included,
    /// returning only the rules that flip to unlocked; already-unlocked
    /// milestones are never re-reported. With no explicit trigger the
    /// most recent activity in the history is used; an empty history with
    /// no trigger yields nothing.
    pub fn check_new(
        &self,
        activities: &[ActivityRecord],
        trigger: Option<&ActivityRecord>,
    ) -> Vec<AchievementUnlock> {
        let Some(trigger) = trigger.or_else(|| {
            activities
                .iter()
                .max_by_key(|a| (a.start_date, a.id))
        }) else {
            return Vec::new();
        };

        let before: Vec<ActivityRecord> = activities
            .iter()
            .filter(|a| a.id != trigger.id)
            .cloned()
            .collect();
        let mut after = before.clone();
        after.push(trigger.clone());

        let ctx_before = AchievementContext::new(&before);
        let ctx_after = AchievementContext::new(&after);

        let unlocks: Vec<AchievementUnlock> = self
            .catalog
            .iter()
            .filter(|def| {
                (def.progress)(&ctx_before) < 1.0 && (def.progress)(&ctx_after) >= 1.0
            })
            .map(|def| AchievementUnlock {
                id: def.id.to_string(),
                triggering_activity_id: Some(trigger.id),
                unlocked_at: trigger.start_date,
            })
            .collect();

        if !unlocks.is_empty() {
            tracing::debug!(
                trigger_id = trigger.id,
                count = unlocks.len(),
                "New achievements unlocked"
            );
        }
        unlocks
    }
}
