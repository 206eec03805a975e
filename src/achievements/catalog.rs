// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in achievement catalog.
//!
//! Numeric threshold rules report `min(accumulated / threshold, 1.0)`;
//! boolean rules report 0.0 until satisfied, then 1.0. The catalog order
//! is stable and part of the public contract.

use super::{AchievementCategory, AchievementDefinition};

/// Half marathon distance in meters.
const HALF_MARATHON_METERS: f64 = 21_097.5;
/// Marathon distance in meters.
const MARATHON_METERS: f64 = 42_195.0;
/// Elevation of Mount Everest in meters.
const EVEREST_METERS: f64 = 8848.0;
/// 5:00 min/km expressed in seconds per meter.
const PACE_5_MIN_PER_KM: f64 = 0.3;

fn fraction(value: f64, threshold: f64) -> f64 {
    (value / threshold).min(1.0)
}

fn boolean(satisfied: bool) -> f64 {
    if satisfied {
        1.0
    } else {
        0.0
    }
}

/// The default milestone catalog, in stable order.
pub fn default_catalog() -> Vec<AchievementDefinition> {
    vec![
        // ─── Cumulative distance ─────────────────────────────────────
        AchievementDefinition {
            id: "distance-10k",
            category: AchievementCategory::Distance,
            title: "First Steps",
            description: "Cover 10 km across all activities",
            progress: |ctx| fraction(ctx.total_distance_meters, 10_000.0),
        },
        AchievementDefinition {
            id: "distance-100k",
            category: AchievementCategory::Distance,
            title: "Going the Distance",
            description: "Cover 100 km across all activities",
            progress: |ctx| fraction(ctx.total_distance_meters, 100_000.0),
        },
        AchievementDefinition {
            id: "distance-1000k",
            category: AchievementCategory::Distance,
            title: "Kilometer Collector",
            description: "Cover 1,000 km across all activities",
            progress: |ctx| fraction(ctx.total_distance_meters, 1_000_000.0),
        },
        // ─── Cumulative elevation ────────────────────────────────────
        AchievementDefinition {
            id: "elevation-1k",
            category: AchievementCategory::Elevation,
            title: "Hill Seeker",
            description: "Climb 1,000 m of total elevation",
            progress: |ctx| fraction(ctx.total_elevation_meters, 1000.0),
        },
        AchievementDefinition {
            id: "elevation-everest",
            category: AchievementCategory::Elevation,
            title: "Everesting",
            description: "Climb the height of Mount Everest in total",
            progress: |ctx| fraction(ctx.total_elevation_meters, EVEREST_METERS),
        },
        AchievementDefinition {
            id: "elevation-25k",
            category: AchievementCategory::Elevation,
            title: "High Roller",
            description: "Climb 25,000 m of total elevation",
            progress: |ctx| fraction(ctx.total_elevation_meters, 25_000.0),
        },
        // ─── Consistency: activity counts ────────────────────────────
        AchievementDefinition {
            id: "count-1",
            category: AchievementCategory::Consistency,
            title: "Off the Couch",
            description: "Log your first activity",
            progress: |ctx| fraction(f64::from(ctx.activity_count), 1.0),
        },
        AchievementDefinition {
            id: "count-10",
            category: AchievementCategory::Consistency,
            title: "Regular",
            description: "Log 10 activities",
            progress: |ctx| fraction(f64::from(ctx.activity_count), 10.0),
        },
        AchievementDefinition {
            id: "count-100",
            category: AchievementCategory::Consistency,
            title: "Century of Sessions",
            description: "Log 100 activities",
            progress: |ctx| fraction(f64::from(ctx.activity_count), 100.0),
        },
        // ─── Consistency: streaks ────────────────────────────────────
        AchievementDefinition {
            id: "streak-3",
            category: AchievementCategory::Consistency,
            title: "Three in a Row",
            description: "Be active on 3 consecutive days",
            progress: |ctx| fraction(f64::from(ctx.longest_streak_days), 3.0),
        },
        AchievementDefinition {
            id: "streak-7",
            category: AchievementCategory::Consistency,
            title: "Full Week",
            description: "Be active on 7 consecutive days",
            progress: |ctx| fraction(f64::from(ctx.longest_streak_days), 7.0),
        },
        AchievementDefinition {
            id: "streak-30",
            category: AchievementCategory::Consistency,
            title: "Monthly Habit",
            description: "Be active on 30 consecutive days",
            progress: |ctx| fraction(f64::from(ctx.longest_streak_days), 30.0),
        },
        // ─── Single-activity extremes ────────────────────────────────
        AchievementDefinition {
            id: "single-run-half",
            category: AchievementCategory::Speed,
            title: "Half Marathon",
            description: "Run 21.1 km in a single activity",
            progress: |ctx| fraction(ctx.best_single_distance("Run"), HALF_MARATHON_METERS),
        },
        AchievementDefinition {
            id: "single-run-marathon",
            category: AchievementCategory::Speed,
            title: "Marathon",
            description: "Run 42.2 km in a single activity",
            progress: |ctx| fraction(ctx.best_single_distance("Run"), MARATHON_METERS),
        },
        AchievementDefinition {
            id: "fast-5k",
            category: AchievementCategory::Speed,
            title: "Speedy 5K",
            description: "Run at least 5 km at 5:00 min/km or faster",
            progress: |ctx| {
                boolean(ctx.has_pace_at_distance("Run", 5000.0, PACE_5_MIN_PER_KM))
            },
        },
        // ─── Special ─────────────────────────────────────────────────
        AchievementDefinition {
            id: "early-bird",
            category: AchievementCategory::Special,
            title: "Early Bird",
            description: "Start an activity before 6:00 in the morning",
            progress: |ctx| boolean(ctx.has_start_before_hour(6)),
        },
        AchievementDefinition {
            id: "weekend-warrior",
            category: AchievementCategory::Special,
            title: "Weekend Warrior",
            description: "Be active on a Saturday and the following Sunday",
            progress: |ctx| boolean(ctx.has_weekend_pair()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementEvaluator;
    use crate::models::ActivityRecord;
    use chrono::NaiveDate;

    fn activity(id: u64, day: NaiveDate, hour: u32, distance: f64) -> ActivityRecord {
        ActivityRecord {
            id,
            user_id: 42,
            name: format!("Activity {}", id),
            sport_type: "Run".to_string(),
            start_date: day.and_hms_opt(hour, 0, 0).unwrap(),
            distance_meters: distance,
            moving_time_seconds: 1800,
            elevation_gain_meters: 100.0,
            average_speed: 2.8,
            calories: 300.0,
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = default_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_distance_threshold_progress_fraction() {
        let evaluator = AchievementEvaluator::default();
        // 85 km of history against the 100 km threshold.
        let activities: Vec<_> = (1..=17)
            .map(|i| activity(i, date((i % 28) as u32 + 1), 8, 5000.0))
            .collect();

        let progress = evaluator.progress(&activities);
        let rule = progress.iter().find(|p| p.id == "distance-100k").unwrap();
        assert!((rule.progress - 0.85).abs() < 1e-9);
        assert!(!rule.unlocked);
    }

    #[test]
    fn test_boolean_rules_report_zero_or_one() {
        let evaluator = AchievementEvaluator::default();

        let late = vec![activity(1, date(4), 8, 5000.0)];
        let progress = evaluator.progress(&late);
        let early_bird = progress.iter().find(|p| p.id == "early-bird").unwrap();
        assert_eq!(early_bird.progress, 0.0);

        let early = vec![activity(1, date(4), 5, 5000.0)];
        let progress = evaluator.progress(&early);
        let early_bird = progress.iter().find(|p| p.id == "early-bird").unwrap();
        assert_eq!(early_bird.progress, 1.0);
        assert!(early_bird.unlocked);
    }

    #[test]
    fn test_first_activity_unlocks_count_milestone() {
        let evaluator = AchievementEvaluator::default();
        let first = activity(1, date(4), 8, 5000.0);
        let unlocks = evaluator.check_new(&[first.clone()], Some(&first));
        assert!(unlocks.iter().any(|u| u.id == "count-1"));
    }
}
