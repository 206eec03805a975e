// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregator integration tests.
//!
//! Covers the week-boundary and percentage-sum properties plus the
//! two-runs scenario: 5 km and 7 km on consecutive days must report
//! 12,000 m and a count of 2 for the containing week.

mod common;

use activity_insights::aggregator::{
    activity_type_breakdown, monthly_stats, week_comparison, weekly_history, weekly_stats,
};
use activity_insights::{config::EngineConfig, InsightsEngine};
use common::{date, ride, run};

#[test]
fn test_two_runs_on_consecutive_days_scenario() {
    // 2024-03-04 is a Monday.
    let activities = vec![
        run(1, date(2024, 3, 4), 5000.0),
        run(2, date(2024, 3, 5), 7000.0),
    ];

    let totals = weekly_stats(&activities, date(2024, 3, 4));
    assert_eq!(totals.distance_meters, 12_000.0);
    assert_eq!(totals.activity_count, 2);
}

#[test]
fn test_week_boundary_activity_counted_exactly_once() {
    // Activity at midnight on the boundary Monday belongs to the later week.
    let boundary = common::ActivityBuilder::new(1, "Run", date(2024, 3, 11))
        .start(common::at(date(2024, 3, 11), 0, 0))
        .build();

    let earlier = weekly_stats(&[boundary.clone()], date(2024, 3, 4));
    let later = weekly_stats(&[boundary], date(2024, 3, 11));

    assert_eq!(earlier.activity_count, 0);
    assert_eq!(later.activity_count, 1);
}

#[test]
fn test_monthly_stats_respect_calendar_month() {
    let activities = vec![
        run(1, date(2024, 2, 29), 8000.0),
        run(2, date(2024, 3, 1), 5000.0),
    ];

    let feb = monthly_stats(&activities, date(2024, 2, 15));
    let mar = monthly_stats(&activities, date(2024, 3, 15));

    assert_eq!(feb.distance_meters, 8000.0);
    assert_eq!(mar.distance_meters, 5000.0);
}

#[test]
fn test_breakdown_sums_to_100_for_any_nonempty_input() {
    let activities = vec![
        run(1, date(2024, 3, 4), 5000.0),
        run(2, date(2024, 3, 5), 5000.0),
        run(3, date(2024, 3, 6), 5000.0),
        ride(4, date(2024, 3, 6), 20_000.0),
        ride(5, date(2024, 3, 7), 25_000.0),
        common::ActivityBuilder::new(6, "Swim", date(2024, 3, 7)).build(),
        common::ActivityBuilder::new(7, "Hike", date(2024, 3, 8)).build(),
    ];

    let breakdown = activity_type_breakdown(&activities);
    let sum: f64 = breakdown.iter().map(|s| s.percent).sum();
    assert!((sum - 100.0).abs() < 0.01, "percent sum was {}", sum);

    // Descending by count, first-seen order for the 1-count tie.
    assert_eq!(breakdown[0].sport_type, "Run");
    assert_eq!(breakdown[1].sport_type, "Ride");
    assert_eq!(breakdown[2].sport_type, "Swim");
    assert_eq!(breakdown[3].sport_type, "Hike");
}

#[test]
fn test_breakdown_empty_input_is_empty() {
    assert!(activity_type_breakdown(&[]).is_empty());
}

#[test]
fn test_weekly_history_length_and_order() {
    let activities = vec![
        run(1, date(2024, 2, 20), 5000.0),
        run(2, date(2024, 3, 5), 7000.0),
    ];

    let history: Vec<_> = weekly_history(&activities, 4, date(2024, 3, 6)).collect();
    assert_eq!(history.len(), 4);

    // Oldest first; each window starts where the previous ended.
    for pair in history.windows(2) {
        assert_eq!(pair[0].0.end, pair[1].0.start);
    }
    assert_eq!(history[3].0.start, date(2024, 3, 4));
    assert_eq!(history[1].1.activity_count, 1); // Week of Feb 19
    assert_eq!(history[3].1.activity_count, 1); // Current week
}

#[test]
fn test_engine_uses_configured_history_weeks() {
    let engine = InsightsEngine::new(EngineConfig {
        history_weeks: 8,
        streak_sport_types: None,
    });
    let history: Vec<_> = engine.weekly_history(&[], date(2024, 3, 6)).collect();
    assert_eq!(history.len(), 8);
    assert!(history.iter().all(|(_, t)| t.activity_count == 0));
}

#[test]
fn test_week_comparison_against_prior_week() {
    let activities = vec![
        run(1, date(2024, 2, 28), 10_000.0), // previous week (Feb 26 - Mar 3)
        run(2, date(2024, 3, 5), 12_000.0),  // current week
        run(3, date(2024, 3, 6), 3000.0),
    ];

    let cmp = week_comparison(&activities, date(2024, 3, 6));
    assert_eq!(cmp.previous.distance_meters, 10_000.0);
    assert_eq!(cmp.current.distance_meters, 15_000.0);
    assert!((cmp.distance_change_percent - 50.0).abs() < 1e-9);
    assert!((cmp.count_change_percent - 100.0).abs() < 1e-9);
}
