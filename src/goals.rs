// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal progress calculation.
//!
//! Resolves the active period window for a goal, filters the history to
//! the window and the goal's sport filter, and reduces by the goal's
//! metric. Percent-of-target math lives on [`GoalProgress`] itself.

use chrono::NaiveDate;

use crate::models::{ActivityRecord, Goal, GoalMetric, GoalPeriod, GoalProgress};
use crate::period::PeriodWindow;

/// The period window a goal is currently evaluated over.
pub fn active_window(goal: &Goal, today: NaiveDate) -> PeriodWindow {
    match goal.period {
        GoalPeriod::Weekly => PeriodWindow::week_containing(today),
        GoalPeriod::Monthly => PeriodWindow::month_containing(today),
    }
}

/// Progress toward a goal for its active period as of `today`.
///
/// Empty or fully filtered input yields a zero current value, never an
/// error; malformed records are excluded from the reduction.
pub fn goal_progress(activities: &[ActivityRecord], goal: &Goal, today: NaiveDate) -> GoalProgress {
    let window = active_window(goal, today);

    let current_value = activities
        .iter()
        .filter(|a| {
            a.is_well_formed() && window.contains(a.start_date) && goal.matches_sport(&a.sport_type)
        })
        .map(|a| match goal.metric {
            GoalMetric::Distance => a.distance_meters,
            GoalMetric::Time => f64::from(a.moving_time_seconds),
            GoalMetric::Elevation => a.elevation_gain_meters,
            GoalMetric::Count => 1.0,
        })
        .sum();

    GoalProgress {
        current_value,
        target: goal.target,
        days_left: window.days_left(today),
    }
}
