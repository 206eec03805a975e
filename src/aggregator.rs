// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Period-bounded aggregation over activity history.
//!
//! Every function here is a pure fold over the supplied collection:
//! empty input yields zeroed totals, malformed records are skipped, and
//! percentages degrade to zero rather than NaN.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ActivityRecord;
use crate::period::PeriodWindow;

/// Summed totals for one period window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Total distance in meters
    pub distance_meters: f64,
    /// Total moving time in seconds
    pub moving_time_seconds: u64,
    /// Total elevation gain in meters
    pub elevation_gain_meters: f64,
    /// Number of activities in the period
    pub activity_count: u32,
}

impl PeriodTotals {
    fn add(&mut self, activity: &ActivityRecord) {
        self.distance_meters += activity.distance_meters;
        self.moving_time_seconds += u64::from(activity.moving_time_seconds);
        self.elevation_gain_meters += activity.elevation_gain_meters;
        self.activity_count += 1;
    }
}

/// Sum totals for activities falling inside a window.
pub fn period_stats(activities: &[ActivityRecord], window: PeriodWindow) -> PeriodTotals {
    let mut totals = PeriodTotals::default();
    for activity in activities {
        if activity.is_well_formed() && window.contains(activity.start_date) {
            totals.add(activity);
        }
    }
    totals
}

/// Totals for the week `[week_start, week_start + 7d)`.
pub fn weekly_stats(activities: &[ActivityRecord], week_start: NaiveDate) -> PeriodTotals {
    period_stats(activities, PeriodWindow::week_starting(week_start))
}

/// Totals for the calendar month containing `reference`.
pub fn monthly_stats(activities: &[ActivityRecord], reference: NaiveDate) -> PeriodTotals {
    period_stats(activities, PeriodWindow::month_containing(reference))
}

/// Restartable iterator over the last `n` weekly aggregates, oldest first.
///
/// Weeks with no activity still appear, with zeroed totals. The final
/// element is always the week containing `today`.
#[derive(Debug, Clone)]
pub struct WeeklyHistory<'a> {
    activities: &'a [ActivityRecord],
    next_start: NaiveDate,
    remaining: usize,
}

impl<'a> Iterator for WeeklyHistory<'a> {
    type Item = (PeriodWindow, PeriodTotals);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let window = PeriodWindow::week_starting(self.next_start);
        let totals = period_stats(self.activities, window);
        self.next_start = window.end;
        self.remaining -= 1;
        Some((window, totals))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WeeklyHistory<'_> {}

/// The last `n` weekly aggregates ending at the week containing `today`.
pub fn weekly_history(
    activities: &[ActivityRecord],
    n: usize,
    today: NaiveDate,
) -> WeeklyHistory<'_> {
    let current = PeriodWindow::week_containing(today);
    let weeks_back = n.saturating_sub(1);
    let first_start = current.start - chrono::Duration::weeks(weeks_back as i64);
    WeeklyHistory {
        activities,
        next_start: first_start,
        remaining: n,
    }
}

/// Count and percentage share of one activity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeShare {
    /// Sport type
    pub sport_type: String,
    /// Number of activities of this type
    pub count: u32,
    /// Share of all activities, in percent
    pub percent: f64,
}

/// Per-type counts and percentage shares across the whole collection.
///
/// Sorted by descending count; ties keep first-seen type order.
/// Percentages sum to 100 (within float tolerance) for non-empty input.
pub fn activity_type_breakdown(activities: &[ActivityRecord]) -> Vec<TypeShare> {
    // Vec keyed by first-seen order so tie ordering stays stable.
    let mut counts: Vec<(String, u32)> = Vec::new();
    for activity in activities {
        match counts.iter_mut().find(|(t, _)| *t == activity.sport_type) {
            Some((_, count)) => *count += 1,
            None => counts.push((activity.sport_type.clone(), 1)),
        }
    }

    let total: u32 = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return Vec::new();
    }

    // sort_by is stable, so equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(sport_type, count)| TypeShare {
            sport_type,
            count,
            percent: f64::from(count) / f64::from(total) * 100.0,
        })
        .collect()
}

/// Current week's totals against the immediately preceding week's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekComparison {
    /// Totals for the week containing the reference date
    pub current: PeriodTotals,
    /// Totals for the week before it
    pub previous: PeriodTotals,
    /// Percent change in distance
    pub distance_change_percent: f64,
    /// Percent change in moving time
    pub time_change_percent: f64,
    /// Percent change in elevation gain
    pub elevation_change_percent: f64,
    /// Percent change in activity count
    pub count_change_percent: f64,
}

/// Percent change from `previous` to `current`; 0 when `previous` is 0.
fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Compare the week containing `today` with the week before it.
pub fn week_comparison(activities: &[ActivityRecord], today: NaiveDate) -> WeekComparison {
    let window = PeriodWindow::week_containing(today);
    let current = period_stats(activities, window);
    let previous = period_stats(activities, window.previous());

    WeekComparison {
        distance_change_percent: percent_change(current.distance_meters, previous.distance_meters),
        time_change_percent: percent_change(
            current.moving_time_seconds as f64,
            previous.moving_time_seconds as f64,
        ),
        elevation_change_percent: percent_change(
            current.elevation_gain_meters,
            previous.elevation_gain_meters,
        ),
        count_change_percent: percent_change(
            f64::from(current.activity_count),
            f64::from(previous.activity_count),
        ),
        current,
        previous,
    }
}
