// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Continuous-activity streak computation and persistence.
//!
//! Streaks are recomputed from a fresh scan of history; the persisted
//! state is mutated only by [`update_streaks`]. Read paths never advance
//! it. All day arithmetic is timezone-naive calendar days, matching the
//! stored dates.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ActivityRecord, StreakState};
use crate::period::PeriodWindow;

/// Result of a pure streak recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Run of consecutive days ending today or yesterday (0 if broken)
    pub current: u32,
    /// Longest run anywhere in the supplied history
    pub longest: u32,
    /// Most recent active day
    pub last_active_day: Option<NaiveDate>,
    /// First day of the current streak (None when broken)
    pub streak_start: Option<NaiveDate>,
}

impl StreakSummary {
    fn empty() -> Self {
        Self {
            current: 0,
            longest: 0,
            last_active_day: None,
            streak_start: None,
        }
    }
}

/// Whether an activity counts toward streaks under an optional type filter.
/// Malformed records never count, matching the other reductions.
fn qualifies(activity: &ActivityRecord, sport_types: Option<&[String]>) -> bool {
    if !activity.is_well_formed() {
        return false;
    }
    match sport_types {
        None => true,
        Some(types) => types.iter().any(|t| t == &activity.sport_type),
    }
}

/// Deduplicated, sorted active days for a history.
fn active_days(activities: &[ActivityRecord], sport_types: Option<&[String]>) -> Vec<NaiveDate> {
    activities
        .iter()
        .filter(|a| qualifies(a, sport_types))
        .map(ActivityRecord::start_day)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Longest run of consecutive calendar days anywhere in the history,
/// independent of whether it is still current.
pub fn longest_streak(activities: &[ActivityRecord], sport_types: Option<&[String]>) -> u32 {
    let days = active_days(activities, sport_types);
    longest_run(&days)
}

fn longest_run(days: &[NaiveDate]) -> u32 {
    longest_run_step(days, Duration::days(1))
}

/// Longest run in a sorted, deduplicated date list where consecutive
/// entries are exactly `step` apart.
fn longest_run_step(dates: &[NaiveDate], step: Duration) -> u32 {
    if dates.is_empty() {
        return 0;
    }
    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in dates.windows(2) {
        if pair[1] - pair[0] == step {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }
    longest
}

/// Recompute streaks from history as of `today`.
///
/// The current streak is the maximal consecutive run ending at the most
/// recent active day. A last active day strictly before yesterday breaks
/// it (same-day and yesterday grace), though `longest` is still reported
/// from the full history.
pub fn compute_streaks(
    activities: &[ActivityRecord],
    today: NaiveDate,
    sport_types: Option<&[String]>,
) -> StreakSummary {
    let days = active_days(activities, sport_types);
    let Some(&last) = days.last() else {
        return StreakSummary::empty();
    };

    let longest = longest_run(&days);

    if last < today - Duration::days(1) {
        return StreakSummary {
            current: 0,
            longest,
            last_active_day: Some(last),
            streak_start: None,
        };
    }

    // Walk backward from the most recent active day.
    let mut current = 1u32;
    let mut start = last;
    for pair in days.windows(2).rev() {
        if pair[1] - pair[0] == Duration::days(1) && pair[1] <= start {
            current += 1;
            start = pair[0];
        } else if pair[1] <= start {
            break;
        }
    }

    StreakSummary {
        current,
        longest,
        last_active_day: Some(last),
        streak_start: Some(start),
    }
}

/// Current and longest runs of consecutive activity weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekStreakSummary {
    /// Run of consecutive weeks ending this week or last week (0 if broken)
    pub current: u32,
    /// Longest run anywhere in the supplied history
    pub longest: u32,
}

/// Recompute week streaks from history as of `today`.
///
/// An active week is a Monday-anchored calendar week containing at least
/// one qualifying activity. The current run may end in the week holding
/// `today` or the week before it (the weekly analogue of the yesterday
/// grace); an older last active week breaks it.
pub fn compute_week_streaks(
    activities: &[ActivityRecord],
    today: NaiveDate,
    sport_types: Option<&[String]>,
) -> WeekStreakSummary {
    let weeks: Vec<NaiveDate> = activities
        .iter()
        .filter(|a| qualifies(a, sport_types))
        .map(|a| PeriodWindow::week_containing(a.start_day()).start)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let Some(&last) = weeks.last() else {
        return WeekStreakSummary {
            current: 0,
            longest: 0,
        };
    };

    let longest = longest_run_step(&weeks, Duration::days(7));

    let this_week = PeriodWindow::week_containing(today).start;
    if last < this_week - Duration::days(7) {
        return WeekStreakSummary {
            current: 0,
            longest,
        };
    }

    let mut current = 1u32;
    let mut start = last;
    for pair in weeks.windows(2).rev() {
        if pair[1] - pair[0] == Duration::days(7) && pair[1] <= start {
            current += 1;
            start = pair[0];
        } else if pair[1] <= start {
            break;
        }
    }

    WeekStreakSummary { current, longest }
}

/// Storage collaborator for persisted streak state.
///
/// The engine performs at most one write per invocation and never
/// retries; a failed write must leave the previous state untouched.
pub trait StreakStore {
    /// Load the persisted state for a user, if any.
    fn load(&self, user_id: u64) -> Result<Option<StreakState>>;

    /// Persist a recomputed state.
    fn save(&self, state: &StreakState) -> Result<()>;
}

/// Recompute streaks from history and persist the result.
///
/// This is the only operation allowed to change persisted streak state.
/// The stored `longest` is a monotonic high-water mark: a recomputation
/// over a shorter history window never regresses it.
pub fn update_streaks<S: StreakStore>(
    store: &S,
    user_id: u64,
    activities: &[ActivityRecord],
    now: NaiveDateTime,
    sport_types: Option<&[String]>,
) -> Result<StreakState> {
    let summary = compute_streaks(activities, now.date(), sport_types);
    let stored_longest = store.load(user_id)?.map_or(0, |s| s.longest);

    let state = StreakState {
        user_id,
        current: summary.current,
        longest: summary.longest.max(stored_longest),
        last_active_day: summary.last_active_day,
        streak_start: summary.streak_start,
        updated_at: now,
    };

    store.save(&state)?;
    tracing::info!(
        user_id,
        current = state.current,
        longest = state.longest,
        "Streak state updated"
    );
    Ok(state)
}

/// Read the last persisted state without recomputation.
///
/// Users with no stored state get a zeroed state stamped with `now`.
pub fn get_streak_info<S: StreakStore>(
    store: &S,
    user_id: u64,
    now: NaiveDateTime,
) -> Result<StreakState> {
    Ok(store
        .load(user_id)?
        .unwrap_or_else(|| StreakState::empty(user_id, now)))
}

/// In-memory streak store for tests and offline use.
#[derive(Debug, Default)]
pub struct MemoryStreakStore {
    states: std::sync::Mutex<std::collections::HashMap<u64, StreakState>>,
}

impl MemoryStreakStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StreakStore for MemoryStreakStore {
    fn load(&self, user_id: u64) -> Result<Option<StreakState>> {
        let states = self
            .states
            .lock()
            .map_err(|e| crate::error::InsightError::Store(e.to_string()))?;
        Ok(states.get(&user_id).cloned())
    }

    fn save(&self, state: &StreakState) -> Result<()> {
        let mut states = self
            .states
            .lock()
            .map_err(|e| crate::error::InsightError::Store(e.to_string()))?;
        states.insert(state.user_id, state.clone());
        Ok(())
    }
}
