// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted streak state, one row per user.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Continuous-activity streak state persisted by the storage collaborator.
///
/// Mutated only by [`crate::streaks::update_streaks`]; read operations
/// never advance it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Owning user ID
    pub user_id: u64,
    /// Length of the streak ending today or yesterday (0 if broken)
    pub current: u32,
    /// High-water mark over all recomputations; never regresses
    pub longest: u32,
    /// Most recent day counted into the current streak
    pub last_active_day: Option<NaiveDate>,
    /// First day of the current streak
    pub streak_start: Option<NaiveDate>,
    /// When this state was last recomputed
    pub updated_at: NaiveDateTime,
}

impl StreakState {
    /// Zeroed state for a user with no recorded streak.
    pub fn empty(user_id: u64, updated_at: NaiveDateTime) -> Self {
        Self {
            user_id,
            current: 0,
            longest: 0,
            last_active_day: None,
            streak_start: None,
            updated_at,
        }
    }
}
