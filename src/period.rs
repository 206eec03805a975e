// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Half-open calendar period windows.
//!
//! This is the single source of week/month boundary logic shared by the
//! aggregator, the achievement evaluator, and goal progress. Weeks are
//! Monday-anchored; all intervals are `[start, end)`.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Kind of period a window covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Week,
    Month,
}

/// A half-open date interval `[start, end)` anchored to a week or month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// First day of the window (inclusive)
    pub start: NaiveDate,
    /// First day after the window (exclusive)
    pub end: NaiveDate,
    /// Whether this is a week or month window
    pub kind: PeriodKind,
}

impl PeriodWindow {
    /// The Monday-anchored week containing `date`.
    pub fn week_containing(date: NaiveDate) -> Self {
        let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        Self::week_starting(monday)
    }

    /// The week beginning at `start` (assumed to be a Monday).
    pub fn week_starting(start: NaiveDate) -> Self {
        Self {
            start,
            end: start + Duration::days(7),
            kind: PeriodKind::Week,
        }
    }

    /// The calendar month containing `date`.
    pub fn month_containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = if date.month() == 12 {
            NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
        }
        .unwrap_or(start);
        Self {
            start,
            end,
            kind: PeriodKind::Month,
        }
    }

    /// The immediately preceding window of the same kind.
    pub fn previous(&self) -> Self {
        match self.kind {
            PeriodKind::Week => Self::week_starting(self.start - Duration::days(7)),
            PeriodKind::Month => Self::month_containing(self.start - Duration::days(1)),
        }
    }

    /// Whether a timestamp falls within the window.
    pub fn contains(&self, when: NaiveDateTime) -> bool {
        let day = when.date();
        day >= self.start && day < self.end
    }

    /// Calendar days remaining in the window as of `today`, counting
    /// `today` itself. Zero once the window has passed, never negative.
    pub fn days_left(&self, today: NaiveDate) -> u32 {
        if today >= self.end {
            0
        } else {
            u32::try_from((self.end - today).num_days()).unwrap_or(0)
        }
    }
}
