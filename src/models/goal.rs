// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal definition, validated partial updates, and derived progress.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{InsightError, Result};

/// Recurring period a goal is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    /// Monday-anchored calendar week
    Weekly,
    /// Calendar month
    Monthly,
}

impl FromStr for GoalPeriod {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "weekly" => Ok(GoalPeriod::Weekly),
            "monthly" => Ok(GoalPeriod::Monthly),
            other => Err(InsightError::InvalidArgument(format!(
                "Unknown goal period: {}",
                other
            ))),
        }
    }
}

/// Metric a goal accumulates within its period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalMetric {
    /// Sum of distance in meters
    Distance,
    /// Sum of moving time in seconds
    Time,
    /// Sum of elevation gain in meters
    Elevation,
    /// Number of matching activities
    Count,
}

impl FromStr for GoalMetric {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "distance" => Ok(GoalMetric::Distance),
            "time" => Ok(GoalMetric::Time),
            "elevation" => Ok(GoalMetric::Elevation),
            "count" => Ok(GoalMetric::Count),
            other => Err(InsightError::InvalidArgument(format!(
                "Unknown goal metric: {}",
                other
            ))),
        }
    }
}

/// User-defined target for a metric within a recurring period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Goal ID
    pub id: u64,
    /// Owning user ID
    pub user_id: u64,
    /// Display title
    pub title: String,
    /// Period the goal recurs over
    pub period: GoalPeriod,
    /// Metric accumulated toward the target
    pub metric: GoalMetric,
    /// Optional sport-type filter; `None` matches every type
    pub sport_filter: Option<String>,
    /// Target value in the metric's unit
    pub target: f64,
}

impl Goal {
    /// Whether an activity's sport type passes this goal's filter.
    ///
    /// An unset filter or the literal `"all"` matches everything;
    /// anything else is an exact, case-sensitive match.
    pub fn matches_sport(&self, sport_type: &str) -> bool {
        match self.sport_filter.as_deref() {
            None | Some("all") => true,
            Some(filter) => filter == sport_type,
        }
    }

    /// Merge a validated partial update into this goal.
    ///
    /// The update is validated first; an invalid update leaves the goal
    /// untouched. Setting the filter to `"all"` clears it.
    pub fn apply_update(&mut self, update: &GoalUpdate) -> Result<()> {
        update
            .validate()
            .map_err(|e| InsightError::InvalidArgument(e.to_string()))?;

        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(target) = update.target {
            self.target = target;
        }
        if let Some(filter) = &update.sport_filter {
            self.sport_filter = if filter == "all" {
                None
            } else {
                Some(filter.clone())
            };
        }
        Ok(())
    }
}

/// Partial goal update with fully enumerated optional fields.
///
/// Replaces loosely-typed field-name/value payloads: every updatable
/// field is named here and validated before merge.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GoalUpdate {
    /// New title, if changing
    #[validate(length(min = 1, max = 120))]
    pub title: Option<String>,
    /// New target value, if changing (must be positive)
    #[validate(range(min = 0.000_001))]
    pub target: Option<f64>,
    /// New sport filter, if changing (`"all"` clears the filter)
    #[validate(length(min = 1))]
    pub sport_filter: Option<String>,
}

/// Derived progress toward a goal for the active period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Accumulated value for the active period, in the goal metric's unit
    pub current_value: f64,
    /// Target the goal is measured against
    pub target: f64,
    /// Calendar days remaining in the active period (never negative)
    pub days_left: u32,
}

impl GoalProgress {
    /// Percent of target, uncapped. Zero when the target is not positive.
    pub fn percent(&self) -> f64 {
        if self.target > 0.0 {
            self.current_value / self.target * 100.0
        } else {
            0.0
        }
    }

    /// Percent of target capped at 100 for display.
    pub fn percent_display(&self) -> f64 {
        self.percent().min(100.0)
    }
}
