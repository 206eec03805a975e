// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Personal record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metric a personal record is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordMetric {
    /// Longest single-activity distance (meters, higher is better)
    LongestDistance,
    /// Longest single-activity moving time (seconds, higher is better)
    LongestDuration,
    /// Highest single-activity elevation gain (meters, higher is better)
    HighestElevation,
    /// Fastest average pace (seconds per meter, lower is better)
    FastestPace,
}

impl RecordMetric {
    /// All metrics, in the order records are reported.
    pub const ALL: [RecordMetric; 4] = [
        RecordMetric::LongestDistance,
        RecordMetric::LongestDuration,
        RecordMetric::HighestElevation,
        RecordMetric::FastestPace,
    ];

    /// Whether a larger value beats a smaller one for this metric.
    pub fn higher_is_better(self) -> bool {
        !matches!(self, RecordMetric::FastestPace)
    }
}

/// Best-ever value of a metric for a given activity type.
///
/// Exactly one current record exists per (type, metric) pair; a record is
/// superseded only by a strictly better value. Exact ties keep the
/// chronologically earliest activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Sport type the record is scoped to
    pub sport_type: String,
    /// Metric this record is for
    pub metric: RecordMetric,
    /// Best value (units depend on the metric)
    pub value: f64,
    /// Activity that achieved the record
    pub activity_id: u64,
    /// Calendar day the record was achieved
    pub achieved_on: NaiveDate,
}
