// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Personal record extraction.
//!
//! A single scan over the full history produces the best value per
//! (sport type, metric) pair. A record is replaced only by a strictly
//! better value; exact ties keep the chronologically earliest activity,
//! so the output is stable under any permutation of the input.

use std::collections::HashMap;

use crate::models::{ActivityRecord, PersonalRecord, RecordMetric};

/// Candidate value of one metric for one activity.
///
/// `None` means the activity does not qualify for the metric (zero
/// distance for pace, zero value for the others).
fn metric_value(activity: &ActivityRecord, metric: RecordMetric) -> Option<f64> {
    match metric {
        RecordMetric::LongestDistance => {
            (activity.distance_meters > 0.0).then_some(activity.distance_meters)
        }
        RecordMetric::LongestDuration => {
            (activity.moving_time_seconds > 0).then_some(f64::from(activity.moving_time_seconds))
        }
        RecordMetric::HighestElevation => {
            (activity.elevation_gain_meters > 0.0).then_some(activity.elevation_gain_meters)
        }
        RecordMetric::FastestPace => activity.pace_seconds_per_meter(),
    }
}

/// Whether `candidate` should supersede the current `holder` for `metric`.
fn supersedes(
    metric: RecordMetric,
    candidate: &ActivityRecord,
    value: f64,
    holder: &ActivityRecord,
    holder_value: f64,
) -> bool {
    let strictly_better = if metric.higher_is_better() {
        value > holder_value
    } else {
        value < holder_value
    };
    if strictly_better {
        return true;
    }
    // Exact tie: earliest activity wins, with the ID as a final
    // deterministic tie-break for identical timestamps.
    value == holder_value
        && (candidate.start_date, candidate.id) < (holder.start_date, holder.id)
}

/// Best value per (sport type, metric) across the full history.
///
/// Pairs with no qualifying activity have no entry. Malformed records
/// are skipped entirely.
pub fn personal_records(
    activities: &[ActivityRecord],
) -> HashMap<(String, RecordMetric), PersonalRecord> {
    let mut best: HashMap<(String, RecordMetric), (&ActivityRecord, f64)> = HashMap::new();

    for activity in activities {
        if !activity.is_well_formed() {
            continue;
        }
        for metric in RecordMetric::ALL {
            let Some(value) = metric_value(activity, metric) else {
                continue;
            };
            let key = (activity.sport_type.clone(), metric);
            let replace = match best.get(&key) {
                Some(&(holder, holder_value)) => {
                    supersedes(metric, activity, value, holder, holder_value)
                }
                None => true,
            };
            if replace {
                best.insert(key, (activity, value));
            }
        }
    }

    best.into_iter()
        .map(|((sport_type, metric), (activity, value))| {
            (
                (sport_type.clone(), metric),
                PersonalRecord {
                    sport_type,
                    metric,
                    value,
                    activity_id: activity.id,
                    achieved_on: activity.start_day(),
                },
            )
        })
        .collect()
}
