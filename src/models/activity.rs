// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity record model consumed by the derivation engine.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One logged exercise session, supplied by the ingestion collaborator.
///
/// The engine only reads these; creation and updates happen upstream on
/// sync. Timestamps are local and timezone-naive by contract; the engine
/// performs no timezone conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Activity ID (assigned by the ingestion source)
    pub id: u64,
    /// Owning user ID
    pub user_id: u64,
    /// Activity name/title
    pub name: String,
    /// Sport type (free-form: "Run", "Ride", "Swim", ...)
    pub sport_type: String,
    /// Start date/time (local, naive)
    pub start_date: NaiveDateTime,
    /// Distance in meters
    pub distance_meters: f64,
    /// Moving time in seconds
    pub moving_time_seconds: u32,
    /// Elevation gain in meters
    pub elevation_gain_meters: f64,
    /// Average speed in m/s (0.0 means pace unknown)
    pub average_speed: f64,
    /// Calories burned
    pub calories: f64,
}

impl ActivityRecord {
    /// Calendar day the activity started on.
    pub fn start_day(&self) -> NaiveDate {
        self.start_date.date()
    }

    /// Whether the record satisfies the non-negativity invariants.
    ///
    /// Malformed records are excluded from reductions rather than
    /// aborting a whole computation.
    pub fn is_well_formed(&self) -> bool {
        self.distance_meters >= 0.0 && self.elevation_gain_meters >= 0.0
    }

    /// Pace in seconds per meter (moving time / distance), lower is better.
    ///
    /// Returns `None` for activities with zero distance or unknown speed,
    /// which do not qualify for pace-based comparisons.
    pub fn pace_seconds_per_meter(&self) -> Option<f64> {
        if self.distance_meters > 0.0 && self.average_speed > 0.0 {
            Some(f64::from(self.moving_time_seconds) / self.distance_meters)
        } else {
            None
        }
    }
}
