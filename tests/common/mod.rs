// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_insights::models::ActivityRecord;
use chrono::{NaiveDate, NaiveDateTime};

/// Initialize test logging once; repeated calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// Shorthand date constructor for fixtures.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// Shorthand timestamp constructor for fixtures.
#[allow(dead_code)]
pub fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).expect("valid fixture time")
}

/// Builder for activity fixtures with sensible defaults.
#[allow(dead_code)]
pub struct ActivityBuilder {
    record: ActivityRecord,
}

#[allow(dead_code)]
impl ActivityBuilder {
    pub fn new(id: u64, sport: &str, day: NaiveDate) -> Self {
        Self {
            record: ActivityRecord {
                id,
                user_id: 42,
                name: format!("Test Activity {}", id),
                sport_type: sport.to_string(),
                start_date: at(day, 8, 0),
                distance_meters: 5000.0,
                moving_time_seconds: 1800,
                elevation_gain_meters: 50.0,
                average_speed: 2.8,
                calories: 300.0,
            },
        }
    }

    pub fn distance(mut self, meters: f64) -> Self {
        self.record.distance_meters = meters;
        self
    }

    pub fn moving_time(mut self, seconds: u32) -> Self {
        self.record.moving_time_seconds = seconds;
        self
    }

    pub fn elevation(mut self, meters: f64) -> Self {
        self.record.elevation_gain_meters = meters;
        self
    }

    pub fn speed(mut self, meters_per_second: f64) -> Self {
        self.record.average_speed = meters_per_second;
        self
    }

    pub fn start(mut self, when: NaiveDateTime) -> Self {
        self.record.start_date = when;
        self
    }

    pub fn build(self) -> ActivityRecord {
        self.record
    }
}

/// A run with the given distance on a day, with defaults elsewhere.
#[allow(dead_code)]
pub fn run(id: u64, day: NaiveDate, distance: f64) -> ActivityRecord {
    ActivityBuilder::new(id, "Run", day).distance(distance).build()
}

/// A ride with the given distance on a day.
#[allow(dead_code)]
pub fn ride(id: u64, day: NaiveDate, distance: f64) -> ActivityRecord {
    ActivityBuilder::new(id, "Ride", day).distance(distance).build()
}
