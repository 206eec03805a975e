// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the derivation engine.

pub mod activity;
pub mod goal;
pub mod record;
pub mod streak;

pub use activity::ActivityRecord;
pub use goal::{Goal, GoalMetric, GoalPeriod, GoalProgress, GoalUpdate};
pub use record::{PersonalRecord, RecordMetric};
pub use streak::StreakState;
