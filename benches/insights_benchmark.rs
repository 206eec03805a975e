use activity_insights::achievements::AchievementEvaluator;
use activity_insights::aggregator::weekly_history;
use activity_insights::models::ActivityRecord;
use activity_insights::records::personal_records;
use activity_insights::streaks::compute_streaks;
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Two years of synthetic history: one activity most days, alternating
/// sports, with drifting distances so records keep changing hands.
fn synthetic_history() -> Vec<ActivityRecord> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 3).expect("valid date");
    let sports = ["Run", "Ride", "Swim"];

    (0..730u64)
        .filter(|day| day % 5 != 4) // rest roughly every fifth day
        .map(|day| {
            let date = start + Duration::days(day as i64);
            let sport = sports[(day % 3) as usize];
            let distance = 4000.0 + (day % 17) as f64 * 900.0;
            ActivityRecord {
                id: day + 1,
                user_id: 42,
                name: format!("{} {}", sport, day),
                sport_type: sport.to_string(),
                start_date: date.and_hms_opt(7, 30, 0).expect("valid time"),
                distance_meters: distance,
                moving_time_seconds: 1800 + (day % 11) as u32 * 240,
                elevation_gain_meters: (day % 7) as f64 * 40.0,
                average_speed: 2.5 + (day % 5) as f64 * 0.3,
                calories: distance * 0.06,
            }
        })
        .collect()
}

fn benchmark_insights(c: &mut Criterion) {
    let activities = synthetic_history();
    let evaluator = AchievementEvaluator::default();
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");

    let mut group = c.benchmark_group("derivation_engine");

    group.bench_function("personal_records_2y", |b| {
        b.iter(|| personal_records(black_box(&activities)))
    });

    group.bench_function("weekly_history_52", |b| {
        b.iter(|| {
            weekly_history(black_box(&activities), 52, today).collect::<Vec<_>>()
        })
    });

    group.bench_function("streak_recompute_2y", |b| {
        b.iter(|| compute_streaks(black_box(&activities), today, None))
    });

    group.bench_function("achievement_progress_2y", |b| {
        b.iter(|| evaluator.progress(black_box(&activities)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_insights);
criterion_main!(benches);
