use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use strength_core::activity::*;
use strength_core::config::FactorWeights;
use strength_core::models::Strength;
use strength_core::traits::IStrengthScorer;
use strength_scoring::{aggregate, compute_factors, decay, ScoringEngine};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn arb_difficulty() -> impl Strategy<Value = Option<Difficulty>> {
    prop_oneof![
        Just(None),
        Just(Some(Difficulty::Easy)),
        Just(Some(Difficulty::Medium)),
        Just(Some(Difficulty::Hard)),
    ]
}

fn arb_import_source() -> impl Strategy<Value = Option<ImportSource>> {
    prop_oneof![
        Just(None),
        Just(Some(ImportSource::File)),
        Just(Some(ImportSource::Collaboration)),
    ]
}

fn arb_kind() -> impl Strategy<Value = ActivityKind> {
    prop_oneof![
        Just(ActivityKind::MemoryAdded { memory_id: None }),
        arb_import_source().prop_map(|import_source| ActivityKind::MemoryImported {
            memory_id: None,
            import_source,
        }),
        arb_difficulty().prop_map(|difficulty| ActivityKind::GameCompleted {
            game_type: None,
            difficulty,
        }),
        arb_difficulty().prop_map(|difficulty| ActivityKind::MemoryReviewed {
            memory_id: None,
            difficulty,
        }),
        proptest::option::of(0u32..60).prop_map(|streak_days| ActivityKind::DailyLogin { streak_days }),
        arb_difficulty().prop_map(|difficulty| ActivityKind::GamePerfectScore {
            game_type: None,
            difficulty,
        }),
        Just(ActivityKind::MemoryShared { memory_id: None }),
        proptest::option::of(0u32..60)
            .prop_map(|streak_days| ActivityKind::StreakMaintained { streak_days }),
    ]
}

fn arb_activity() -> impl Strategy<Value = Activity> {
    // Up to ~60 days back, a little into the future, values 0–50.
    (arb_kind(), -120i64..86_400, 0.0f64..50.0).prop_map(|(kind, minutes_ago, value)| {
        Activity::new(kind, now() - Duration::minutes(minutes_ago), value)
    })
}

proptest! {
    #[test]
    fn every_factor_is_bounded(activities in prop::collection::vec(arb_activity(), 0..80)) {
        let factors = compute_factors(&activities, now());
        for v in factors.values() {
            prop_assert!((0.0..=100.0).contains(&v), "factor out of range: {}", v);
        }
    }

    #[test]
    fn base_increase_is_bounded(activities in prop::collection::vec(arb_activity(), 0..80)) {
        let result = aggregate(&compute_factors(&activities, now()));
        prop_assert!((0.5..=4.0).contains(&result), "base increase out of range: {}", result);
    }

    #[test]
    fn new_strength_is_bounded(
        previous in 0u8..=100,
        activities in prop::collection::vec(arb_activity(), 0..40),
    ) {
        let engine = ScoringEngine::new();
        let outcome = engine.score(Strength::new(previous), &activities, now());
        prop_assert!(outcome.new_strength.value() <= 100);
        prop_assert!(outcome.decay >= 0.0);
    }

    #[test]
    fn no_decay_within_a_day(previous in 0u8..=100, minutes_ago in 0i64..1440) {
        let a = Activity::new(
            ActivityKind::bare(ActivityType::MemoryAdded),
            now() - Duration::minutes(minutes_ago),
            1.0,
        );
        prop_assert_eq!(decay(Strength::new(previous), &[a], now()), 0.0);
    }

    #[test]
    fn decay_is_monotonic_in_inactivity(
        strength in 0u8..=100,
        hours_a in 0i64..5000,
        hours_b in 0i64..5000,
    ) {
        let (near, far) = if hours_a <= hours_b { (hours_a, hours_b) } else { (hours_b, hours_a) };
        let at = |h: i64| Activity::new(
            ActivityKind::bare(ActivityType::DailyLogin),
            now() - Duration::hours(h),
            1.0,
        );
        let d_near = decay(Strength::new(strength), &[at(near)], now());
        let d_far = decay(Strength::new(strength), &[at(far)], now());
        prop_assert!(d_far >= d_near, "{} < {}", d_far, d_near);
    }

    #[test]
    fn decay_is_monotonic_in_strength(
        s_a in 0u8..=100,
        s_b in 0u8..=100,
        hours in 0i64..5000,
    ) {
        let (low, high) = if s_a <= s_b { (s_a, s_b) } else { (s_b, s_a) };
        let a = Activity::new(
            ActivityKind::bare(ActivityType::DailyLogin),
            now() - Duration::hours(hours),
            1.0,
        );
        let d_low = decay(Strength::new(low), std::slice::from_ref(&a), now());
        let d_high = decay(Strength::new(high), std::slice::from_ref(&a), now());
        prop_assert!(d_high >= d_low, "{} < {}", d_high, d_low);
    }

    #[test]
    fn scoring_is_deterministic(activities in prop::collection::vec(arb_activity(), 0..40)) {
        let first = compute_factors(&activities, now());
        let second = compute_factors(&activities, now());
        prop_assert_eq!(first, second);
        prop_assert_eq!(aggregate(&first).to_bits(), aggregate(&second).to_bits());
    }

    #[test]
    fn modifiers_never_reduce_points(kind in arb_kind()) {
        let points = strength_scoring::points_for(&kind);
        let base = strength_scoring::points::base_points(kind.activity_type());
        prop_assert!(points >= base);
    }
}

#[test]
fn default_weights_sum_to_one() {
    let sum = FactorWeights::default().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}
