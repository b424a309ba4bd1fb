use strength_core::config::FactorWeights;
use strength_core::models::{FactorScore, MemoryStrengthFactors};
use strength_scoring::aggregate::*;

fn factors(values: [f64; 8]) -> MemoryStrengthFactors {
    MemoryStrengthFactors {
        consistency: FactorScore::new(values[0]),
        activity_count: FactorScore::new(values[1]),
        recent_activity: FactorScore::new(values[2]),
        engagement_depth: FactorScore::new(values[3]),
        activity_diversity: FactorScore::new(values[4]),
        progress_streak: FactorScore::new(values[5]),
        challenge_level: FactorScore::new(values[6]),
        social_engagement: FactorScore::new(values[7]),
    }
}

#[test]
fn all_zero_factors_hit_the_floor_exactly() {
    assert_eq!(aggregate(&MemoryStrengthFactors::zero()), 0.5);
}

#[test]
fn all_full_factors_hit_the_ceiling() {
    let result = aggregate(&MemoryStrengthFactors::full());
    assert!((result - 4.0).abs() < 1e-9, "got {result}");
    assert!(result <= 4.0);
}

#[test]
fn single_memory_scenario() {
    let f = factors([100.0, 2.0, 98.0, 100.0, 12.5, 0.0, 0.0, 0.0]);
    let result = aggregate(&f);
    assert!((result - 2.11525).abs() < 1e-9, "got {result}");
}

#[test]
fn custom_weights_change_the_result() {
    let only_recency = FactorWeights {
        consistency: 0.0,
        activity_count: 0.0,
        recent_activity: 1.0,
        engagement_depth: 0.0,
        activity_diversity: 0.0,
        progress_streak: 0.0,
        challenge_level: 0.0,
        social_engagement: 0.0,
    };
    only_recency.validate().unwrap();
    let f = factors([100.0, 100.0, 50.0, 100.0, 100.0, 100.0, 100.0, 100.0]);
    assert!((aggregate_with(&f, &only_recency) - 2.25).abs() < 1e-9);
}

#[test]
fn unnormalized_weights_are_still_clamped() {
    let heavy = FactorWeights {
        consistency: 5.0,
        ..FactorWeights::default()
    };
    assert_eq!(aggregate_with(&MemoryStrengthFactors::full(), &heavy), 4.0);
}

#[test]
fn breakdown_contributions_sum_to_weighted_score() {
    let f = factors([100.0, 2.0, 98.0, 100.0, 12.5, 0.0, 0.0, 0.0]);
    let breakdown = aggregate_breakdown(&f, &FactorWeights::default());

    assert_eq!(breakdown.contributions.len(), 8);
    assert_eq!(breakdown.contributions[0].0, "consistency");
    assert!((breakdown.contributions[0].1 - 0.15).abs() < 1e-12);

    let total: f64 = breakdown.contributions.iter().map(|(_, c)| c).sum();
    assert!((total - breakdown.weighted_score).abs() < 1e-12);
    assert!((breakdown.weighted_score - 0.4615).abs() < 1e-9);
    assert_eq!(breakdown.base_increase, aggregate(&f));
}
