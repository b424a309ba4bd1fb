use strength_core::config::FactorWeights;
use strength_core::constants::{BASE_INCREASE_CEILING, BASE_INCREASE_FLOOR, BASE_INCREASE_RANGE};
use strength_core::models::MemoryStrengthFactors;

/// Combine the factors into a base increase using the default weights.
///
/// ```text
/// weightedScore = Σ weightᵢ × factorᵢ / 100
/// baseIncrease  = 0.5 + weightedScore × 3.5
/// ```
///
/// Result is clamped to [0.5, 4.0]. All-zero factors give exactly 0.5.
pub fn aggregate(factors: &MemoryStrengthFactors) -> f64 {
    aggregate_with(factors, &FactorWeights::default())
}

/// Combine the factors with explicit weights. Weights are expected to have
/// passed [`FactorWeights::validate`]; the clamp keeps the result in range
/// regardless.
pub fn aggregate_with(factors: &MemoryStrengthFactors, weights: &FactorWeights) -> f64 {
    let weighted = weights.weighted_score(factors);
    (BASE_INCREASE_FLOOR + weighted * BASE_INCREASE_RANGE)
        .clamp(BASE_INCREASE_FLOOR, BASE_INCREASE_CEILING)
}

/// Per-factor contributions for debugging/observability.
#[derive(Debug, Clone)]
pub struct AggregateBreakdown {
    /// `(factor name, weight × factor / 100)` in declaration order.
    pub contributions: Vec<(&'static str, f64)>,
    pub weighted_score: f64,
    pub base_increase: f64,
}

/// Aggregate with a full breakdown of each factor's contribution.
pub fn aggregate_breakdown(
    factors: &MemoryStrengthFactors,
    weights: &FactorWeights,
) -> AggregateBreakdown {
    let contributions = MemoryStrengthFactors::NAMES
        .iter()
        .zip(weights.values())
        .zip(factors.values())
        .map(|((name, w), f)| (*name, w * f / 100.0))
        .collect();

    AggregateBreakdown {
        contributions,
        weighted_score: weights.weighted_score(factors),
        base_increase: aggregate_with(factors, weights),
    }
}
