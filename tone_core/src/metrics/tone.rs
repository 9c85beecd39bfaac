use crate::score::accumulator::DimensionScores;

/// Cap returned when the volatility denominator collapses toward zero.
pub const MAX_VOLATILITY: f64 = 1000.0;

/// Net positive-vs-negative tone: (P - N) / (P + N), in roughly [-1, 1].
///
/// +1 is an entirely positive comment set, -1 entirely negative, 0 balanced.
/// A purely neutral weighted average (P = N = 0) returns the 0.0 sentinel so a
/// single flat channel never aborts a batch report.
pub fn kindness(weighted: &DimensionScores) -> f64 {
    let denom = weighted.positive + weighted.negative;
    if denom == 0.0 {
        return 0.0;
    }
    (weighted.positive - weighted.negative) / denom
}

/// How undifferentiated the aggregate signal is: 1 / (Z + |P - N|).
///
/// Large when both neutrality and polarity skew are small, small when either
/// dominates. Clamped to [0, MAX_VOLATILITY]; a zero denominator returns the
/// cap instead of dividing.
pub fn volatility(weighted: &DimensionScores) -> f64 {
    let denom = weighted.neutral + (weighted.positive - weighted.negative).abs();
    if denom <= 1.0 / MAX_VOLATILITY {
        return MAX_VOLATILITY;
    }
    1.0 / denom
}
