use serde::Serialize;

use crate::common::rounding::round3;
use crate::common::tone_exception::{ErrCode, ToneError};
use crate::sentiment::oracle::SentimentTriple;

/// One aggregate value per sentiment dimension, rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Weighted average result, flagged when the degenerate-weight fallback fired.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeightedScores {
    pub scores: DimensionScores,
    pub degenerate_weights: bool,
}

/// Accumulates per-comment sentiment triples and their engagement weights.
///
/// Holds one history per dimension plus a parallel weight history; index i
/// across the four vectors refers to the same observation. Queries recompute
/// from the full history every call, nothing is cached.
#[derive(Debug, Default)]
pub struct ScoreAccumulator {
    pos_scores: Vec<f64>,
    neu_scores: Vec<f64>,
    neg_scores: Vec<f64>,
    weights: Vec<u64>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pos_scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos_scores.is_empty()
    }

    /// Record one comment's triple with multiplicative weight `like_count + 1`,
    /// so a comment with zero likes still carries weight 1.
    ///
    /// Rejects triples with negative or non-finite components without recording
    /// anything.
    pub fn add_observation(
        &mut self,
        triple: SentimentTriple,
        like_count: u32,
    ) -> Result<(), ToneError> {
        if !triple.is_valid() {
            return Err(ToneError::new(
                format!(
                    "sentiment triple has a negative or non-finite component: {:?}",
                    triple
                ),
                ErrCode::InvalidInput,
            ));
        }

        self.pos_scores.push(triple.positive);
        self.neu_scores.push(triple.neutral);
        self.neg_scores.push(triple.negative);
        self.weights.push(u64::from(like_count) + 1);
        Ok(())
    }

    /// Unweighted arithmetic mean per dimension.
    pub fn average(&self) -> Result<DimensionScores, ToneError> {
        if self.is_empty() {
            return Err(ToneError::new(
                "no observations recorded",
                ErrCode::EmptyAccumulator,
            ));
        }

        let n = self.pos_scores.len() as f64;
        Ok(DimensionScores {
            positive: round3(self.pos_scores.iter().sum::<f64>() / n),
            neutral: round3(self.neu_scores.iter().sum::<f64>() / n),
            negative: round3(self.neg_scores.iter().sum::<f64>() / n),
        })
    }

    /// Population variance per dimension (divisor = count).
    pub fn variance(&self) -> Result<DimensionScores, ToneError> {
        let mu = self.average()?;

        fn var(scores: &[f64], mean: f64) -> f64 {
            scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64
        }

        Ok(DimensionScores {
            positive: round3(var(&self.pos_scores, mu.positive)),
            neutral: round3(var(&self.neu_scores, mu.neutral)),
            negative: round3(var(&self.neg_scores, mu.negative)),
        })
    }

    /// Like-weighted average per dimension: sum(score_i * weight_i) / sum(weights).
    ///
    /// A zero weight sum cannot happen through `add_observation` (weights are
    /// likes + 1), but misuse is recovered rather than crashing a long run: the
    /// unweighted average is returned with `degenerate_weights` set and a
    /// warning logged.
    pub fn weighted_average(&self) -> Result<WeightedScores, ToneError> {
        if self.is_empty() {
            return Err(ToneError::new(
                "no observations recorded",
                ErrCode::EmptyAccumulator,
            ));
        }

        let total_weight: u64 = self.weights.iter().sum();
        if total_weight == 0 {
            log::warn!(
                "weight history is degenerate (sum = 0); falling back to the unweighted average"
            );
            return Ok(WeightedScores {
                scores: self.average()?,
                degenerate_weights: true,
            });
        }

        let total = total_weight as f64;
        let weighted = |scores: &[f64]| -> f64 {
            scores
                .iter()
                .zip(&self.weights)
                .map(|(s, &w)| s * w as f64)
                .sum::<f64>()
                / total
        };

        Ok(WeightedScores {
            scores: DimensionScores {
                positive: round3(weighted(&self.pos_scores)),
                neutral: round3(weighted(&self.neu_scores)),
                negative: round3(weighted(&self.neg_scores)),
            },
            degenerate_weights: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(acc: &mut ScoreAccumulator, observations: &[(f64, f64, f64, u32)]) {
        for &(p, z, n, likes) in observations {
            acc.add_observation(SentimentTriple::new(p, z, n), likes)
                .unwrap();
        }
    }

    #[test]
    fn test_empty_queries_fail() {
        let acc = ScoreAccumulator::new();
        assert_eq!(
            acc.average().unwrap_err().errcode,
            ErrCode::EmptyAccumulator
        );
        assert_eq!(
            acc.variance().unwrap_err().errcode,
            ErrCode::EmptyAccumulator
        );
        assert_eq!(
            acc.weighted_average().unwrap_err().errcode,
            ErrCode::EmptyAccumulator
        );
    }

    #[test]
    fn test_invalid_triple_rejected() {
        let mut acc = ScoreAccumulator::new();
        let err = acc
            .add_observation(SentimentTriple::new(-0.1, 0.8, 0.3), 2)
            .unwrap_err();
        assert_eq!(err.errcode, ErrCode::InvalidInput);
        // all-or-nothing: nothing was recorded
        assert!(acc.is_empty());

        let err = acc
            .add_observation(SentimentTriple::new(f64::NAN, 0.5, 0.5), 0)
            .unwrap_err();
        assert_eq!(err.errcode, ErrCode::InvalidInput);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_worked_example() {
        // likes 5/1/0 give weights [6, 2, 1]
        let mut acc = ScoreAccumulator::new();
        fill(
            &mut acc,
            &[
                (0.8, 0.2, 0.0, 5),
                (0.0, 0.3, 0.7, 1),
                (0.1, 0.7, 0.2, 0),
            ],
        );
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.weights, vec![6, 2, 1]);

        let avg = acc.average().unwrap();
        assert_eq!(avg.positive, 0.300);
        assert_eq!(avg.neutral, 0.400);
        assert_eq!(avg.negative, 0.300);

        let wavg = acc.weighted_average().unwrap();
        assert!(!wavg.degenerate_weights);
        // (0.8*6 + 0.0*2 + 0.1*1) / 9 and friends; dimensions sum back to 1.0
        assert_eq!(wavg.scores.positive, 0.544);
        assert_eq!(wavg.scores.neutral, 0.278);
        assert_eq!(wavg.scores.negative, 0.178);
    }

    #[test]
    fn test_variance_non_negative() {
        let mut acc = ScoreAccumulator::new();
        fill(
            &mut acc,
            &[(0.9, 0.1, 0.0, 3), (0.2, 0.5, 0.3, 0), (0.0, 0.1, 0.9, 7)],
        );
        let var = acc.variance().unwrap();
        assert!(var.positive >= 0.0);
        assert!(var.neutral >= 0.0);
        assert!(var.negative >= 0.0);
    }

    #[test]
    fn test_variance_zero_for_identical_observations() {
        let mut acc = ScoreAccumulator::new();
        fill(&mut acc, &[(0.5, 0.3, 0.2, 0), (0.5, 0.3, 0.2, 9)]);
        let var = acc.variance().unwrap();
        assert_eq!(var.positive, 0.0);
        assert_eq!(var.neutral, 0.0);
        assert_eq!(var.negative, 0.0);
    }

    #[test]
    fn test_unit_weights_match_unweighted_average() {
        // zero likes everywhere means every weight is 1
        let mut acc = ScoreAccumulator::new();
        fill(
            &mut acc,
            &[(0.6, 0.4, 0.0, 0), (0.1, 0.5, 0.4, 0), (0.2, 0.2, 0.6, 0)],
        );
        let avg = acc.average().unwrap();
        let wavg = acc.weighted_average().unwrap();
        assert!((wavg.scores.positive - avg.positive).abs() <= 0.001);
        assert!((wavg.scores.neutral - avg.neutral).abs() <= 0.001);
        assert!((wavg.scores.negative - avg.negative).abs() <= 0.001);
    }

    #[test]
    fn test_order_independence() {
        let observations = [
            (0.8, 0.2, 0.0, 5),
            (0.0, 0.3, 0.7, 1),
            (0.1, 0.7, 0.2, 0),
            (0.4, 0.4, 0.2, 12),
        ];
        let mut forward = ScoreAccumulator::new();
        fill(&mut forward, &observations);

        let mut reversed_obs = observations;
        reversed_obs.reverse();
        let mut backward = ScoreAccumulator::new();
        fill(&mut backward, &reversed_obs);

        assert_eq!(forward.average().unwrap(), backward.average().unwrap());
        assert_eq!(forward.variance().unwrap(), backward.variance().unwrap());
        assert_eq!(
            forward.weighted_average().unwrap().scores,
            backward.weighted_average().unwrap().scores
        );
    }

    #[test]
    fn test_weight_monotonicity() {
        // the same strongly-positive triple pulls harder with more likes
        let base = [(0.1, 0.2, 0.7, 2), (0.3, 0.5, 0.2, 4)];
        let pull = (0.9, 0.1, 0.0);

        let mut low = ScoreAccumulator::new();
        fill(&mut low, &base);
        low.add_observation(SentimentTriple::new(pull.0, pull.1, pull.2), 1)
            .unwrap();

        let mut high = ScoreAccumulator::new();
        fill(&mut high, &base);
        high.add_observation(SentimentTriple::new(pull.0, pull.1, pull.2), 50)
            .unwrap();

        assert!(
            high.weighted_average().unwrap().scores.positive
                > low.weighted_average().unwrap().scores.positive
        );
    }

    #[test]
    fn test_degenerate_weights_fall_back_to_average() {
        let mut acc = ScoreAccumulator::new();
        fill(&mut acc, &[(0.6, 0.3, 0.1, 4), (0.2, 0.5, 0.3, 0)]);
        // force the misuse path add_observation cannot produce
        for w in acc.weights.iter_mut() {
            *w = 0;
        }

        let wavg = acc.weighted_average().unwrap();
        assert!(wavg.degenerate_weights);
        assert_eq!(wavg.scores, acc.average().unwrap());
    }

    #[test]
    fn test_queries_are_deterministic() {
        let mut acc = ScoreAccumulator::new();
        fill(&mut acc, &[(0.7, 0.2, 0.1, 3), (0.1, 0.6, 0.3, 8)]);
        assert_eq!(acc.average().unwrap(), acc.average().unwrap());
        assert_eq!(acc.variance().unwrap(), acc.variance().unwrap());
        assert_eq!(
            acc.weighted_average().unwrap().scores,
            acc.weighted_average().unwrap().scores
        );
    }
}
