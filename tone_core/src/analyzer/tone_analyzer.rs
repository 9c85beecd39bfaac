use serde::Serialize;

use crate::comment::comment::Comment;
use crate::common::tone_exception::ToneError;
use crate::metrics::tone::{kindness, volatility};
use crate::score::accumulator::{DimensionScores, ScoreAccumulator};
use crate::sentiment::oracle::SentimentOracle;

/// Aggregate tone statistics for one comment set.
#[derive(Debug, Clone, Serialize)]
pub struct ToneReport {
    pub comment_count: usize,
    pub average: DimensionScores,
    pub variance: DimensionScores,
    pub weighted_average: DimensionScores,
    pub degenerate_weights: bool,
    pub kindness: f64,
    pub volatility: f64,
}

/// Runs one channel analysis: construct, ingest every comment, take the
/// report, discard. One accumulator per run, no shared state.
pub struct ToneAnalyzer {
    oracle: Box<dyn SentimentOracle>,
    accumulator: ScoreAccumulator,
}

impl ToneAnalyzer {
    pub fn new(oracle: Box<dyn SentimentOracle>) -> Self {
        Self {
            oracle,
            accumulator: ScoreAccumulator::new(),
        }
    }

    pub fn comment_count(&self) -> usize {
        self.accumulator.len()
    }

    /// Score one comment's text and fold it into the accumulator.
    pub fn ingest(&mut self, comment: &Comment) -> Result<(), ToneError> {
        let triple = self.oracle.score(&comment.text);
        self.accumulator
            .add_observation(triple, comment.like_count)
    }

    /// Assemble the final report. Errors with EmptyAccumulator when nothing
    /// has been ingested.
    pub fn report(&self) -> Result<ToneReport, ToneError> {
        let average = self.accumulator.average()?;
        let variance = self.accumulator.variance()?;
        let weighted = self.accumulator.weighted_average()?;

        Ok(ToneReport {
            comment_count: self.accumulator.len(),
            average,
            variance,
            weighted_average: weighted.scores,
            degenerate_weights: weighted.degenerate_weights,
            kindness: kindness(&weighted.scores),
            volatility: volatility(&weighted.scores),
        })
    }
}
