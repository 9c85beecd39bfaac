use serde::{Deserialize, Serialize};

/// Polarity scores for one text, nominally summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentTriple {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentTriple {
    pub fn new(positive: f64, neutral: f64, negative: f64) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    /// Fully neutral score, used for texts that carry no polarity signal.
    pub fn neutral_unit() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// All components finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.positive, self.neutral, self.negative]
            .iter()
            .all(|c| c.is_finite() && *c >= 0.0)
    }
}

/// Scoring backend for comment texts.
///
/// Injected as a strategy so analysis runs can swap the real scorer for
/// deterministic fixtures in tests.
pub trait SentimentOracle {
    fn score(&self, text: &str) -> SentimentTriple;
}
