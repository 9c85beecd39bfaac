pub mod analyzer;
pub mod comment;
pub mod common;
pub mod metrics;
pub mod score;
pub mod sentiment;

pub use analyzer::tone_analyzer::{ToneAnalyzer, ToneReport};
pub use comment::comment::Comment;
pub use score::accumulator::ScoreAccumulator;
pub use sentiment::oracle::{SentimentOracle, SentimentTriple};
