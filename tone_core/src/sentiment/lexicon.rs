use super::oracle::{SentimentOracle, SentimentTriple};

const POSITIVE_WORDS: &[&str] = &[
    "love", "loved", "great", "good", "awesome", "amazing", "best", "cool", "nice",
    "beautiful", "fantastic", "wonderful", "excellent", "brilliant", "perfect",
    "fun", "funny", "helpful", "thanks", "thank", "favorite", "happy", "wow",
    "incredible", "underrated", "legend", "masterpiece",
];

const NEGATIVE_WORDS: &[&str] = &[
    "hate", "hated", "bad", "worst", "awful", "terrible", "horrible", "boring",
    "trash", "garbage", "stupid", "dumb", "annoying", "cringe", "ugly", "wrong",
    "disappointing", "disappointed", "lame", "waste", "overrated", "scam",
    "clickbait", "mid", "sad",
];

/// Keyword-list scorer standing in for the heavyweight sentiment backend.
///
/// Counts positive and negative lexicon hits over the token count and treats the
/// remainder as neutral, so the triple always sums to 1.0. Texts with no tokens
/// score fully neutral.
#[derive(Debug, Default)]
pub struct LexiconOracle;

impl LexiconOracle {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentOracle for LexiconOracle {
    fn score(&self, text: &str) -> SentimentTriple {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return SentimentTriple::neutral_unit();
        }

        let pos_hits = tokens
            .iter()
            .filter(|&&t| POSITIVE_WORDS.contains(&t))
            .count();
        let neg_hits = tokens
            .iter()
            .filter(|&&t| NEGATIVE_WORDS.contains(&t))
            .count();
        let total = tokens.len() as f64;

        SentimentTriple::new(
            pos_hits as f64 / total,
            (tokens.len() - pos_hits - neg_hits) as f64 / total,
            neg_hits as f64 / total,
        )
    }
}
