pub mod lexicon;
pub mod oracle;
