pub mod tone_analyzer;
