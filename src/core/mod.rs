//! Core data structures and algorithms for readability scoring

pub mod hash;
pub mod metrics;
pub mod pipeline;
pub mod record;
pub mod sentence;
pub mod tokenizer;

pub use pipeline::{Analysis, Analyzer};
pub use record::MetricsRecord;
pub use tokenizer::EnglishTokenizer;
