//! Text tokenization into sentence, word, letter and digit counts

use super::sentence::split_sentences;
use regex::Regex;
use std::sync::LazyLock;

/// A word is a run of letters or digits, optionally joined by an internal
/// apostrophe or hyphen ("don't", "well-known")
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*").expect("invalid regex")
});

/// Aggregate counts produced by tokenizing a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCounts {
    /// Number of sentence segments
    pub sentences: usize,
    /// Number of word tokens across all sentences
    pub words: usize,
    /// Number of ASCII letters [a-zA-Z]
    pub letters: usize,
    /// Number of ASCII digits [0-9]
    pub digits: usize,
}

/// Trait for turning raw text into counts
///
/// The pipeline holds a `&dyn Tokenizer` so alternative segmenters (or
/// instrumented ones) can be swapped in.
pub trait Tokenizer: Send + Sync {
    /// Get the name of this tokenizer (used for debugging)
    fn name(&self) -> &'static str;

    /// Count sentences, words, letters and digits in `text`
    fn tokenize(&self, text: &str) -> TextCounts;
}

/// Rule-based English tokenizer
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishTokenizer;

impl EnglishTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for EnglishTokenizer {
    fn name(&self) -> &'static str {
        "english"
    }

    fn tokenize(&self, text: &str) -> TextCounts {
        // A line break never splits a sentence on its own
        let normalized = text.replace(['\r', '\n'], " ");
        let sentences = split_sentences(&normalized);

        let words = sentences.iter().map(|s| count_words(s)).sum();
        let (letters, digits) = count_letters_and_digits(text);

        TextCounts {
            sentences: sentences.len(),
            words,
            letters,
            digits,
        }
    }
}

/// Count word tokens in a single sentence
pub fn count_words(sentence: &str) -> usize {
    WORD_REGEX.find_iter(sentence).count()
}

/// Count ASCII letters and ASCII digits in one pass
pub fn count_letters_and_digits(text: &str) -> (usize, usize) {
    text.bytes().fold((0, 0), |(letters, digits), b| {
        if b.is_ascii_alphabetic() {
            (letters + 1, digits)
        } else if b.is_ascii_digit() {
            (letters, digits + 1)
        } else {
            (letters, digits)
        }
    })
}
