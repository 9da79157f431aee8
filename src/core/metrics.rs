//! Readability formulas
//!
//! Both functions divide by `words`, and the ARI also divides by
//! `sentences`. Callers must guarantee both are non-zero; `MetricsRecord`
//! enforces this before calling in.

/// Coleman-Liau: weight of letters per 100 words
pub const CLI_LETTER_WEIGHT: f64 = 0.0588;
/// Coleman-Liau: weight of sentences per 100 words
pub const CLI_SENTENCE_WEIGHT: f64 = 0.296;
/// Coleman-Liau: constant offset
pub const CLI_OFFSET: f64 = 15.8;

/// ARI: weight of characters per word
pub const ARI_CHAR_WEIGHT: f64 = 4.71;
/// ARI: weight of words per sentence
pub const ARI_WORD_WEIGHT: f64 = 0.5;
/// ARI: constant offset
pub const ARI_OFFSET: f64 = 21.43;

/// Compute the Coleman-Liau index
pub fn coleman_liau(letters: usize, words: usize, sentences: usize) -> f64 {
    let letters = letters as f64;
    let words = words as f64;
    let sentences = sentences as f64;

    CLI_LETTER_WEIGHT * (letters * 100.0 / words)
        - CLI_SENTENCE_WEIGHT * (sentences * 100.0 / words)
        - CLI_OFFSET
}

/// Compute the Automated Readability Index
pub fn automated_readability_index(
    letters: usize,
    digits: usize,
    words: usize,
    sentences: usize,
) -> f64 {
    let characters = (letters + digits) as f64;
    let words = words as f64;
    let sentences = sentences as f64;

    ARI_CHAR_WEIGHT * (characters / words) + ARI_WORD_WEIGHT * (words / sentences) - ARI_OFFSET
}
