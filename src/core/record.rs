//! The unit of computation and caching

use super::metrics::{automated_readability_index, coleman_liau};
use super::tokenizer::TextCounts;
use crate::error::{ReadabilityError, Result};
use serde::{Deserialize, Serialize};

/// Counts and scores for one distinct file content
///
/// Built once per fingerprint, either freshly computed or read back from the
/// cache, and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Content hash of the scored file
    pub fingerprint: String,
    pub sentence_count: usize,
    pub word_count: usize,
    pub letter_count: usize,
    pub digit_count: usize,
    /// Coleman-Liau index
    pub coleman_liau: f64,
    /// Automated Readability Index
    pub automated_readability_index: f64,
}

impl MetricsRecord {
    /// Apply both formulas to tokenizer counts
    ///
    /// # Arguments
    /// * `fingerprint` - Content hash of the text
    /// * `counts` - Output of the tokenizer for the text
    /// * `source` - Name of the input, used in the error message
    ///
    /// # Returns
    /// The record, or `DegenerateInput` if the text has no words or no
    /// sentences (the formulas would otherwise yield NaN or infinity)
    pub fn from_counts(fingerprint: String, counts: &TextCounts, source: &str) -> Result<Self> {
        if counts.words == 0 || counts.sentences == 0 {
            return Err(ReadabilityError::DegenerateInput {
                path: source.to_string(),
                words: counts.words,
                sentences: counts.sentences,
            });
        }

        Ok(Self {
            fingerprint,
            sentence_count: counts.sentences,
            word_count: counts.words,
            letter_count: counts.letters,
            digit_count: counts.digits,
            coleman_liau: coleman_liau(counts.letters, counts.words, counts.sentences),
            automated_readability_index: automated_readability_index(
                counts.letters,
                counts.digits,
                counts.words,
                counts.sentences,
            ),
        })
    }

    /// Letters plus digits, reported as the character count
    #[inline]
    pub fn characters(&self) -> usize {
        self.letter_count + self.digit_count
    }
}
