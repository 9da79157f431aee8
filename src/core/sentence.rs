//! English sentence segmentation
//!
//! A sentence ends at a run of `.`, `!` or `?` (plus any closing quotes or
//! brackets) that is followed by whitespace or the end of the text. A run of
//! periods is not a boundary when:
//! - the next word starts with a lowercase letter
//! - the word before it is a title or reference abbreviation ("Dr.", "e.g.")
//! - the word before it is a name initial ("J. R. R. Tolkien", "John F. Kennedy")
//!
//! Abbreviations that often close a clause ("etc.", "p.m.", "U.S.") end the
//! sentence only when the next word is a common sentence opener ("It", "The").
//!
//! Periods inside tokens ("3.14", "example.com") are never boundaries since
//! they are not followed by whitespace.

/// Abbreviations (lowercase, without the final period) that precede what
/// they modify and so never end a sentence
const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "mx", "dr", "prof", "st", "mt", "ft", "vs", "cf", "e.g", "i.e",
    "approx", "dept", "fig", "no", "gen", "col", "lt", "sgt", "capt", "rev", "hon", "gov",
    "sen", "rep", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec",
];

/// Abbreviations that may sit at the end of a sentence
const CLAUSE_FINAL: &[&str] = &[
    "etc", "al", "inc", "ltd", "co", "corp", "jr", "sr", "a.m", "p.m", "u.s", "u.k",
];

/// Capitalized words (lowercase here) that commonly open a sentence
const SENTENCE_OPENERS: &[&str] = &[
    "a", "after", "also", "an", "and", "as", "at", "before", "but", "by", "for", "he",
    "her", "his", "how", "however", "i", "if", "in", "it", "its", "my", "now", "of", "on",
    "our", "she", "so", "some", "that", "the", "their", "then", "there", "these", "they",
    "this", "those", "to", "we", "what", "when", "where", "which", "while", "who", "why",
    "with", "yes", "you", "your",
];

#[inline]
fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

#[inline]
fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '’' | '”' | '»')
}

#[inline]
fn is_opening(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '{' | '‘' | '“' | '«')
}

/// A single capital letter; a lone "I" is the pronoun
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_uppercase() && c != 'I'
    )
}

/// A whitespace-delimited token of the form "X."
fn is_initial_token(token: &str) -> bool {
    token
        .trim_start_matches(is_opening)
        .strip_suffix('.')
        .is_some_and(is_initial)
}

/// Dotted initialisms such as "U.S.A" or "Ph.D"
fn is_dotted_initialism(word: &str) -> bool {
    word.contains('.')
        && word.split('.').all(|part| {
            !part.is_empty() && part.len() <= 2 && part.chars().all(char::is_alphabetic)
        })
}

fn is_sentence_opener(token: &str) -> bool {
    let word: String = token.chars().take_while(|c| c.is_alphabetic()).collect();
    word.chars().next().is_some_and(char::is_uppercase)
        && SENTENCE_OPENERS.contains(&word.to_lowercase().as_str())
}

/// Decide whether an initial belongs to a name running past the period
fn continues_name(previous: Option<&str>, next: Option<&str>) -> bool {
    if next.is_some_and(is_initial_token) || previous.is_some_and(is_initial_token) {
        return true;
    }

    // "John F. Kennedy" or a sentence that starts with an initial
    let after_name = previous.map_or(true, |p| {
        p.trim_start_matches(is_opening)
            .chars()
            .next()
            .is_some_and(char::is_uppercase)
    });
    after_name && !next.is_some_and(is_sentence_opener)
}

/// Split text into trimmed, non-empty sentence segments
///
/// Callers are expected to have replaced line breaks with spaces already.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        if !is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut j = i;
        while j < chars.len() && is_terminator(chars[j].1) {
            j += 1;
        }
        let only_periods = chars[run_start..j].iter().all(|&(_, c)| c == '.');
        while j < chars.len() && is_closing(chars[j].1) {
            j += 1;
        }

        let end = chars.get(j).map_or(text.len(), |&(offset, _)| offset);
        let followed_by_space = chars.get(j).map_or(true, |&(_, c)| c.is_whitespace());

        if followed_by_space
            && (!only_periods || period_ends_sentence(text, start, chars[run_start].0, end))
        {
            push_segment(&mut sentences, &text[start..end]);
            start = end;
        }

        i = j;
    }

    push_segment(&mut sentences, &text[start..]);
    sentences
}

/// Decide whether a run of periods at `period` (byte offset) closes the sentence
fn period_ends_sentence(text: &str, sentence_start: usize, period: usize, run_end: usize) -> bool {
    let mut before = text[sentence_start..period].split_whitespace().rev();
    let word = before.next().unwrap_or_default().trim_start_matches(is_opening);
    let previous = before.next();
    let next = text[run_end..]
        .split_whitespace()
        .next()
        .map(|t| t.trim_start_matches(is_opening));

    if next.is_some_and(|t| t.chars().next().is_some_and(char::is_lowercase)) {
        return false;
    }

    if is_initial(word) {
        return !continues_name(previous, next);
    }

    let lower = word.to_lowercase();
    if TITLES.contains(&lower.as_str()) {
        return false;
    }
    if CLAUSE_FINAL.contains(&lower.as_str()) || is_dotted_initialism(word) {
        return next.map_or(true, is_sentence_opener);
    }

    true
}

fn push_segment<'a>(sentences: &mut Vec<&'a str>, segment: &'a str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        sentences.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_no_terminator_is_one_sentence() {
        assert_eq!(split_sentences("just some words"), vec!["just some words"]);
    }

    #[test]
    fn test_abbreviation_is_not_boundary() {
        let sentences = split_sentences("Dr. Smith went home. He was tired.");
        assert_eq!(sentences, vec!["Dr. Smith went home.", "He was tired."]);
    }

    #[test]
    fn test_mixed_terminators() {
        let sentences = split_sentences("Is it late? Yes! Go to bed.");
        assert_eq!(sentences, vec!["Is it late?", "Yes!", "Go to bed."]);
    }

    #[test]
    fn test_decimal_number() {
        let sentences = split_sentences("Pi is about 3.14 today. Really.");
        assert_eq!(sentences, vec!["Pi is about 3.14 today.", "Really."]);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let sentences = split_sentences("She said \"stop.\" Then she left.");
        assert_eq!(sentences, vec!["She said \"stop.\"", "Then she left."]);
    }

    #[test]
    fn test_initials() {
        let sentences = split_sentences("J. R. R. Tolkien wrote books. They sold well.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_middle_initial() {
        let sentences = split_sentences("John F. Kennedy was president. He was young.");
        assert_eq!(
            sentences,
            vec!["John F. Kennedy was president.", "He was young."]
        );
    }

    #[test]
    fn test_single_letter_word_ends_sentence() {
        assert_eq!(
            split_sentences("I got an A. It was great."),
            vec!["I got an A.", "It was great."]
        );
        assert_eq!(
            split_sentences("Take vitamin C. It helps."),
            vec!["Take vitamin C.", "It helps."]
        );
        assert_eq!(split_sentences("We chose Plan B. It worked.").len(), 2);
    }

    #[test]
    fn test_clause_final_abbreviation_before_opener() {
        assert_eq!(
            split_sentences("I live in the U.S. It is big."),
            vec!["I live in the U.S.", "It is big."]
        );
        assert_eq!(
            split_sentences("We met at 5 p.m. The show began."),
            vec!["We met at 5 p.m.", "The show began."]
        );
        assert_eq!(split_sentences("Ask Acme Inc. Support for help.").len(), 1);
    }

    #[test]
    fn test_title_never_ends_sentence() {
        assert_eq!(split_sentences("We thanked Dr. The Great for coming.").len(), 1);
        assert_eq!(split_sentences("See Fig. 3 for details. Done.").len(), 2);
    }

    #[test]
    fn test_pronoun_i_ends_sentence() {
        let sentences = split_sentences("So did I. Then we left.");
        assert_eq!(sentences, vec!["So did I.", "Then we left."]);
    }

    #[test]
    fn test_lowercase_continuation() {
        let sentences = split_sentences("Bring fruit, e.g. apples and pears. Thanks... see you.");
        assert_eq!(
            sentences,
            vec!["Bring fruit, e.g. apples and pears.", "Thanks... see you."]
        );
    }

    #[test]
    fn test_dotted_initialism() {
        let sentences = split_sentences("She moved to the U.S.A. last year.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_repeated_terminators() {
        let sentences = split_sentences("What?! No way. Fine.");
        assert_eq!(sentences, vec!["What?!", "No way.", "Fine."]);
    }
}
