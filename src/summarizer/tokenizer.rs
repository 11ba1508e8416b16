/*!
 * Sentence and word segmentation for the extractive summarizer.
 *
 * Segmentation is deliberately simple: sentences end at any run of `.`, `!`
 * or `?`, and words are whitespace-delimited, lowercased tokens. Punctuation
 * that is not a sentence terminator (commas, quotes, parentheses) stays
 * attached to its word.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Fragments whose trimmed length is at or below this many characters are
/// discarded before scoring
pub const MIN_SENTENCE_CHARS: usize = 20;

static SENTENCE_TERMINATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+").expect("Invalid sentence terminator regex")
});

/// Split a document into trimmed, non-empty sentence fragments in document order
pub fn split_sentences(document: &str) -> Vec<&str> {
    SENTENCE_TERMINATOR_REGEX
        .split(document)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Whether a trimmed fragment is long enough to be considered a sentence
pub fn is_eligible(sentence: &str) -> bool {
    sentence.trim().chars().count() > MIN_SENTENCE_CHARS
}

/// Split a document into the sentences eligible for scoring, in document order
pub fn eligible_sentences(document: &str) -> Vec<&str> {
    split_sentences(document)
        .into_iter()
        .filter(|sentence| is_eligible(sentence))
        .collect()
}

/// Lowercase whitespace-delimited words of a text
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Number of whitespace-delimited words in a text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
