/*!
 * Sentence importance scoring.
 *
 * A sentence scores higher the more its longer words recur across the whole
 * document, with a flat bonus for words from a fixed significance list. The
 * raw score is normalized by the sentence's word count.
 */

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use super::tokenizer::tokenize_words;

/// Words shorter than or equal to this many characters don't contribute frequency
pub const MIN_SIGNIFICANT_WORD_CHARS: usize = 4;

/// Flat bonus for each word found in the significance list
pub const SIGNIFICANCE_BONUS: f64 = 5.0;

/// Words that earn the significance bonus regardless of frequency
pub const SIGNIFICANT_WORDS: [&str; 8] = [
    "important",
    "significant",
    "research",
    "study",
    "found",
    "shows",
    "results",
    "conclusion",
];

static SIGNIFICANT_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SIGNIFICANT_WORDS.iter().copied().collect());

/// Occurrence counts of every lowercase word in a document
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
}

impl WordFrequencies {
    /// Count the lowercase whitespace-delimited words of a document
    pub fn from_document(document: &str) -> Self {
        let mut counts = HashMap::new();
        for word in tokenize_words(document) {
            *counts.entry(word).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of times `word` occurs in the document (exact, already lowercased)
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }
}

/// A sentence paired with its score and position in the document
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'a> {
    /// Trimmed sentence text
    pub text: &'a str,
    /// Normalized importance score
    pub score: f64,
    /// Zero-based position among the eligible sentences
    pub position: usize,
}

/// Whether a lowercase word is in the significance list
pub fn is_significant_word(word: &str) -> bool {
    SIGNIFICANT_WORD_SET.contains(word)
}

/// Score before normalization by word count
pub fn raw_score(words: &[String], frequencies: &WordFrequencies) -> f64 {
    words.iter().fold(0.0, |score, word| {
        let mut contribution = 0.0;
        if word.chars().count() > MIN_SIGNIFICANT_WORD_CHARS {
            contribution += frequencies.count(word) as f64;
        }
        if is_significant_word(word) {
            contribution += SIGNIFICANCE_BONUS;
        }
        score + contribution
    })
}

/// Normalized importance score of one sentence; a sentence without words scores 0
pub fn score_sentence(sentence: &str, frequencies: &WordFrequencies) -> f64 {
    let words = tokenize_words(sentence);
    if words.is_empty() {
        return 0.0;
    }
    raw_score(&words, frequencies) / words.len() as f64
}

/// Score sentences and order them by descending score.
///
/// The sort is stable, so sentences with equal scores keep their document order.
pub fn rank_sentences<'a>(sentences: &[&'a str], frequencies: &WordFrequencies) -> Vec<ScoredSentence<'a>> {
    let mut scored: Vec<ScoredSentence<'a>> = sentences
        .iter()
        .enumerate()
        .map(|(position, &text)| ScoredSentence {
            text,
            score: score_sentence(text, frequencies),
            position,
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}
