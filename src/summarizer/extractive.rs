/*!
 * Extractive summarization.
 *
 * Used as the fallback when the remote summarizer is unavailable. The output
 * contract matches the remote path: a single string, so callers can swap one
 * for the other.
 */

use std::fmt;

use super::scoring::{rank_sentences, WordFrequencies};
use super::tokenizer::eligible_sentences;

/// Separator placed between selected sentences
pub const SENTENCE_SEPARATOR: &str = ". ";

/// Terminator appended once at the end of every summary
pub const SUMMARY_TERMINATOR: char = '.';

/// Selected sentences plus their style prefix, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Literal label placed before the sentences
    pub prefix: String,
    /// Selected sentences, highest score first
    pub sentences: Vec<String>,
}

impl Summary {
    /// Number of selected sentences
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.prefix,
            self.sentences.join(SENTENCE_SEPARATOR),
            SUMMARY_TERMINATOR
        )
    }
}

/// Select the `target_sentence_count` most important sentences of `document`.
///
/// The count is clamped to the number of eligible sentences. Sentences are
/// ordered by descending score, ties in document order.
pub fn extract(document: &str, target_sentence_count: usize, style_prefix: &str) -> Summary {
    let sentences = eligible_sentences(document);
    if sentences.is_empty() {
        return Summary {
            prefix: style_prefix.to_string(),
            sentences: Vec::new(),
        };
    }

    let frequencies = WordFrequencies::from_document(document);
    let take = target_sentence_count.min(sentences.len());

    let selected = rank_sentences(&sentences, &frequencies)
        .into_iter()
        .take(take)
        .map(|scored| scored.text.to_string())
        .collect();

    Summary {
        prefix: style_prefix.to_string(),
        sentences: selected,
    }
}

/// Summarize `document` into at most `target_sentence_count` sentences.
///
/// Never fails: a document with no eligible sentences yields the prefix
/// followed by a single `.`.
pub fn summarize(document: &str, target_sentence_count: usize, style_prefix: &str) -> String {
    extract(document, target_sentence_count, style_prefix).to_string()
}
