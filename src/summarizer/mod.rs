/*!
 * Local extractive summarizer.
 *
 * This module contains the pure, synchronous fallback summarizer:
 * - `tokenizer`: sentence and word segmentation
 * - `scoring`: word-frequency scoring and stable ranking
 * - `extractive`: sentence selection and summary rendering
 */

pub mod extractive;
pub mod scoring;
pub mod tokenizer;

pub use extractive::{extract, summarize, Summary};
pub use scoring::{rank_sentences, score_sentence, ScoredSentence, WordFrequencies, SIGNIFICANT_WORDS};
pub use tokenizer::{eligible_sentences, split_sentences, tokenize_words};
