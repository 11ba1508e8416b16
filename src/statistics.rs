/*!
 * Statistics shown alongside a summary: sizes, compression and reading time.
 */

use std::fmt;
use std::time::Duration;

use crate::summarizer::tokenizer::word_count;

/// Assumed reading speed for the reading time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Size and timing statistics for one summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Words in the original text
    pub original_words: usize,
    /// Characters in the original text
    pub original_chars: usize,
    /// Words in the summary
    pub summary_words: usize,
    /// Characters in the summary
    pub summary_chars: usize,
    /// Percentage of words removed, rounded
    pub compression_ratio: i64,
    /// Minutes needed to read the summary, rounded up
    pub reading_time_minutes: usize,
    /// Time spent producing the summary
    pub processing_time: Duration,
}

impl SummaryStats {
    /// Compute statistics for a summary of `original`
    pub fn compute(original: &str, summary: &str, processing_time: Duration) -> Self {
        let original_words = word_count(original);
        let summary_words = word_count(summary);

        let compression_ratio = if original_words == 0 {
            0
        } else {
            ((1.0 - summary_words as f64 / original_words as f64) * 100.0).round() as i64
        };

        Self {
            original_words,
            original_chars: original.chars().count(),
            summary_words,
            summary_chars: summary.chars().count(),
            compression_ratio,
            reading_time_minutes: summary_words.div_ceil(WORDS_PER_MINUTE),
            processing_time,
        }
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compression: {}%", self.compression_ratio)?;
        writeln!(f, "Reading time: {} min", self.reading_time_minutes)?;
        writeln!(
            f,
            "Original: {} words, {} chars",
            format_number(self.original_words),
            format_number(self.original_chars)
        )?;
        writeln!(
            f,
            "Summary: {} words, {} chars",
            format_number(self.summary_words),
            format_number(self.summary_chars)
        )?;
        write!(f, "Processing time: {:.1}s", self.processing_time.as_secs_f64())
    }
}

/// Format a count with `,` thousands separators
pub fn format_number(value: usize) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
