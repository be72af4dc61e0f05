//! Lexical metrics over a raw transcript string.
//!
//! Word count comes from whitespace tokenization of the lower-cased text.
//! Filler and pause counts are regex matches over the original text, so
//! punctuation next to a filler ("Um,") still counts as a word boundary.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Filler expressions penalized by the clarity score. Multi-word entries match
/// with a single literal space between the words.
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "ah", "er", "hm", "hmm", "like", "you know", "so", "well", "actually",
    "basically", "kind of", "sort of", "i mean", "you see", "right", "okay", "alright",
    "yeah", "yes", "no",
];

static FILLER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FILLER_WORDS
        .iter()
        .map(|filler| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(filler)))
                .expect("escaped filler literal is a valid pattern")
        })
        .collect()
});

// Runs of dots, runs of commas, or long whitespace gaps.
static PAUSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.{2,}|,{2,}|\s{3,}").expect("pause pattern is valid")
});

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LexicalCounts {
    pub word_count: u32,
    pub filler_word_count: u32,
    pub pause_count: u32,
}

/// Whitespace-only input carries no speech, so every count is zero even
/// though a long blank run would otherwise register as a pause.
pub fn extract(transcript: &str) -> LexicalCounts {
    if transcript.trim().is_empty() {
        return LexicalCounts::default();
    }

    let counts = LexicalCounts {
        word_count: count_words(transcript),
        filler_word_count: count_fillers(transcript),
        pause_count: count_pauses(transcript),
    };

    tracing::debug!(
        words = counts.word_count,
        fillers = counts.filler_word_count,
        pauses = counts.pause_count,
        "lexical metrics extracted"
    );

    counts
}

pub fn count_words(transcript: &str) -> u32 {
    saturating_u32(transcript.to_lowercase().split_whitespace().count())
}

/// Sums matches of every filler entry independently; a span matched by one
/// entry never suppresses a match by another.
pub fn count_fillers(transcript: &str) -> u32 {
    let total: usize = FILLER_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(transcript).count())
        .sum();
    saturating_u32(total)
}

pub fn count_pauses(transcript: &str) -> u32 {
    saturating_u32(PAUSE_PATTERN.find_iter(transcript).count())
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
