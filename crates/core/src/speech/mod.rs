//! Speech quality scoring from lexical counts and a response duration.

use crate::lexical::LexicalCounts;
use crate::score::round_half_away;
use serde::{Deserialize, Serialize};
use std::fmt;

const CLARITY_BASELINE: f64 = 70.0;
const FILLER_PENALTY_PER_WORD: f64 = 2.0;
const FILLER_PENALTY_CAP: f64 = 25.0;
const PAUSE_PENALTY_PER_PAUSE: f64 = 1.5;
const PAUSE_PENALTY_CAP: f64 = 15.0;
const LENGTH_BONUS_WORDS_PER_POINT: f64 = 10.0;
const LENGTH_BONUS_CAP: f64 = 10.0;

pub const PACE_FAST_WPM: u32 = 180;
pub const PACE_SLOW_WPM: u32 = 120;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClarityLabel {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "needs improvement")]
    NeedsImprovement,
}

impl ClarityLabel {
    pub fn from_score(clarity_score: f64) -> Self {
        if clarity_score > 80.0 {
            Self::Excellent
        } else if clarity_score > 60.0 {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::NeedsImprovement => "needs improvement",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaceLabel {
    #[serde(rename = "too fast")]
    TooFast,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "too slow")]
    TooSlow,
}

impl PaceLabel {
    pub fn from_rate(speech_rate_wpm: u32) -> Self {
        if speech_rate_wpm > PACE_FAST_WPM {
            Self::TooFast
        } else if speech_rate_wpm < PACE_SLOW_WPM {
            Self::TooSlow
        } else {
            Self::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooFast => "too fast",
            Self::Good => "good",
            Self::TooSlow => "too slow",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FluencyLabel {
    #[serde(rename = "fluent")]
    Fluent,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "needs work")]
    NeedsWork,
}

impl FluencyLabel {
    pub fn from_fillers(filler_word_count: u32) -> Self {
        if filler_word_count < 3 {
            Self::Fluent
        } else if filler_word_count < 6 {
            Self::Moderate
        } else {
            Self::NeedsWork
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fluent => "fluent",
            Self::Moderate => "moderate",
            Self::NeedsWork => "needs work",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(ClarityLabel, PaceLabel, FluencyLabel);

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoiceQuality {
    pub clarity: ClarityLabel,
    pub pace: PaceLabel,
    pub fluency: FluencyLabel,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeechMetrics {
    pub word_count: u32,
    pub filler_word_count: u32,
    pub speech_rate_wpm: u32,
    pub pause_count: u32,
    pub clarity_score: f64,
    pub duration_seconds: f64,
    pub voice_quality: VoiceQuality,
}

/// Derives the full metric record. `duration_seconds` must already be
/// validated as positive and finite; the engine rejects anything else before
/// reaching this point.
pub fn score(counts: LexicalCounts, duration_seconds: f64) -> SpeechMetrics {
    let speech_rate_wpm = speech_rate_wpm(counts.word_count, duration_seconds);
    let clarity_score = clarity_score(&counts);

    let voice_quality = VoiceQuality {
        clarity: ClarityLabel::from_score(clarity_score),
        pace: PaceLabel::from_rate(speech_rate_wpm),
        fluency: FluencyLabel::from_fillers(counts.filler_word_count),
    };

    tracing::debug!(
        speech_rate_wpm,
        clarity_score,
        clarity = %voice_quality.clarity,
        pace = %voice_quality.pace,
        fluency = %voice_quality.fluency,
        "speech scored"
    );

    SpeechMetrics {
        word_count: counts.word_count,
        filler_word_count: counts.filler_word_count,
        speech_rate_wpm,
        pause_count: counts.pause_count,
        clarity_score,
        duration_seconds,
        voice_quality,
    }
}

pub fn speech_rate_wpm(word_count: u32, duration_seconds: f64) -> u32 {
    if !(duration_seconds.is_finite() && duration_seconds > 0.0) {
        return 0;
    }
    let rate = round_half_away(f64::from(word_count) / duration_seconds * 60.0);
    u32::try_from(rate.max(0)).unwrap_or(u32::MAX)
}

pub fn clarity_score(counts: &LexicalCounts) -> f64 {
    let filler_penalty =
        (f64::from(counts.filler_word_count) * FILLER_PENALTY_PER_WORD).min(FILLER_PENALTY_CAP);
    let pause_penalty =
        (f64::from(counts.pause_count) * PAUSE_PENALTY_PER_PAUSE).min(PAUSE_PENALTY_CAP);
    let length_bonus =
        (f64::from(counts.word_count) / LENGTH_BONUS_WORDS_PER_POINT).min(LENGTH_BONUS_CAP);

    (CLARITY_BASELINE - filler_penalty - pause_penalty + length_bonus).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(word_count: u32, filler_word_count: u32, pause_count: u32) -> LexicalCounts {
        LexicalCounts {
            word_count,
            filler_word_count,
            pause_count,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_counts_score_the_baseline() {
        let m = score(LexicalCounts::default(), 60.0);
        assert_eq!(m.word_count, 0);
        assert_eq!(m.speech_rate_wpm, 0);
        assert!(approx(m.clarity_score, 70.0));
        assert_eq!(m.voice_quality.clarity, ClarityLabel::Good);
        assert_eq!(m.voice_quality.pace, PaceLabel::TooSlow);
        assert_eq!(m.voice_quality.fluency, FluencyLabel::Fluent);
    }

    #[test]
    fn speech_rate_scales_to_minutes_and_rounds_ties_up() {
        assert_eq!(speech_rate_wpm(150, 60.0), 150);
        assert_eq!(speech_rate_wpm(5, 4.0), 75);
        // 1 word in 8 s is exactly 7.5 wpm
        assert_eq!(speech_rate_wpm(1, 8.0), 8);
        assert_eq!(speech_rate_wpm(10, 0.0), 0);
    }

    #[test]
    fn penalties_and_bonus_are_capped() {
        assert!(approx(clarity_score(&counts(18, 2, 0)), 67.8));
        // 25 filler cap, 15 pause cap, 10 bonus cap
        assert!(approx(clarity_score(&counts(1000, 100, 100)), 40.0));
        assert!(approx(clarity_score(&counts(500, 0, 0)), 80.0));
        assert!(approx(clarity_score(&counts(0, 13, 11)), 30.0));
    }

    #[test]
    fn clarity_score_stays_in_range() {
        for words in [0, 5, 50, 5000] {
            for fillers in [0, 3, 40] {
                for pauses in [0, 4, 40] {
                    let s = clarity_score(&counts(words, fillers, pauses));
                    assert!((0.0..=100.0).contains(&s));
                }
            }
        }
    }

    #[test]
    fn labels_resolve_boundaries_toward_calmer_label() {
        assert_eq!(ClarityLabel::from_score(80.0), ClarityLabel::Good);
        assert_eq!(ClarityLabel::from_score(80.1), ClarityLabel::Excellent);
        assert_eq!(ClarityLabel::from_score(60.0), ClarityLabel::NeedsImprovement);

        assert_eq!(PaceLabel::from_rate(180), PaceLabel::Good);
        assert_eq!(PaceLabel::from_rate(181), PaceLabel::TooFast);
        assert_eq!(PaceLabel::from_rate(120), PaceLabel::Good);
        assert_eq!(PaceLabel::from_rate(119), PaceLabel::TooSlow);

        assert_eq!(FluencyLabel::from_fillers(2), FluencyLabel::Fluent);
        assert_eq!(FluencyLabel::from_fillers(3), FluencyLabel::Moderate);
        assert_eq!(FluencyLabel::from_fillers(5), FluencyLabel::Moderate);
        assert_eq!(FluencyLabel::from_fillers(6), FluencyLabel::NeedsWork);
    }

    #[test]
    fn labels_serialize_as_display_strings() {
        let quality = VoiceQuality {
            clarity: ClarityLabel::NeedsImprovement,
            pace: PaceLabel::TooFast,
            fluency: FluencyLabel::NeedsWork,
        };
        let json = serde_json::to_value(quality).expect("serializes");
        assert_eq!(json["clarity"], "needs improvement");
        assert_eq!(json["pace"], "too fast");
        assert_eq!(json["fluency"], "needs work");
        assert_eq!(PaceLabel::TooSlow.to_string(), "too slow");
    }
}
