//! The scoring engine: transcript + duration + emotion samples in, one
//! immutable [`ScoreResult`] out.
//!
//! The engine is synchronous and holds no mutable state; a single
//! [`ScoringEngine`] can be shared across threads and called concurrently.

use crate::emotion::{self, EmotionSample, EmotionSummary};
use crate::feedback::{Feedback, FeedbackGenerator};
use crate::lexical;
use crate::score;
use crate::speech::{self, SpeechMetrics};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub metrics: SpeechMetrics,
    pub emotion_summary: EmotionSummary,
    pub feedback: Feedback,
    pub overall_score: u8,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("invalid input: response duration must be positive and finite, got {0}")]
    InvalidInput(f64),
}

#[derive(Debug, Default)]
pub struct ScoringEngine {
    feedback: FeedbackGenerator,
}

impl ScoringEngine {
    pub fn new(feedback: FeedbackGenerator) -> Self {
        Self { feedback }
    }

    pub fn score_response(
        &self,
        transcript: &str,
        duration_seconds: f64,
        emotion_samples: &[EmotionSample],
    ) -> Result<ScoreResult, ScoreError> {
        if !(duration_seconds.is_finite() && duration_seconds > 0.0) {
            return Err(ScoreError::InvalidInput(duration_seconds));
        }

        let counts = lexical::extract(transcript);
        let metrics = speech::score(counts, duration_seconds);

        let emotion_summary = emotion::aggregate(emotion_samples);
        let positive_affect_ratio = emotion::positive_affect_ratio(emotion_samples);

        let feedback = self
            .feedback
            .generate(&metrics, &emotion_summary, positive_affect_ratio);
        let overall_score =
            score::combine(metrics.clarity_score, emotion_summary.average_confidence);

        tracing::info!(
            words = metrics.word_count,
            clarity_score = metrics.clarity_score,
            average_confidence = emotion_summary.average_confidence,
            overall_score,
            "response scored"
        );

        Ok(ScoreResult {
            metrics,
            emotion_summary,
            feedback,
            overall_score,
        })
    }
}

/// Scores one response with the default rule set.
pub fn score_response(
    transcript: &str,
    duration_seconds: f64,
    emotion_samples: &[EmotionSample],
) -> Result<ScoreResult, ScoreError> {
    ScoringEngine::default().score_response(transcript, duration_seconds, emotion_samples)
}
