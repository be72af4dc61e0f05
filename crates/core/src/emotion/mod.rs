mod source;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use source::{
    EmotionSource, FixedEmotionSource, SeededEmotionSource, DEMO_LABELS, MAX_DEMO_SAMPLES,
};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Neutral,
    Happy,
    Confident,
    Nervous,
    Focused,
    #[serde(alias = "surprise")]
    Surprised,
    Confused,
}

impl EmotionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Confident => "confident",
            Self::Nervous => "nervous",
            Self::Focused => "focused",
            Self::Surprised => "surprised",
            Self::Confused => "confused",
        }
    }

    /// Labels that count toward the positive-affect ratio used for demeanor
    /// feedback.
    pub fn is_positive_affect(&self) -> bool {
        matches!(self, Self::Confident | Self::Happy)
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = EmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neutral" => Ok(Self::Neutral),
            "happy" => Ok(Self::Happy),
            "confident" => Ok(Self::Confident),
            "nervous" => Ok(Self::Nervous),
            "focused" => Ok(Self::Focused),
            "surprised" | "surprise" => Ok(Self::Surprised),
            "confused" => Ok(Self::Confused),
            other => Err(EmotionError::UnknownLabel(other.to_owned())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmotionError {
    #[error("unknown emotion label: {0:?}")]
    UnknownLabel(String),
    #[error("emotion sampling failed: {0}")]
    SamplingFailed(String),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmotionSample {
    pub timestamp: f64,
    #[serde(rename = "emotion")]
    pub label: EmotionLabel,
    pub confidence: f64,
}

impl EmotionSample {
    /// Builds a sample with confidence clamped into `[0, 1]` (non-finite
    /// becomes 0) and negative or non-finite timestamps pinned to 0.
    pub fn new(timestamp: f64, label: EmotionLabel, confidence: f64) -> Self {
        Self {
            timestamp: sanitize_timestamp(timestamp),
            label,
            confidence: clamp_confidence(confidence),
        }
    }

    /// Applies the same clamping as [`EmotionSample::new`] to a sample that
    /// may have come straight from deserialization.
    pub fn sanitized(self) -> Self {
        Self::new(self.timestamp, self.label, self.confidence)
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionSummary {
    /// Mean sample confidence; 0 for an empty sequence.
    pub average_confidence: f64,
}

pub fn aggregate(samples: &[EmotionSample]) -> EmotionSummary {
    if samples.is_empty() {
        return EmotionSummary::default();
    }

    let total: f64 = samples.iter().map(|s| clamp_confidence(s.confidence)).sum();
    let average_confidence = (total / samples.len() as f64).clamp(0.0, 1.0);

    tracing::debug!(
        samples = samples.len(),
        average_confidence,
        "emotion samples aggregated"
    );

    EmotionSummary { average_confidence }
}

/// Share of samples with a positive-affect label; 0 for an empty sequence.
pub fn positive_affect_ratio(samples: &[EmotionSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let positive = samples.iter().filter(|s| s.label.is_positive_affect()).count();
    positive as f64 / samples.len() as f64
}

fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn sanitize_timestamp(timestamp: f64) -> f64 {
    if timestamp.is_finite() {
        timestamp.max(0.0)
    } else {
        0.0
    }
}
