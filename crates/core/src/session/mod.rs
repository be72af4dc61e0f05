use crate::config::CoachConfig;
use crate::emotion::{EmotionError, EmotionSource};
use crate::engine::{ScoreError, ScoreResult, ScoringEngine};
use crate::transcribe::{Transcriber, Transcript, DEMO_TRANSCRIPT};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "session";

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("emotion source failed: {0}")]
    Emotion(#[from] EmotionError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Where the scored transcript came from.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptQuality {
    Transcribed,
    Demo,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub transcript: String,
    pub transcript_quality: TranscriptQuality,
    #[serde(flatten)]
    pub result: ScoreResult,
}

/// Wires an injected transcriber and emotion source into the engine for one
/// practice response.
pub struct InterviewSession<T, E> {
    pub transcriber: T,
    pub emotions: E,
    pub engine: ScoringEngine,
    pub config: CoachConfig,
}

impl<T, E> InterviewSession<T, E>
where
    T: Transcriber,
    E: EmotionSource,
{
    pub fn new(transcriber: T, emotions: E, config: CoachConfig) -> Self {
        Self {
            transcriber,
            emotions,
            engine: ScoringEngine::default(),
            config,
        }
    }

    pub async fn assess(&self) -> Result<Assessment, SessionError> {
        let (transcript, transcript_quality) = match self.transcriber.transcribe().await {
            Ok(t) => (t, TranscriptQuality::Transcribed),
            Err(e) => {
                tracing::warn!(target: LOG_TARGET, error = %e, "transcription failed, scoring demo transcript");
                let demo = Transcript {
                    text: DEMO_TRANSCRIPT.to_owned(),
                    duration: None,
                };
                (demo, TranscriptQuality::Demo)
            }
        };

        let duration = match transcript.duration {
            Some(d) if d.as_secs_f64() > 0.0 => d,
            _ => {
                tracing::debug!(
                    target: LOG_TARGET,
                    fallback_secs = self.config.fallback_duration.as_secs(),
                    "response duration unknown, using fallback"
                );
                self.config.fallback_duration.duration()
            }
        };

        let samples = self.emotions.samples(duration).await?;
        let result =
            self.engine
                .score_response(&transcript.text, duration.as_secs_f64(), &samples)?;

        Ok(Assessment {
            transcript: transcript.text,
            transcript_quality,
            result,
        })
    }
}
