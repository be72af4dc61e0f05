//! Transcription boundary. Speech recognition happens outside this crate;
//! implementations of [`Transcriber`] hand the engine finished text.

use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEMO_TRANSCRIPT: &str = "This is a demo transcript. In the full version, your speech would be transcribed using OpenAI's Whisper API. The AI would analyze your speech patterns, detect filler words, and provide detailed feedback on your interview performance.";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    pub text: String,
    /// Spoken length when the transcriber knows it.
    pub duration: Option<Duration>,
}

#[derive(thiserror::Error, Debug)]
pub enum TranscribeError {
    #[error("transcription service unavailable: {0}")]
    Unavailable(String),
    #[error("transcript source could not be read: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Transcriber: Send + Sync {
    fn transcribe(&self) -> BoxFuture<'_, Result<Transcript, TranscribeError>>;
}

/// Hands back text the caller already has, e.g. from a file or argument.
#[derive(Clone, Debug)]
pub struct StaticTranscriber {
    transcript: Transcript,
}

impl StaticTranscriber {
    pub fn new<S: Into<String>>(text: S, duration: Option<Duration>) -> Self {
        Self {
            transcript: Transcript {
                text: text.into(),
                duration,
            },
        }
    }
}

impl Transcriber for StaticTranscriber {
    fn transcribe(&self) -> BoxFuture<'_, Result<Transcript, TranscribeError>> {
        async move { Ok(self.transcript.clone()) }.boxed()
    }
}

/// Stands in for a real transcription service in demo mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoTranscriber;

impl DemoTranscriber {
    pub fn new() -> Self {
        Self
    }
}

impl Transcriber for DemoTranscriber {
    fn transcribe(&self) -> BoxFuture<'_, Result<Transcript, TranscribeError>> {
        async move {
            Ok(Transcript {
                text: DEMO_TRANSCRIPT.to_owned(),
                duration: None,
            })
        }
        .boxed()
    }
}
