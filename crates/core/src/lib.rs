#![deny(warnings)]

pub mod config;
pub mod emotion;
pub mod engine;
pub mod feedback;
pub mod lexical;
pub mod questions;
pub mod score;
pub mod session;
pub mod speech;
pub mod transcribe;

pub use engine::{score_response, ScoreError, ScoreResult, ScoringEngine};
