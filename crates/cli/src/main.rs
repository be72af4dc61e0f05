#![deny(warnings)]

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};
use interview_coach_core::config::{CoachConfig, StdEnv};
use interview_coach_core::emotion::{EmotionSample, FixedEmotionSource, SeededEmotionSource};
use interview_coach_core::questions::{Difficulty, QuestionBank};
use interview_coach_core::session::{Assessment, InterviewSession};
use interview_coach_core::transcribe::{DemoTranscriber, StaticTranscriber, Transcriber};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "interview-coach")]
#[command(about = "Score a spoken interview response from its transcript and emotion samples")]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one response and print the result as JSON.
    #[command(group(
        ArgGroup::new("input")
            .required(true)
            .multiple(false)
            .args(["transcript", "transcript_file", "demo"])
    ))]
    Score {
        #[arg(long)]
        transcript: Option<String>,

        #[arg(long)]
        transcript_file: Option<PathBuf>,

        /// Score the built-in demo transcript.
        #[arg(long)]
        demo: bool,

        /// Response length in seconds. Overrides INTERVIEW_COACH_DURATION_SECS.
        #[arg(long)]
        duration: Option<f64>,

        /// JSON array of `{timestamp, emotion, confidence}` samples.
        #[arg(long, conflicts_with = "seed")]
        emotions: Option<PathBuf>,

        /// Seed for synthesized demo emotion samples.
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        sample_interval: Option<f64>,

        #[arg(long)]
        pretty: bool,
    },
    /// Print a practice question.
    Question {
        #[arg(long)]
        difficulty: Option<Difficulty>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    match args.command {
        Command::Score {
            transcript,
            transcript_file,
            demo,
            duration,
            emotions,
            seed,
            sample_interval,
            pretty,
        } => {
            let cfg = CoachConfig::resolve(duration, seed, sample_interval, &StdEnv)?;
            tracing::info!(
                fallback_duration_secs = cfg.fallback_duration.as_secs(),
                demo_seed = cfg.demo_seed,
                "config loaded"
            );

            let assessment = match (transcript, transcript_file, demo) {
                (Some(text), None, false) => {
                    run_score(StaticTranscriber::new(text, None), emotions, cfg).await?
                }
                (None, Some(path), false) => {
                    let text = tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("reading transcript {}", path.display()))?;
                    run_score(StaticTranscriber::new(text, None), emotions, cfg).await?
                }
                (None, None, true) => run_score(DemoTranscriber::new(), emotions, cfg).await?,
                _ => anyhow::bail!(
                    "exactly one of --transcript, --transcript-file or --demo must be provided"
                ),
            };

            let out = if pretty {
                serde_json::to_string_pretty(&assessment)?
            } else {
                serde_json::to_string(&assessment)?
            };
            println!("{out}");
        }
        Command::Question { difficulty, seed } => {
            let bank = QuestionBank::default();
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            let question = bank
                .next(difficulty, &mut rng)
                .context("no question matches the requested difficulty")?;
            println!("{}", question.text);
        }
    }

    Ok(())
}

async fn run_score<T: Transcriber>(
    transcriber: T,
    emotions: Option<PathBuf>,
    cfg: CoachConfig,
) -> anyhow::Result<Assessment> {
    let assessment = match emotions {
        Some(path) => {
            let source = FixedEmotionSource::new(load_samples(&path).await?);
            InterviewSession::new(transcriber, source, cfg).assess().await?
        }
        None => {
            let source = SeededEmotionSource::new(cfg.demo_seed, cfg.sample_interval.duration());
            InterviewSession::new(transcriber, source, cfg).assess().await?
        }
    };
    Ok(assessment)
}

async fn load_samples(path: &Path) -> anyhow::Result<Vec<EmotionSample>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading emotion samples {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing emotion samples {}", path.display()))
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
