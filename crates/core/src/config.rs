use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_DURATION_SECS: f64 = 60.0;
pub const DEFAULT_SAMPLE_INTERVAL_SECS: f64 = 6.0;
pub const DEFAULT_DEMO_SEED: u64 = 0x1d_c0ac;
pub const MAX_DURATION_SECS: f64 = 86_400.0;
pub const MAX_SAMPLE_INTERVAL_SECS: f64 = 3_600.0;
pub const ENV_DURATION_SECS: &str = "INTERVIEW_COACH_DURATION_SECS";
pub const ENV_DEMO_SEED: &str = "INTERVIEW_COACH_DEMO_SEED";
pub const ENV_SAMPLE_INTERVAL_SECS: &str = "INTERVIEW_COACH_SAMPLE_INTERVAL_SECS";

/// Length of a spoken response, in `(0, MAX_DURATION_SECS]`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResponseDuration {
    seconds: f64,
}

impl ResponseDuration {
    pub fn from_secs(seconds: f64) -> Result<Self, ConfigError> {
        if !within_bounds(seconds, MAX_DURATION_SECS) {
            return Err(ConfigError::InvalidDuration(seconds));
        }
        Ok(Self { seconds })
    }

    pub fn as_secs(&self) -> f64 {
        self.seconds
    }

    /// Deserialized values skip validation, so anything unrepresentable
    /// falls back to the default length.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.seconds)
            .unwrap_or(Duration::from_secs(DEFAULT_DURATION_SECS as u64))
    }
}

impl Default for ResponseDuration {
    fn default() -> Self {
        Self {
            seconds: DEFAULT_DURATION_SECS,
        }
    }
}

/// Spacing between synthesized emotion samples.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SampleInterval {
    seconds: f64,
}

impl SampleInterval {
    pub fn from_secs(seconds: f64) -> Result<Self, ConfigError> {
        if !within_bounds(seconds, MAX_SAMPLE_INTERVAL_SECS) {
            return Err(ConfigError::InvalidSampleInterval(seconds));
        }
        Ok(Self { seconds })
    }

    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.seconds)
            .unwrap_or(Duration::from_secs(DEFAULT_SAMPLE_INTERVAL_SECS as u64))
    }
}

impl Default for SampleInterval {
    fn default() -> Self {
        Self {
            seconds: DEFAULT_SAMPLE_INTERVAL_SECS,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CoachConfig {
    /// Used whenever the true response duration is unknown or unusable.
    pub fallback_duration: ResponseDuration,
    pub sample_interval: SampleInterval,
    pub demo_seed: u64,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            fallback_duration: ResponseDuration::default(),
            sample_interval: SampleInterval::default(),
            demo_seed: DEFAULT_DEMO_SEED,
        }
    }
}

fn within_bounds(seconds: f64, max: f64) -> bool {
    seconds.is_finite() && seconds > 0.0 && seconds <= max
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("duration must be in (0, 86400] seconds, got {0}")]
    InvalidDuration(f64),
    #[error("sample interval must be in (0, 3600] seconds, got {0}")]
    InvalidSampleInterval(f64),
    #[error("{key} is not a valid number: {value:?}")]
    NotANumber { key: String, value: String },
}

pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// CLI value, then environment, then `default`. An environment value that
/// does not parse is an error rather than a silent fallback.
pub fn resolve_number_with_default<T>(
    cli_value: Option<T>,
    env_key: &str,
    env: &impl Env,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    if let Some(v) = cli_value {
        return Ok(v);
    }
    match env.var(env_key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::NotANumber {
            key: env_key.to_owned(),
            value: raw,
        }),
        None => Ok(default),
    }
}

impl CoachConfig {
    pub fn resolve(
        cli_duration: Option<f64>,
        cli_seed: Option<u64>,
        cli_interval: Option<f64>,
        env: &impl Env,
    ) -> Result<Self, ConfigError> {
        let duration =
            resolve_number_with_default(cli_duration, ENV_DURATION_SECS, env, DEFAULT_DURATION_SECS)?;
        let demo_seed = resolve_number_with_default(cli_seed, ENV_DEMO_SEED, env, DEFAULT_DEMO_SEED)?;
        let interval = resolve_number_with_default(
            cli_interval,
            ENV_SAMPLE_INTERVAL_SECS,
            env,
            DEFAULT_SAMPLE_INTERVAL_SECS,
        )?;

        Ok(Self {
            fallback_duration: ResponseDuration::from_secs(duration)?,
            sample_interval: SampleInterval::from_secs(interval)?,
            demo_seed,
        })
    }
}
