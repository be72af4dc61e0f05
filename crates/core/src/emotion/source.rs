use crate::emotion::{EmotionError, EmotionLabel, EmotionSample};
use futures::future::BoxFuture;
use futures::FutureExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Labels the demo generator draws from.
pub const DEMO_LABELS: [EmotionLabel; 5] = [
    EmotionLabel::Neutral,
    EmotionLabel::Happy,
    EmotionLabel::Confident,
    EmotionLabel::Nervous,
    EmotionLabel::Focused,
];

const DEMO_MIN_CONFIDENCE: f64 = 0.6;
const DEMO_MAX_CONFIDENCE: f64 = 1.0;
/// Upper bound on synthesized samples per response.
pub const MAX_DEMO_SAMPLES: usize = 10_000;

/// Supplies the emotion samples observed over a response of the given length.
pub trait EmotionSource: Send + Sync {
    fn samples(&self, duration: Duration)
        -> BoxFuture<'_, Result<Vec<EmotionSample>, EmotionError>>;
}

/// Replays a caller-provided sequence regardless of duration.
#[derive(Clone, Debug, Default)]
pub struct FixedEmotionSource {
    samples: Vec<EmotionSample>,
}

impl FixedEmotionSource {
    pub fn new(samples: Vec<EmotionSample>) -> Self {
        Self {
            samples: samples.into_iter().map(EmotionSample::sanitized).collect(),
        }
    }
}

impl EmotionSource for FixedEmotionSource {
    fn samples(
        &self,
        _duration: Duration,
    ) -> BoxFuture<'_, Result<Vec<EmotionSample>, EmotionError>> {
        async move { Ok(self.samples.clone()) }.boxed()
    }
}

/// Pseudo-random samples for demo mode. Each call reseeds, so one source
/// always yields the same sequence for the same duration.
#[derive(Clone, Debug)]
pub struct SeededEmotionSource {
    seed: u64,
    interval: Duration,
}

impl SeededEmotionSource {
    pub fn new(seed: u64, interval: Duration) -> Self {
        Self { seed, interval }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn sample_count(&self, duration: Duration) -> usize {
        let interval = self.interval.as_secs_f64();
        if interval <= 0.0 {
            return 1;
        }
        let count = (duration.as_secs_f64() / interval).ceil();
        (count.min(MAX_DEMO_SAMPLES as f64) as usize).max(1)
    }

    pub fn generate(&self, duration: Duration) -> Vec<EmotionSample> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let step = self.interval.as_secs_f64();

        (0..self.sample_count(duration))
            .map(|i| {
                let label = DEMO_LABELS[rng.random_range(0..DEMO_LABELS.len())];
                let confidence = rng.random_range(DEMO_MIN_CONFIDENCE..DEMO_MAX_CONFIDENCE);
                EmotionSample::new(i as f64 * step, label, confidence)
            })
            .collect()
    }
}

impl EmotionSource for SeededEmotionSource {
    fn samples(
        &self,
        duration: Duration,
    ) -> BoxFuture<'_, Result<Vec<EmotionSample>, EmotionError>> {
        async move {
            let samples = self.generate(duration);
            tracing::debug!(
                seed = self.seed,
                samples = samples.len(),
                "synthesized demo emotion samples"
            );
            Ok(samples)
        }
        .boxed()
    }
}
