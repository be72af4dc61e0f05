pub const SPEECH_WEIGHT: f64 = 0.6;
pub const EMOTION_WEIGHT: f64 = 0.4;

/// Rounds to the nearest integer, ties away from zero. Every integer output of
/// the engine goes through this so results are reproducible.
pub fn round_half_away(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// Blends clarity (0..=100) and mean emotion confidence (0..=1) into the
/// headline 0..=100 score. A non-finite input contributes 0 without
/// discarding the other one.
pub fn combine(clarity_score: f64, average_confidence: f64) -> u8 {
    let speech = finite_or_zero(clarity_score).clamp(0.0, 100.0);
    let emotion = finite_or_zero(average_confidence).clamp(0.0, 1.0) * 100.0;
    let blended = speech * SPEECH_WEIGHT + emotion * EMOTION_WEIGHT;

    let score = round_half_away(blended).clamp(0, 100);
    u8::try_from(score).unwrap_or(100)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_ties_go_away_from_zero() {
        assert_eq!(round_half_away(7.5), 8);
        assert_eq!(round_half_away(76.5), 77);
        assert_eq!(round_half_away(-2.5), -3);
        assert_eq!(round_half_away(76.49), 76);
        assert_eq!(round_half_away(f64::NAN), 0);
    }

    #[test]
    fn combine_weights_speech_and_emotion() {
        assert_eq!(combine(67.8, 0.9), 77);
        assert_eq!(combine(70.0, 0.0), 42);
        assert_eq!(combine(100.0, 1.0), 100);
        assert_eq!(combine(0.0, 0.0), 0);
    }

    #[test]
    fn combine_stays_in_range_for_out_of_range_inputs() {
        assert_eq!(combine(250.0, 3.0), 100);
        assert_eq!(combine(-40.0, -1.0), 0);
    }

    #[test]
    fn non_finite_input_keeps_the_other_component() {
        assert_eq!(combine(f64::NAN, 0.5), 20);
        assert_eq!(combine(f64::INFINITY, 0.5), 20);
        assert_eq!(combine(70.0, f64::NAN), 42);
    }

    #[test]
    fn combine_is_monotonic_in_each_input() {
        let mut last = 0;
        for step in 0..=200 {
            let clarity = f64::from(step) * 0.5;
            let score = combine(clarity, 0.73);
            assert!(score >= last, "clarity {clarity} lowered the score");
            last = score;
        }

        let mut last = 0;
        for step in 0..=100 {
            let confidence = f64::from(step) / 100.0;
            let score = combine(61.3, confidence);
            assert!(score >= last, "confidence {confidence} lowered the score");
            last = score;
        }
    }
}
