use crate::feedback::{FeedbackInput, FeedbackRule, RuleOutcome};
use crate::speech::{PACE_FAST_WPM, PACE_SLOW_WPM};

const CLARITY_STRONG: f64 = 80.0;
const CLARITY_WEAK: f64 = 60.0;
const POSITIVE_AFFECT_THRESHOLD: f64 = 0.6;

#[derive(Clone, Copy, Debug, Default)]
pub struct ClarityRule;

impl FeedbackRule for ClarityRule {
    fn name(&self) -> &'static str {
        "clarity"
    }

    fn evaluate(&self, input: &FeedbackInput<'_>) -> Option<RuleOutcome> {
        let clarity = input.metrics.clarity_score;
        if clarity > CLARITY_STRONG {
            Some(RuleOutcome::strength("Clear and articulate speech"))
        } else if clarity < CLARITY_WEAK {
            Some(RuleOutcome::improvement(
                "Work on reducing filler words",
                "Practice pausing instead of using 'um' or 'uh'",
            ))
        } else {
            None
        }
    }
}

/// Exactly 120 or 180 wpm produces no pace feedback.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaceRule;

impl FeedbackRule for PaceRule {
    fn name(&self) -> &'static str {
        "pace"
    }

    fn evaluate(&self, input: &FeedbackInput<'_>) -> Option<RuleOutcome> {
        let rate = input.metrics.speech_rate_wpm;
        if rate > PACE_SLOW_WPM && rate < PACE_FAST_WPM {
            Some(RuleOutcome::strength("Good speaking pace"))
        } else if rate > PACE_FAST_WPM {
            Some(RuleOutcome::improvement(
                "Speaking too fast",
                "Slow down and take deliberate pauses",
            ))
        } else if rate < PACE_SLOW_WPM {
            Some(RuleOutcome::improvement(
                "Speaking too slowly",
                "Try to maintain a more energetic pace",
            ))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DemeanorRule;

impl FeedbackRule for DemeanorRule {
    fn name(&self) -> &'static str {
        "demeanor"
    }

    fn evaluate(&self, input: &FeedbackInput<'_>) -> Option<RuleOutcome> {
        if input.positive_affect_ratio > POSITIVE_AFFECT_THRESHOLD {
            Some(RuleOutcome::strength("Maintained confident demeanor"))
        } else {
            Some(RuleOutcome::improvement(
                "Work on projecting more confidence",
                "Practice power poses and maintain eye contact",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::EmotionSummary;
    use crate::lexical::LexicalCounts;
    use crate::speech::{self, SpeechMetrics};

    fn with_rate(words: u32) -> SpeechMetrics {
        speech::score(
            LexicalCounts {
                word_count: words,
                filler_word_count: 0,
                pause_count: 0,
            },
            60.0,
        )
    }

    fn eval(rule: &dyn FeedbackRule, metrics: &SpeechMetrics, ratio: f64) -> Option<RuleOutcome> {
        let emotion = EmotionSummary::default();
        rule.evaluate(&FeedbackInput {
            metrics,
            emotion: &emotion,
            positive_affect_ratio: ratio,
        })
    }

    #[test]
    fn pace_boundaries_are_silent() {
        assert_eq!(eval(&PaceRule, &with_rate(120), 0.0), None);
        assert_eq!(eval(&PaceRule, &with_rate(180), 0.0), None);
        assert_eq!(
            eval(&PaceRule, &with_rate(121), 0.0),
            Some(RuleOutcome::strength("Good speaking pace"))
        );
        assert_eq!(
            eval(&PaceRule, &with_rate(119), 0.0).and_then(|o| o.improvement),
            Some("Speaking too slowly".to_owned())
        );
    }

    #[test]
    fn clarity_middle_band_is_silent() {
        // 70 baseline + 0 bonus sits between the thresholds
        assert_eq!(eval(&ClarityRule, &with_rate(0), 0.0), None);
        // 200 words: 70 + 10 = 80, still not strictly above
        assert_eq!(eval(&ClarityRule, &with_rate(200), 0.0), None);
    }

    #[test]
    fn demeanor_needs_strictly_more_than_threshold() {
        let m = with_rate(130);
        assert_eq!(
            eval(&DemeanorRule, &m, 0.6).and_then(|o| o.improvement),
            Some("Work on projecting more confidence".to_owned())
        );
        assert_eq!(
            eval(&DemeanorRule, &m, 0.61),
            Some(RuleOutcome::strength("Maintained confident demeanor"))
        );
    }
}
