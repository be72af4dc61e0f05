//! Categorized feedback from speech metrics and emotion data.
//!
//! Feedback is produced by an ordered list of independent [`FeedbackRule`]s.
//! Each rule looks at the same inputs and may contribute one strength, one
//! improvement and one tip; the generator concatenates the outcomes in rule
//! order and never reorders or drops anything a rule produced.

mod rules;

use crate::emotion::EmotionSummary;
use crate::speech::SpeechMetrics;
use serde::{Deserialize, Serialize};

pub use rules::{ClarityRule, DemeanorRule, PaceRule};

/// Tips appended when no rule produced one.
pub const FALLBACK_TIPS: [&str; 2] = [
    "Great job! Keep practicing to maintain consistency",
    "Consider recording yourself more often to track progress",
];

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub tips: Vec<String>,
}

#[derive(Clone, Copy, Debug)]
pub struct FeedbackInput<'a> {
    pub metrics: &'a SpeechMetrics,
    /// Unused by the built-in rules; available to custom ones.
    pub emotion: &'a EmotionSummary,
    pub positive_affect_ratio: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    pub strength: Option<String>,
    pub improvement: Option<String>,
    pub tip: Option<String>,
}

impl RuleOutcome {
    pub fn strength(text: &str) -> Self {
        Self {
            strength: Some(text.to_owned()),
            ..Default::default()
        }
    }

    pub fn improvement(text: &str, tip: &str) -> Self {
        Self {
            improvement: Some(text.to_owned()),
            tip: Some(tip.to_owned()),
            ..Default::default()
        }
    }
}

pub trait FeedbackRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, input: &FeedbackInput<'_>) -> Option<RuleOutcome>;
}

pub struct FeedbackGenerator {
    rules: Vec<Box<dyn FeedbackRule>>,
}

impl FeedbackGenerator {
    pub fn new(rules: Vec<Box<dyn FeedbackRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn generate(
        &self,
        metrics: &SpeechMetrics,
        emotion: &EmotionSummary,
        positive_affect_ratio: f64,
    ) -> Feedback {
        let input = FeedbackInput {
            metrics,
            emotion,
            positive_affect_ratio,
        };

        let mut feedback = Feedback::default();
        for rule in &self.rules {
            let Some(outcome) = rule.evaluate(&input) else {
                continue;
            };
            tracing::trace!(rule = rule.name(), ?outcome, "feedback rule fired");
            feedback.strengths.extend(outcome.strength);
            feedback.improvements.extend(outcome.improvement);
            feedback.tips.extend(outcome.tip);
        }

        if feedback.tips.is_empty() {
            feedback
                .tips
                .extend(FALLBACK_TIPS.iter().map(|t| (*t).to_owned()));
        }

        feedback
    }
}

impl Default for FeedbackGenerator {
    fn default() -> Self {
        Self::new(vec![
            Box::new(ClarityRule),
            Box::new(PaceRule),
            Box::new(DemeanorRule),
        ])
    }
}

impl std::fmt::Debug for FeedbackGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackGenerator")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::LexicalCounts;
    use crate::speech;

    fn metrics(word_count: u32, filler_word_count: u32, duration_seconds: f64) -> SpeechMetrics {
        speech::score(
            LexicalCounts {
                word_count,
                filler_word_count,
                pause_count: 0,
            },
            duration_seconds,
        )
    }

    struct Silent;

    impl FeedbackRule for Silent {
        fn name(&self) -> &'static str {
            "silent"
        }

        fn evaluate(&self, _input: &FeedbackInput<'_>) -> Option<RuleOutcome> {
            None
        }
    }

    struct Praise(&'static str);

    impl FeedbackRule for Praise {
        fn name(&self) -> &'static str {
            "praise"
        }

        fn evaluate(&self, _input: &FeedbackInput<'_>) -> Option<RuleOutcome> {
            Some(RuleOutcome::strength(self.0))
        }
    }

    #[test]
    fn strong_answer_collects_only_strengths_and_fallback_tips() {
        // 150 words in 60 s: good pace, clarity 70 + 10 bonus - 2 = 78
        let m = metrics(150, 1, 60.0);
        let emotion = EmotionSummary {
            average_confidence: 0.9,
        };
        let feedback = FeedbackGenerator::default().generate(&m, &emotion, 0.8);

        assert_eq!(
            feedback.strengths,
            vec!["Good speaking pace", "Maintained confident demeanor"]
        );
        assert!(feedback.improvements.is_empty());
        assert_eq!(feedback.tips, FALLBACK_TIPS.map(str::to_owned).to_vec());
    }

    #[test]
    fn weak_answer_fires_every_negative_branch_in_order() {
        // 40 words in 10 s = 240 wpm; 14 fillers cap the penalty at 25
        let m = metrics(40, 14, 10.0);
        let feedback =
            FeedbackGenerator::default().generate(&m, &EmotionSummary::default(), 0.0);

        assert!(feedback.strengths.is_empty());
        assert_eq!(
            feedback.improvements,
            vec![
                "Work on reducing filler words",
                "Speaking too fast",
                "Work on projecting more confidence",
            ]
        );
        assert_eq!(
            feedback.tips,
            vec![
                "Practice pausing instead of using 'um' or 'uh'",
                "Slow down and take deliberate pauses",
                "Practice power poses and maintain eye contact",
            ]
        );
    }

    #[test]
    fn fallback_tips_fill_an_empty_tip_list() {
        let generator = FeedbackGenerator::new(vec![Box::new(Silent), Box::new(Praise("Nice"))]);
        let m = metrics(0, 0, 60.0);
        let feedback = generator.generate(&m, &EmotionSummary::default(), 0.0);

        assert_eq!(feedback.strengths, vec!["Nice"]);
        assert_eq!(feedback.tips.len(), 2);
    }

    #[test]
    fn tips_are_never_empty() {
        let generator = FeedbackGenerator::default();
        for words in [0, 10, 130, 400] {
            for fillers in [0, 4, 20] {
                for ratio in [0.0, 0.6, 1.0] {
                    let m = metrics(words, fillers, 60.0);
                    let feedback = generator.generate(&m, &EmotionSummary::default(), ratio);
                    assert!(!feedback.tips.is_empty());
                }
            }
        }
    }

    struct SteadyNerves;

    impl FeedbackRule for SteadyNerves {
        fn name(&self) -> &'static str {
            "steady-nerves"
        }

        fn evaluate(&self, input: &FeedbackInput<'_>) -> Option<RuleOutcome> {
            (input.emotion.average_confidence > 0.8)
                .then(|| RuleOutcome::strength("Steady expression throughout"))
        }
    }

    #[test]
    fn custom_rules_can_read_the_emotion_summary() {
        let generator = FeedbackGenerator::new(vec![Box::new(SteadyNerves)]);
        let m = metrics(130, 0, 60.0);
        let calm = EmotionSummary {
            average_confidence: 0.9,
        };

        let feedback = generator.generate(&m, &calm, 0.0);
        assert_eq!(feedback.strengths, vec!["Steady expression throughout"]);
        assert!(generator
            .generate(&m, &EmotionSummary::default(), 0.0)
            .strengths
            .is_empty());
    }

    #[test]
    fn generator_reports_rules_in_evaluation_order() {
        assert_eq!(
            FeedbackGenerator::default().rule_names(),
            vec!["clarity", "pace", "demeanor"]
        );
    }
}
