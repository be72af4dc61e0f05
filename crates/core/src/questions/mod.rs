use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty {0:?}, expected easy|medium|hard or 1|2|3")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    // Menu numbers are accepted alongside names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Self::Easy),
            "medium" | "2" => Ok(Self::Medium),
            "hard" | "3" => Ok(Self::Hard),
            other => Err(UnknownDifficulty(other.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Behavioral,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub category: Category,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn new(text: &str, category: Category, difficulty: Difficulty) -> Self {
        Self {
            text: text.to_owned(),
            category,
            difficulty,
        }
    }
}

#[derive(Clone, Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Picks uniformly among questions at `difficulty`, or among all of them
    /// when no difficulty is given.
    pub fn next<R: Rng>(
        &self,
        difficulty: Option<Difficulty>,
        rng: &mut R,
    ) -> Option<&Question> {
        let candidates: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| difficulty.is_none_or(|d| q.difficulty == d))
            .collect();

        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new(vec![
            Question::new("Tell me about yourself.", Category::Behavioral, Difficulty::Easy),
            Question::new(
                "What are your greatest strengths?",
                Category::Behavioral,
                Difficulty::Medium,
            ),
            Question::new(
                "Where do you see yourself in 5 years?",
                Category::Behavioral,
                Difficulty::Medium,
            ),
            Question::new(
                "Describe a challenging situation at work and how you handled it.",
                Category::Behavioral,
                Difficulty::Hard,
            ),
        ])
    }
}
