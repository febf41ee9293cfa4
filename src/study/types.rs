// Study content types
//
// Serialized in camelCase, the shape the response schemas request and the
// host UI consumes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::errors::{GenerationError, Result};
use crate::providers::types::WebSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGuide {
    pub topic: String,
    pub overview: String,
    pub sections: Vec<Section>,
    pub related_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,

    /// Anatomy, embryology or physiology background
    pub foundational: String,

    /// Clinical application of the foundational material
    pub clinical: String,

    /// Flowchart in Mermaid graph syntax
    pub mermaid_chart: String,

    pub key_points: Vec<String>,
    pub mnemonics: Vec<String>,
    pub matching_pairs: Vec<MatchingPair>,
}

/// Term/definition pair for active-recall matching games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingPair {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,

    /// Zero-based index into `options`
    pub correct_answer: usize,

    pub explanation: String,
}

/// Allowed number of answer options per question
const OPTION_COUNT: RangeInclusive<usize> = 4..=5;

impl QuizSession {
    /// Check that every question has 4-5 options and a valid answer index
    pub fn validate(&self) -> Result<()> {
        for (idx, question) in self.questions.iter().enumerate() {
            if !OPTION_COUNT.contains(&question.options.len()) {
                return Err(GenerationError::InvalidContent(format!(
                    "question {} has {} options, expected 4 or 5",
                    idx + 1,
                    question.options.len()
                )));
            }
            if question.correct_answer >= question.options.len() {
                return Err(GenerationError::InvalidContent(format!(
                    "question {} has correct answer {} but only {} options",
                    idx + 1,
                    question.correct_answer,
                    question.options.len()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}' (expected easy, medium or hard)",
                other
            )),
        }
    }
}

/// One answer from a tutoring chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub text: String,

    /// Pages the search tool grounded the answer on
    pub sources: Vec<WebSource>,
}
