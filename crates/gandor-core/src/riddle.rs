use serde::{Deserialize, Serialize};

/// A question/answer pair guarding a puzzle-gated room.
///
/// The answer is lower-cased at construction; attempts are trimmed and
/// case-folded before comparison. Riddles are immutable — the solved flag
/// lives on the room's [`crate::room::RiddleState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    question: String,
    answer: String,
}

impl Riddle {
    /// Create a riddle. The stored answer is normalized to lower case.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into().to_lowercase(),
        }
    }

    /// The question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Check an attempt against the stored answer, ignoring case and
    /// surrounding whitespace.
    pub fn check(&self, attempt: &str) -> bool {
        attempt.trim().to_lowercase() == self.answer
    }
}
