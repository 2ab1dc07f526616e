use serde::Deserialize;

/// A single question/answer pair from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizEntry {
    pub question: String,
    pub answer: String,
}

impl QuizEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A display-ready answer choice derived from a corpus entry.
///
/// `value` and `label` always hold the same text; the split exists so the
/// rendering layer has a stable submit value separate from display concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub value: String,
    pub label: String,
}

impl AnswerOption {
    pub fn from_answer(answer: &str) -> Self {
        Self {
            value: answer.to_string(),
            label: answer.to_string(),
        }
    }
}

/// Result of evaluating a selected answer against the active question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Suffix appended to the selection feedback line.
    ///
    /// Note the missing space before the hyphen: the message reads
    /// "You selected 4- you win". Kept as-is to match the established
    /// feedback text.
    pub fn suffix(self) -> &'static str {
        match self {
            Outcome::Win => "- you win",
            Outcome::Lose => "- you lose",
        }
    }
}
