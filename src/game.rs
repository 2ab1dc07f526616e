//! The game state machine: current question, selected answer, win/lose result.

use crate::models::{Outcome, QuizEntry};

/// Placeholder shown before any question has been chosen.
pub const START_SENTINEL: &str = "Start";

/// Which stage of the question/answer cycle the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No question chosen yet; the sentinel is on display.
    Idle,
    /// A real question is shown, nothing selected.
    QuestionActive,
    /// An answer has been selected and evaluated.
    Answered,
}

/// Session-scoped game state.
///
/// Owned by the session object and handed into each transition; nothing here
/// is global or persisted.
#[derive(Debug, Clone)]
pub struct GameState {
    current_question: String,
    current_correct_answer: String,
    selected_answer: String,
    result: Option<Outcome>,
    idle: bool,
}

impl GameState {
    /// Start a session on the sentinel pair.
    pub fn new() -> Self {
        Self {
            current_question: START_SENTINEL.to_string(),
            current_correct_answer: START_SENTINEL.to_string(),
            selected_answer: String::new(),
            result: None,
            idle: true,
        }
    }

    pub fn current_question(&self) -> &str {
        &self.current_question
    }

    pub fn selected_answer(&self) -> &str {
        &self.selected_answer
    }

    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    pub fn phase(&self) -> GamePhase {
        if self.idle {
            GamePhase::Idle
        } else if self.result.is_some() {
            GamePhase::Answered
        } else {
            GamePhase::QuestionActive
        }
    }

    /// Install a newly picked entry as the active question.
    ///
    /// Clears the selection and result in the same update, so a new question
    /// can never appear alongside stale win/lose feedback. Available in every
    /// phase.
    pub fn new_question(&mut self, entry: &QuizEntry) {
        self.current_question = entry.question.clone();
        self.current_correct_answer = entry.answer.clone();
        self.selected_answer.clear();
        self.result = None;
        self.idle = false;
    }

    /// Record and evaluate a selection.
    ///
    /// An empty choice is not a real selection; it clears any previous
    /// selection instead of being scored, so a blank placeholder can never
    /// produce a win. Re-selecting a different answer re-evaluates in place.
    pub fn select_answer(&mut self, choice: &str) {
        if choice.is_empty() {
            self.selected_answer.clear();
            self.result = None;
            return;
        }

        self.selected_answer = choice.to_string();
        self.result = Some(if choice == self.current_correct_answer {
            Outcome::Win
        } else {
            Outcome::Lose
        });
    }

    /// Feedback line for the current selection, if one has been evaluated.
    ///
    /// The text intentionally has no space before the hyphen
    /// ("You selected 4- you win"); see `Outcome::suffix`.
    pub fn feedback(&self) -> Option<String> {
        self.result
            .map(|outcome| format!("You selected {}{}", self.selected_answer, outcome.suffix()))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
