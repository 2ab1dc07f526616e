//! # nz-trivia
//!
//! A terminal New Zealand trivia game.
//!
//! A random question is drawn from a fixed corpus; the player picks an answer
//! from a sorted list of every answer in the corpus and is told whether the
//! pick was right.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nz_trivia::{builtin_corpus, TriviaGame};
//!
//! fn main() -> Result<(), nz_trivia::GameError> {
//!     let game = TriviaGame::new(builtin_corpus(), None)?;
//!     game.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod game;
mod models;
mod store;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use data::{builtin_corpus, load_entries_from_json, parse_entries, LoadError};
pub use game::{GamePhase, GameState, START_SENTINEL};
pub use models::{AnswerOption, Outcome, QuizEntry};
pub use store::{EmptyCorpus, QuizStore};

/// Error type for game operations.
#[derive(Debug)]
pub enum GameError {
    /// Error loading the corpus.
    Load(LoadError),
    /// The corpus was empty.
    EmptyCorpus(EmptyCorpus),
    /// IO error while running the terminal UI.
    Io(io::Error),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Load(e) => write!(f, "Failed to load questions: {}", e),
            GameError::EmptyCorpus(e) => write!(f, "Invalid corpus: {}", e),
            GameError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Load(e) => Some(e),
            GameError::EmptyCorpus(e) => Some(e),
            GameError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for GameError {
    fn from(err: LoadError) -> Self {
        GameError::Load(err)
    }
}

impl From<EmptyCorpus> for GameError {
    fn from(err: EmptyCorpus) -> Self {
        GameError::EmptyCorpus(err)
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

/// A trivia session that can be run in the terminal.
pub struct TriviaGame {
    app: App,
}

impl TriviaGame {
    /// Create a game over the given corpus.
    ///
    /// Pass a `seed` for deterministic question order; `None` seeds from OS
    /// entropy.
    pub fn new(entries: Vec<QuizEntry>, seed: Option<u64>) -> Result<Self, GameError> {
        Ok(Self {
            app: App::new(entries, seed)?,
        })
    }

    /// Load the corpus from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self, GameError> {
        let entries = load_entries_from_json(path)?;
        Self::new(entries, seed)
    }

    /// Run the game in the terminal.
    ///
    /// Takes over the terminal, displays the game UI, and returns when the
    /// player quits.
    pub fn run(mut self) -> Result<(), GameError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::GameTerminal, app: &mut App) -> Result<(), GameError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            handle_input(app, key.code);
            if app.should_quit {
                break;
            }
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('n') | KeyCode::Char('N') => app.request_new_question(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_highlighted(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_app() -> App {
        App::new(
            vec![
                QuizEntry::new("2+2?", "4"),
                QuizEntry::new("sky color?", "Blue"),
            ],
            Some(1),
        )
        .unwrap()
    }

    #[test]
    fn test_quit_key_sets_flag() {
        let mut app = sample_app();
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_new_question_key_activates_game() {
        let mut app = sample_app();
        assert_eq!(app.game().phase(), GamePhase::Idle);
        handle_input(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game().phase(), GamePhase::QuestionActive);
    }

    #[test]
    fn test_enter_submits_highlighted_option() {
        let mut app = sample_app();
        handle_input(&mut app, KeyCode::Char('n'));
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.game().phase(), GamePhase::Answered);
        assert!(app.game().feedback().is_some());
    }

    #[test]
    fn test_new_question_clears_feedback() {
        let mut app = sample_app();
        handle_input(&mut app, KeyCode::Char('n'));
        handle_input(&mut app, KeyCode::Enter);
        assert!(app.game().feedback().is_some());

        handle_input(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game().feedback(), None);
        assert_eq!(app.game().selected_answer(), "");
    }
}
