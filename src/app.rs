use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::game::{GamePhase, GameState};
use crate::models::{AnswerOption, QuizEntry};
use crate::store::{EmptyCorpus, QuizStore};

/// One interactive session: the store, the game state, and the UI cursor.
pub struct App {
    store: QuizStore,
    game: GameState,
    rng: ChaCha8Rng,
    highlighted_option: usize,
    pub should_quit: bool,
}

impl App {
    /// Create a session over the given corpus.
    ///
    /// With no explicit seed the RNG is seeded from OS entropy; tests pass a
    /// fixed seed to make question selection deterministic.
    pub fn new(entries: Vec<QuizEntry>, seed: Option<u64>) -> Result<Self, EmptyCorpus> {
        let store = QuizStore::new(entries)?;
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        Ok(Self {
            store,
            game: GameState::new(),
            rng,
            highlighted_option: 0,
            should_quit: false,
        })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn answer_options(&self) -> Vec<AnswerOption> {
        self.store.answer_options()
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted_option
    }

    /// Pick a fresh random question and clear any previous selection.
    pub fn request_new_question(&mut self) {
        let entry = self.store.pick_random(&mut self.rng);
        self.game.new_question(entry);
    }

    /// Submit an answer choice for evaluation.
    pub fn submit_answer(&mut self, choice: &str) {
        // Scoring only makes sense once a real question is up.
        if self.game.phase() == GamePhase::Idle {
            return;
        }
        self.game.select_answer(choice);
    }

    /// Submit whichever option the cursor is on.
    pub fn submit_highlighted(&mut self) {
        let options = self.store.answer_options();
        if let Some(option) = options.get(self.highlighted_option) {
            let choice = option.value.clone();
            self.submit_answer(&choice);
        }
    }

    pub fn select_next_option(&mut self) {
        let count = self.store.len();
        self.highlighted_option = (self.highlighted_option + 1) % count;
    }

    pub fn select_previous_option(&mut self) {
        let count = self.store.len();
        self.highlighted_option = (self.highlighted_option + count - 1) % count;
    }
}
