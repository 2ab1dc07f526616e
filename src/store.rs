//! The quiz store: owns the static corpus and derives answer-option views.

use rand::Rng;

use crate::models::{AnswerOption, QuizEntry};

/// Error constructing a store.
#[derive(Debug, PartialEq, Eq)]
pub struct EmptyCorpus;

impl std::fmt::Display for EmptyCorpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "quiz corpus must contain at least one entry")
    }
}

impl std::error::Error for EmptyCorpus {}

/// Immutable question/answer corpus.
#[derive(Debug)]
pub struct QuizStore {
    entries: Vec<QuizEntry>,
}

impl QuizStore {
    /// Create a store over a non-empty corpus.
    pub fn new(entries: Vec<QuizEntry>) -> Result<Self, EmptyCorpus> {
        if entries.is_empty() {
            return Err(EmptyCorpus);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[QuizEntry] {
        &self.entries
    }

    /// Pick a uniformly random entry.
    ///
    /// Draws are independent, so immediate repeats are possible.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> &QuizEntry {
        let index = rng.random_range(0..self.entries.len());
        &self.entries[index]
    }

    /// Every entry's answer as a display option, sorted ascending.
    ///
    /// One option per entry: duplicate answer text across questions produces
    /// duplicate options.
    pub fn answer_options(&self) -> Vec<AnswerOption> {
        let mut options: Vec<AnswerOption> = self
            .entries
            .iter()
            .map(|entry| AnswerOption::from_answer(&entry.answer))
            .collect();
        options.sort_by(|a, b| a.value.cmp(&b.value));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn entry(q: &str, a: &str) -> QuizEntry {
        QuizEntry::new(q, a)
    }

    #[test]
    fn test_rejects_empty_corpus() {
        assert_eq!(QuizStore::new(Vec::new()).unwrap_err(), EmptyCorpus);
    }

    #[test]
    fn test_single_entry_pick_is_deterministic() {
        let store = QuizStore::new(vec![entry("2+2?", "4")]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(store.pick_random(&mut rng).question, "2+2?");
        }
    }

    #[test]
    fn test_pick_covers_all_entries() {
        let store = QuizStore::new(vec![
            entry("q1", "a1"),
            entry("q2", "a2"),
            entry("q3", "a3"),
            entry("q4", "a4"),
        ])
        .unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let picked = store.pick_random(&mut rng);
            let index = store
                .entries()
                .iter()
                .position(|e| e == picked)
                .expect("picked entry comes from the corpus");
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s), "every entry should be reachable");
    }

    #[test]
    fn test_answer_options_are_sorted() {
        let store = QuizStore::new(vec![
            entry("capital?", "Wellington"),
            entry("largest city?", "Auckland"),
            entry("national bird?", "Kiwi"),
        ])
        .unwrap();

        let options = store.answer_options();
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Auckland", "Kiwi", "Wellington"]);
        for window in options.windows(2) {
            assert!(window[0].value <= window[1].value);
        }
    }

    #[test]
    fn test_answer_options_cover_every_answer() {
        let store = QuizStore::new(vec![
            entry("q1", "b"),
            entry("q2", "a"),
            entry("q3", "c"),
        ])
        .unwrap();

        let options = store.answer_options();
        for e in store.entries() {
            assert!(options.iter().any(|o| o.value == e.answer));
        }
    }

    #[test]
    fn test_answer_options_keep_duplicates() {
        let store = QuizStore::new(vec![
            entry("2+2?", "4"),
            entry("8/2?", "4"),
            entry("sky color?", "Blue"),
        ])
        .unwrap();

        let options = store.answer_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options.iter().filter(|o| o.value == "4").count(), 2);
    }

    #[test]
    fn test_options_value_matches_label() {
        let store = QuizStore::new(vec![entry("q", "Rugby")]).unwrap();
        let options = store.answer_options();
        assert_eq!(options[0].value, options[0].label);
    }
}
