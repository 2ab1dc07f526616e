mod entry;

pub use entry::{AnswerOption, Outcome, QuizEntry};
