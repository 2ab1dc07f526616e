use crate::models::QuizEntry;

/// The built-in New Zealand trivia corpus.
///
/// Fixed at compile time and used whenever no corpus file is supplied on the
/// command line.
pub fn builtin_corpus() -> Vec<QuizEntry> {
    [
        ("What is the capital of New Zealand?", "Wellington"),
        ("What is the largest city in New Zealand?", "Auckland"),
        ("What is the Māori name for New Zealand?", "Aotearoa"),
        ("Which flightless bird is a national symbol of New Zealand?", "Kiwi"),
        ("What is the longest river in New Zealand?", "Waikato River"),
        ("What is the highest mountain in New Zealand?", "Aoraki / Mount Cook"),
        ("Which sport do the All Blacks play?", "Rugby"),
        ("Who was the first person to summit Mount Everest?", "Sir Edmund Hillary"),
        ("Which strait separates the North and South Islands?", "Cook Strait"),
        ("What is the southernmost city in New Zealand?", "Invercargill"),
    ]
    .into_iter()
    .map(|(question, answer)| QuizEntry::new(question, answer))
    .collect()
}
