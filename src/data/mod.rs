mod corpus;
mod loader;

pub use corpus::builtin_corpus;
pub use loader::{load_entries_from_json, parse_entries, LoadError};
