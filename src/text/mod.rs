pub mod fuzzy;
pub mod tokenize;

pub use fuzzy::FuzzyMatcher;
pub use tokenize::{tokenize, word_count};
