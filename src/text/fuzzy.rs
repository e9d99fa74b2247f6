use strsim::normalized_levenshtein;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.84;

/// Approximate token presence test.
///
/// Exact matches always hit. For longer strings a normalized edit-distance
/// ratio above the threshold also counts, which tolerates minor
/// misspellings and inflections without a full stemmer. Terms of three
/// characters or fewer require exact equality — short tokens produce too
/// many false positives under any ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    pub threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl FuzzyMatcher {
    pub fn new(threshold: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&threshold));
        Self { threshold }
    }

    /// True if `term` is present in `tokens`, exactly or by similarity.
    pub fn is_present(&self, tokens: &[String], term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return false;
        }

        for token in tokens {
            if *token == term {
                return true;
            }
            if term.chars().count() > 3
                && token.chars().count() > 3
                && normalized_levenshtein(token, &term) >= self.threshold
            {
                return true;
            }
        }
        false
    }
}
