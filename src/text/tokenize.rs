/// Common English function words excluded from token streams.
/// Fixed configuration data, not a tunable.
const STOPWORDS: [&str; 35] = [
    "a", "an", "the", "is", "and", "or", "of", "in", "to", "for", "on", "with", "as", "by", "at",
    "it", "that", "this", "are", "was", "be", "from", "if", "you", "your", "can", "will", "what",
    "how", "why", "i", "we", "they", "he", "she",
];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Normalize free text into lowercase word tokens: punctuation stripped,
/// stop words removed. Deterministic; empty input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && !is_stopword(t))
        .map(|t| t.to_string())
        .collect()
}

/// Raw word-run count, with no stop-word removal. Used for length
/// shaping, where function words still count toward verbosity.
pub fn word_count(text: &str) -> usize {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .count()
}
