use std::collections::HashSet;

use crate::text::tokenize;

/// Saturation point for distinct long tokens.
const LONG_TOKEN_SATURATION: f64 = 12.0;
const MIN_LONG_TOKEN_CHARS: usize = 6;

/// Approximate lexical depth: distinct long tokens plus a binary bonus
/// for quantitative detail (any digit in the raw answer).
pub fn depth_score(answer: &str) -> f64 {
    let tokens = tokenize(answer);
    let long_terms: HashSet<&String> = tokens
        .iter()
        .filter(|t| t.chars().count() >= MIN_LONG_TOKEN_CHARS)
        .collect();

    let base = (long_terms.len() as f64 / LONG_TOKEN_SATURATION).min(1.0);
    let has_digit = if answer.chars().any(|c| c.is_ascii_digit()) {
        1.0
    } else {
        0.0
    };

    (0.8 * base + 0.2 * has_digit).min(1.0)
}
