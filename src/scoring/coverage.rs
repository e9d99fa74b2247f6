use std::collections::HashSet;

use crate::text::{tokenize, FuzzyMatcher};

/// Fraction of expected keywords found in the answer.
///
/// Each keyword may be a multi-word phrase. A phrase counts as hit when
/// every constituent part (split on whitespace/hyphen/slash) is fuzzily
/// present in the tokenized answer, or when the whole keyword string
/// itself fuzzily matches some token (single-token idioms). Blank or
/// empty keyword entries are skipped, never fatal.
pub fn coverage_score(matcher: &FuzzyMatcher, answer: &str, keywords: &[String]) -> f64 {
    if answer.is_empty() || keywords.is_empty() {
        return 0.0;
    }

    let tokens = tokenize(answer);
    let wanted: Vec<String> = keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();
    if wanted.is_empty() {
        return 0.0;
    }

    let mut hits = 0usize;
    for kw in &wanted {
        let parts: Vec<&str> = kw
            .split(|c: char| c.is_whitespace() || c == '-' || c == '/')
            .filter(|p| !p.is_empty())
            .collect();

        if !parts.is_empty() && parts.iter().all(|p| matcher.is_present(&tokens, p)) {
            hits += 1;
        } else if matcher.is_present(&tokens, kw) {
            hits += 1;
        }
    }

    hits as f64 / wanted.len() as f64
}

/// Legacy scoring mode: plain token-set overlap between the answer and
/// the keyword list, no fuzzy matching and no phrase conjunction.
pub fn keyword_overlap(answer: &str, keywords: &[String]) -> f64 {
    if answer.is_empty() || keywords.is_empty() {
        return 0.0;
    }

    let answer_tokens: HashSet<String> = tokenize(answer).into_iter().collect();
    let keyword_tokens: HashSet<String> = tokenize(&keywords.join(" ")).into_iter().collect();
    if keyword_tokens.is_empty() {
        return 0.0;
    }

    let matched = keyword_tokens
        .iter()
        .filter(|t| answer_tokens.contains(*t))
        .count();
    matched as f64 / keyword_tokens.len() as f64
}
