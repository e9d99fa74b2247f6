use serde::{Deserialize, Serialize};

use crate::text::tokenize;
use crate::types::identifiers::QuestionId;
use crate::types::level::Level;

/// An interview question as served by the external question bank.
/// The core treats this as read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub level: Level,
    /// Expected answer keywords; each entry may be a multi-word phrase.
    pub keywords: Vec<String>,
    /// Pre-normalized single-word tokens of `keywords`, cached at
    /// construction so scoring never re-tokenizes bank data.
    pub tokens: Vec<String>,
}

impl Question {
    /// Build a question with a content-hash id and pre-tokenized keywords.
    pub fn new(text: impl Into<String>, level: Level, keywords: Vec<String>) -> Self {
        let text = text.into();
        let id = QuestionId::from_text(&text);
        let tokens = tokenize(&keywords.join(" "));

        Question {
            id,
            text,
            level,
            keywords,
            tokens,
        }
    }
}
