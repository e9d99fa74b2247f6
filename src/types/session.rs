use serde::{Deserialize, Serialize};

use crate::types::level::Level;
use crate::types::question::Question;

/// One answered question within a session. Appended, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsweredItem {
    pub question_text: String,
    pub level: Level,
    /// Composite score in [0,1].
    pub score: f64,
}

/// Mutable per-session aggregate for one live interview.
///
/// Created when the interview starts, mutated only by the adaptive
/// selector after each answer submission, discarded when the session
/// completes or is abandoned. One interview = one active session =
/// single-threaded mutation; the calling layer must keep at most one
/// writer per session id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAdaptiveState {
    pub skills: Vec<String>,
    pub base_level: Level,
    pub target_total: usize,
    pub answered: Vec<AnsweredItem>,
    pub current_question: Option<Question>,
}

impl SessionAdaptiveState {
    pub fn new(skills: Vec<String>, base_level: Level, target_total: usize) -> Self {
        Self {
            skills,
            base_level,
            target_total,
            answered: Vec::new(),
            current_question: None,
        }
    }

    /// Terminal once the quota total is reached; no further question is issued.
    pub fn is_complete(&self) -> bool {
        debug_assert!(self.answered.len() <= self.target_total);
        self.answered.len() >= self.target_total
    }

    /// Level of the most recent answer, or the configured base level
    /// when nothing has been answered yet.
    pub fn working_level(&self) -> Level {
        self.answered
            .last()
            .map(|a| a.level)
            .unwrap_or(self.base_level)
    }

    /// Question texts already used in this session, including the one
    /// currently outstanding.
    pub fn used_texts(&self) -> Vec<&str> {
        let mut used: Vec<&str> = self
            .answered
            .iter()
            .map(|a| a.question_text.as_str())
            .collect();
        if let Some(q) = &self.current_question {
            used.push(q.text.as_str());
        }
        used
    }
}
