use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::{keyword_overlap, round2, CompositeScorer};
use crate::types::{Flag, FlagThresholds, Level};

/// Score and flag for a single evaluated question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub score: f64,
    pub flag: Flag,
}

/// Final result emitted when a session (or one level's batch of answers)
/// is evaluated. The calling layer persists this and applies
/// `recommended_next_level` to the user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub per_question_scores: BTreeMap<String, QuestionResult>,
    pub average_score: f64,
    pub overall_flag: Flag,
    pub current_level: Level,
    pub recommended_next_level: Level,
}

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("no questions to evaluate")]
    EmptyBank,
    #[error("session has no answered questions")]
    EmptySession,
}

/// Which scorer backs a batch evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMode {
    /// Weighted coverage/structure/clarity/depth blend.
    Composite,
    /// Legacy plain token overlap.
    KeywordOverlap,
}

/// Evaluate all answers for one difficulty level against a keyword bank.
///
/// `level_bank` maps question keys to expected keywords; missing answers
/// score 0 (never an error). Averages round to 2 decimals.
pub fn evaluate_level(
    answers: &BTreeMap<String, String>,
    level_bank: &BTreeMap<String, Vec<String>>,
    level: Level,
    thresholds: FlagThresholds,
    mode: ScoringMode,
) -> Result<EvaluationSummary, EvaluationError> {
    if level_bank.is_empty() {
        return Err(EvaluationError::EmptyBank);
    }

    let scorer = CompositeScorer::default();
    let mut per_question = BTreeMap::new();
    let mut total = 0.0;

    for (key, keywords) in level_bank {
        let answer = answers.get(key).map(String::as_str).unwrap_or("");
        let score = match mode {
            ScoringMode::Composite => scorer.score(answer, keywords, level),
            ScoringMode::KeywordOverlap => keyword_overlap(answer, keywords),
        };
        per_question.insert(
            key.clone(),
            QuestionResult {
                score: round2(score),
                flag: Flag::for_score(score, thresholds),
            },
        );
        total += score;
    }

    let average_score = round2(total / level_bank.len() as f64);
    let overall_flag = Flag::for_score(average_score, thresholds);

    Ok(EvaluationSummary {
        per_question_scores: per_question,
        average_score,
        overall_flag,
        current_level: level,
        recommended_next_level: level.next(overall_flag),
    })
}

/// Persisted-shape evaluation record, keyed to a user and question field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagRecord {
    pub user_id: String,
    pub field: String,
    pub level: Level,
    pub per_question: BTreeMap<String, QuestionResult>,
    pub avg_score: f64,
    pub overall_flag: Flag,
    pub timestamp: DateTime<Utc>,
}

impl FlagRecord {
    pub fn from_summary(
        user_id: impl Into<String>,
        field: impl Into<String>,
        summary: &EvaluationSummary,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            field: field.into(),
            level: summary.current_level,
            per_question: summary.per_question_scores.clone(),
            avg_score: summary.average_score,
            overall_flag: summary.overall_flag,
            timestamp: Utc::now(),
        }
    }
}

/// Letter grade bands over the final interview percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn for_percentage(percentage: f64) -> Grade {
        if percentage >= 90.0 {
            Grade::APlus
        } else if percentage >= 80.0 {
            Grade::A
        } else if percentage >= 70.0 {
            Grade::B
        } else if percentage >= 60.0 {
            Grade::C
        } else if percentage >= 50.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            Grade::APlus => "Excellent! Outstanding performance.",
            Grade::A => "Great job! Very good understanding.",
            Grade::B => "Good work! Solid understanding.",
            Grade::C => "Fair performance. Room for improvement.",
            Grade::D => "Needs improvement. Consider reviewing the topics.",
            Grade::F => "Needs significant improvement. Please study more.",
        }
    }
}
