pub mod clarity;
pub mod coverage;
pub mod depth;
pub mod structure;

use serde::{Deserialize, Serialize};

use crate::text::FuzzyMatcher;
use crate::types::Level;

pub use clarity::{clarity_score, length_window};
pub use coverage::{coverage_score, keyword_overlap};
pub use depth::depth_score;
pub use structure::{structure_features, StructureComponents};

/// Feature weights for one difficulty tier. Sum to 1.0 per tier:
/// coverage dominates everywhere and depth gains weight at hard, at the
/// expense of structure and clarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub coverage: f64,
    pub structure: f64,
    pub clarity: f64,
    pub depth: f64,
}

impl ScoreWeights {
    pub fn for_level(level: Level) -> Self {
        let weights = match level {
            Level::Beginner => Self {
                coverage: 0.50,
                structure: 0.15,
                clarity: 0.20,
                depth: 0.15,
            },
            Level::Intermediate => Self {
                coverage: 0.45,
                structure: 0.18,
                clarity: 0.17,
                depth: 0.20,
            },
            Level::Hard => Self {
                coverage: 0.40,
                structure: 0.20,
                clarity: 0.15,
                depth: 0.25,
            },
        };
        debug_assert!(
            (weights.coverage + weights.structure + weights.clarity + weights.depth - 1.0).abs()
                < 1e-9,
            "tier weights must sum to 1.0"
        );
        weights
    }
}

/// All intermediate feature values for one scored answer, rounded to
/// 3 decimals. Recomputable from (answer, keywords, level) with no side
/// effects; cached for display only, never authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub coverage: f64,
    pub structure: f64,
    pub clarity: f64,
    pub depth: f64,
    #[serde(rename = "final")]
    pub final_score: f64,
    pub structure_components: StructureComponents,
}

/// Combines the four feature scores with level-dependent weights into
/// one bounded score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompositeScorer {
    matcher: FuzzyMatcher,
}

impl CompositeScorer {
    pub fn new(matcher: FuzzyMatcher) -> Self {
        Self { matcher }
    }

    /// Composite quality estimate in [0,1]. Empty answers score 0
    /// unconditionally, before any feature computation.
    pub fn score(&self, answer: &str, keywords: &[String], level: Level) -> f64 {
        if answer.is_empty() {
            return 0.0;
        }

        let w = ScoreWeights::for_level(level);
        let cov = coverage_score(&self.matcher, answer, keywords);
        let strct = structure_features(answer).score();
        let clar = clarity_score(answer, level);
        let dep = depth_score(answer);

        let score = w.coverage * cov + w.structure * strct + w.clarity * clar + w.depth * dep;
        score.clamp(0.0, 1.0)
    }

    /// Breakdown variant exposing every feature plus the structure
    /// sub-components, for auditability and diagnostics.
    pub fn breakdown(&self, answer: &str, keywords: &[String], level: Level) -> ScoreBreakdown {
        let w = ScoreWeights::for_level(level);
        let components = structure_features(answer);

        let cov = coverage_score(&self.matcher, answer, keywords);
        let strct = components.score();
        let clar = clarity_score(answer, level);
        let dep = depth_score(answer);

        let final_score =
            w.coverage * cov + w.structure * strct + w.clarity * clar + w.depth * dep;

        ScoreBreakdown {
            coverage: round3(cov),
            structure: round3(strct),
            clarity: round3(clar),
            depth: round3(dep),
            final_score: round3(final_score.clamp(0.0, 1.0)),
            structure_components: components,
        }
    }
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
