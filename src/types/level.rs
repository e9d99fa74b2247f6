use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered difficulty tier. Transitions are ±1 clamped to the ends —
/// a session never skips a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Hard,
}

pub const LEVEL_ORDER: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Hard];

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Hard => "hard",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Next tier after a difficulty flag, clamped at both ends.
    pub fn next(self, flag: Flag) -> Level {
        let idx = self.index();
        match flag {
            Flag::Easier => LEVEL_ORDER[idx.saturating_sub(1)],
            Flag::Harder => LEVEL_ORDER[(idx + 1).min(LEVEL_ORDER.len() - 1)],
            Flag::Same => self,
        }
    }

    /// Escalation target, if any (beginner→intermediate, intermediate→hard).
    pub fn escalated(self) -> Option<Level> {
        match self {
            Level::Beginner => Some(Level::Intermediate),
            Level::Intermediate => Some(Level::Hard),
            Level::Hard => None,
        }
    }

    /// De-escalation target, if any (hard→intermediate, intermediate→beginner).
    pub fn descended(self) -> Option<Level> {
        match self {
            Level::Hard => Some(Level::Intermediate),
            Level::Intermediate => Some(Level::Beginner),
            Level::Beginner => None,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Beginner
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = std::convert::Infallible;

    /// Unrecognized labels degrade to `Beginner` rather than failing;
    /// stored level strings come from external data of uneven quality.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "intermediate" => Level::Intermediate,
            "hard" => Level::Hard,
            _ => Level::Beginner,
        })
    }
}

/// Coarse difficulty-adjustment signal derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    Easier,
    Same,
    Harder,
}

impl Flag {
    /// Classify a score in [0,1]: below `same` → Easier, at or above
    /// `higher` → Harder, otherwise Same.
    pub fn for_score(score: f64, thresholds: FlagThresholds) -> Flag {
        if score < thresholds.same {
            Flag::Easier
        } else if score >= thresholds.higher {
            Flag::Harder
        } else {
            Flag::Same
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Easier => "Easier",
            Flag::Same => "Same",
            Flag::Harder => "Harder",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score cut points for flag classification. Distinct from the selector's
/// rolling-average pace thresholds; the two are configured independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlagThresholds {
    /// Scores below this are flagged Easier.
    pub same: f64,
    /// Scores at or above this are flagged Harder.
    pub higher: f64,
}

impl Default for FlagThresholds {
    fn default() -> Self {
        Self {
            same: 0.5,
            higher: 0.8,
        }
    }
}
