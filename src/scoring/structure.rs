use serde::{Deserialize, Serialize};

/// Definitional cues are only meaningful near the start of an answer.
const DEFINITION_WINDOW_CHARS: usize = 160;

const DEFINITION_CUES: [&str; 5] = [" is a ", " is an ", " refers to ", " is used to ", " means "];

const EXAMPLE_CUES: [&str; 4] = ["for example", "e.g.", "such as", "for instance"];

const TRADEOFF_CUES: [&str; 10] = [
    "however",
    "but",
    "versus",
    "vs",
    "compared to",
    "trade-off",
    "advantages",
    "disadvantages",
    "pros",
    "cons",
];

/// Binary discourse-cue hits, exposed in the score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructureComponents {
    pub definition: u8,
    pub example: u8,
    pub tradeoff: u8,
}

impl StructureComponents {
    /// Definition dominates: it is the strongest signal that the answer
    /// actually addresses the asked concept.
    pub fn score(&self) -> f64 {
        0.5 * f64::from(self.definition) + 0.25 * f64::from(self.example) + 0.25 * f64::from(self.tradeoff)
    }
}

/// Detect definitional, exemplifying, and comparative discourse cues.
pub fn structure_features(answer: &str) -> StructureComponents {
    if answer.is_empty() {
        return StructureComponents::default();
    }

    let text = answer.trim().to_lowercase();
    let head: String = text.chars().take(DEFINITION_WINDOW_CHARS).collect();

    StructureComponents {
        definition: u8::from(DEFINITION_CUES.iter().any(|cue| head.contains(cue))),
        example: u8::from(EXAMPLE_CUES.iter().any(|cue| text.contains(cue))),
        tradeoff: u8::from(TRADEOFF_CUES.iter().any(|cue| text.contains(cue))),
    }
}
