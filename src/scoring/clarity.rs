use crate::text::word_count;
use crate::types::Level;

const HEDGES: [&str; 7] = [
    "maybe",
    "probably",
    "i think",
    "i guess",
    "not sure",
    "kind of",
    "sort of",
];

const HEDGE_PENALTY: f64 = 0.1;
const HEDGE_PENALTY_CAP: f64 = 0.3;

/// Target word-count window per difficulty tier.
pub fn length_window(level: Level) -> (usize, usize) {
    match level {
        Level::Beginner => (30, 180),
        Level::Intermediate => (40, 220),
        Level::Hard => (50, 260),
    }
}

/// Length-appropriateness minus a hedging penalty, in [0,1].
///
/// Below the window the score ramps linearly up to 1 at `low`. Inside the
/// window it is 1. Above `high` it decays linearly, floored at 0.5 when
/// the count reaches 2×`high` — verbosity is penalized but never
/// catastrophically. Each detected hedge phrase costs 0.1, capped at 0.3.
pub fn clarity_score(answer: &str, level: Level) -> f64 {
    if answer.is_empty() {
        return 0.0;
    }

    let wc = word_count(answer);
    let (low, high) = length_window(level);

    let length_score = if wc == 0 {
        0.0
    } else if wc < low {
        wc as f64 / low as f64
    } else if wc > high {
        (1.0 - (wc - high) as f64 / high as f64).max(0.5)
    } else {
        1.0
    };

    let text = answer.to_lowercase();
    let hedge_hits = HEDGES.iter().filter(|h| text.contains(*h)).count();
    let hedge_penalty = (HEDGE_PENALTY * hedge_hits as f64).min(HEDGE_PENALTY_CAP);

    (length_score - hedge_penalty).max(0.0)
}
