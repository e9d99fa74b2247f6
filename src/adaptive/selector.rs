use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::adaptive::bank::QuestionBank;
use crate::adaptive::evaluation::{EvaluationError, EvaluationSummary, QuestionResult};
use crate::scoring::{round2, CompositeScorer, ScoreBreakdown};
use crate::types::level::LEVEL_ORDER;
use crate::types::{AnsweredItem, Flag, FlagThresholds, Level, Question, SessionAdaptiveState};

/// Hard per-tier caps for one interview. The session always terminates
/// with exactly `total()` answered items when the bank is large enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelQuotas {
    pub beginner: usize,
    pub intermediate: usize,
    pub hard: usize,
}

impl Default for LevelQuotas {
    /// Legacy distribution: 4 beginner / 3 intermediate / 3 hard.
    fn default() -> Self {
        Self {
            beginner: 4,
            intermediate: 3,
            hard: 3,
        }
    }
}

impl LevelQuotas {
    /// Same cap for every tier, e.g. `uniform(3)` for a 9-question interview.
    pub fn uniform(per_level: usize) -> Self {
        Self {
            beginner: per_level,
            intermediate: per_level,
            hard: per_level,
        }
    }

    pub fn cap(&self, level: Level) -> usize {
        match level {
            Level::Beginner => self.beginner,
            Level::Intermediate => self.intermediate,
            Level::Hard => self.hard,
        }
    }

    pub fn total(&self) -> usize {
        self.beginner + self.intermediate + self.hard
    }
}

/// Tunables for the adaptive selection loop.
///
/// The rolling-average pace thresholds (`escalate_above` / `descend_below`)
/// and the per-answer flag thresholds are deliberately independent knobs;
/// they drive different mechanisms and need not agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub quotas: LevelQuotas,
    /// Number of most recent answers in the rolling average.
    pub rolling_window: usize,
    /// Rolling average strictly above this escalates the tier.
    pub escalate_above: f64,
    /// Rolling average strictly below this de-escalates the tier.
    pub descend_below: f64,
    /// Maximum skill-matched questions fetched from the bank per step.
    pub pool_limit: usize,
    /// Fixed seed for the candidate shuffle; `None` draws from entropy.
    pub shuffle_seed: Option<u64>,
    pub flag_thresholds: FlagThresholds,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            quotas: LevelQuotas::default(),
            rolling_window: 2,
            escalate_above: 0.75,
            descend_below: 0.40,
            pool_limit: 300,
            shuffle_seed: None,
            flag_thresholds: FlagThresholds::default(),
        }
    }
}

/// Result of one answer submission.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Session continues; `next` is already recorded as the outstanding
    /// question on the session state.
    Continue {
        breakdown: ScoreBreakdown,
        flag: Flag,
        next: Question,
    },
    /// Terminal: quota total reached, or the bank ran out of unused
    /// questions (a defined outcome, not an error).
    Complete { breakdown: ScoreBreakdown, flag: Flag },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no question outstanding for this session")]
    NoOutstandingQuestion,
    #[error("session already reached its question total")]
    SessionComplete,
}

/// Orchestrates one live interview: rolling-performance evaluation,
/// quota enforcement, and duplicate avoidance.
///
/// The selector itself is stateless across sessions; all per-interview
/// state lives in the [`SessionAdaptiveState`] owned by the caller, which
/// must guarantee at most one concurrent writer per session.
pub struct AdaptiveSelector<B> {
    bank: B,
    config: SelectorConfig,
    scorer: CompositeScorer,
}

impl<B: QuestionBank> AdaptiveSelector<B> {
    pub fn new(bank: B) -> Self {
        Self::with_config(bank, SelectorConfig::default())
    }

    pub fn with_config(bank: B, config: SelectorConfig) -> Self {
        Self {
            bank,
            config,
            scorer: CompositeScorer::default(),
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Start a session and issue its first question. A `None`
    /// `current_question` means the bank is empty and the session is
    /// already terminal.
    pub fn begin(&self, skills: Vec<String>, base_level: Level) -> SessionAdaptiveState {
        let mut state =
            SessionAdaptiveState::new(skills, base_level, self.config.quotas.total());
        state.current_question = self.next_question(&state);
        state
    }

    /// Score the outstanding question, append the answered item, and
    /// select the next question. Strictly sequential within a session:
    /// Collecting → Scoring → Selecting → Collecting | Complete.
    pub fn submit_answer(
        &self,
        state: &mut SessionAdaptiveState,
        answer: &str,
    ) -> Result<StepOutcome, SessionError> {
        if state.is_complete() {
            return Err(SessionError::SessionComplete);
        }
        let question = state
            .current_question
            .take()
            .ok_or(SessionError::NoOutstandingQuestion)?;

        let breakdown = self
            .scorer
            .breakdown(answer, &question.keywords, question.level);
        let flag = Flag::for_score(breakdown.final_score, self.config.flag_thresholds);

        state.answered.push(AnsweredItem {
            question_text: question.text,
            level: question.level,
            score: breakdown.final_score,
        });

        match self.next_question(state) {
            Some(next) => {
                state.current_question = Some(next.clone());
                Ok(StepOutcome::Continue {
                    breakdown,
                    flag,
                    next,
                })
            }
            None => Ok(StepOutcome::Complete { breakdown, flag }),
        }
    }

    /// Pick the next question for the session, or `None` when the session
    /// is terminal (quota total reached or bank exhausted).
    pub fn next_question(&self, state: &SessionAdaptiveState) -> Option<Question> {
        if state.answered.len() >= state.target_total {
            return None;
        }

        let used: HashSet<&str> = state.used_texts().into_iter().collect();
        let desired = self.desired_level(state);
        let selected = self.enforce_quotas(state, desired);

        let mut rng = self.rng();
        let mut pool = self.bank.by_skills(&state.skills, self.config.pool_limit);
        if pool.is_empty() {
            pool = self.bank.all();
        }
        pool.shuffle(&mut rng);

        // Skill-matched candidates at the selected tier.
        if let Some(q) = pick(&pool, Some(selected), &used) {
            return Some(q);
        }

        // Any question of that tier from the whole bank.
        let mut everything = self.bank.all();
        everything.shuffle(&mut rng);
        if let Some(q) = pick(&everything, Some(selected), &used) {
            return Some(q);
        }

        // Any unused question regardless of tier.
        let fallback = pick(&everything, None, &used);
        if fallback.is_none() {
            debug!(
                answered = state.answered.len(),
                target = state.target_total,
                "question bank exhausted, ending session early"
            );
        }
        fallback
    }

    /// Produce the final evaluation for a completed (or abandoned)
    /// session. The calling layer persists this and applies
    /// `recommended_next_level` to the user's profile.
    pub fn finalize(
        &self,
        state: &SessionAdaptiveState,
    ) -> Result<EvaluationSummary, EvaluationError> {
        if state.answered.is_empty() {
            return Err(EvaluationError::EmptySession);
        }

        let mut per_question = std::collections::BTreeMap::new();
        let mut total = 0.0;
        for item in &state.answered {
            let flag = Flag::for_score(item.score, self.config.flag_thresholds);
            per_question.insert(
                item.question_text.clone(),
                QuestionResult {
                    score: round2(item.score),
                    flag,
                },
            );
            total += item.score;
        }

        let average_score = round2(total / state.answered.len() as f64);
        let overall_flag = Flag::for_score(average_score, self.config.flag_thresholds);
        let current_level = state.working_level();

        Ok(EvaluationSummary {
            per_question_scores: per_question,
            average_score,
            overall_flag,
            current_level,
            recommended_next_level: current_level.next(overall_flag),
        })
    }

    /// Performance-driven tier before quota constraints: rolling average
    /// over the last `rolling_window` answers, escalating or descending
    /// from the last answered tier when it crosses the pace thresholds.
    fn desired_level(&self, state: &SessionAdaptiveState) -> Level {
        let last_level = state.working_level();
        let start = state
            .answered
            .len()
            .saturating_sub(self.config.rolling_window);
        let recent = &state.answered[start..];
        if recent.is_empty() {
            return last_level;
        }

        let avg: f64 = recent.iter().map(|a| a.score).sum::<f64>() / recent.len() as f64;

        if avg > self.config.escalate_above {
            if let Some(up) = last_level.escalated() {
                debug!(rolling_avg = avg, from = %last_level, to = %up, "escalating difficulty");
                return up;
            }
        } else if avg < self.config.descend_below {
            if let Some(down) = last_level.descended() {
                debug!(rolling_avg = avg, from = %last_level, to = %down, "de-escalating difficulty");
                return down;
            }
        }
        last_level
    }

    /// If the desired tier's quota is exhausted, take the first tier with
    /// remaining quota in beginner→intermediate→hard priority order. This
    /// overrides the performance-driven choice so the interview always
    /// terminates at exactly the configured total.
    fn enforce_quotas(&self, state: &SessionAdaptiveState, desired: Level) -> Level {
        let counts = |level: Level| {
            state
                .answered
                .iter()
                .filter(|a| a.level == level)
                .count()
        };

        if counts(desired) < self.config.quotas.cap(desired) {
            return desired;
        }

        for level in LEVEL_ORDER {
            if counts(level) < self.config.quotas.cap(level) {
                debug!(desired = %desired, fallback = %level, "tier quota exhausted, overriding");
                return level;
            }
        }
        // Unreachable while answered < target_total, since the caps sum
        // to the target.
        desired
    }

    fn rng(&self) -> ChaCha20Rng {
        match self.config.shuffle_seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}

fn pick(pool: &[Question], level: Option<Level>, used: &HashSet<&str>) -> Option<Question> {
    pool.iter()
        .find(|q| level.map_or(true, |l| q.level == l) && !used.contains(q.text.as_str()))
        .cloned()
}

/// Legacy non-adaptive mode: a fixed question set honoring the per-tier
/// quotas, with any shortfall filled from the remaining pool.
pub fn fixed_question_set<B: QuestionBank>(
    bank: &B,
    skills: &[String],
    quotas: LevelQuotas,
    pool_limit: usize,
) -> Vec<Question> {
    let mut pool = bank.by_skills(skills, pool_limit);
    if pool.is_empty() {
        pool = bank.all();
    }
    let total = quotas.total();

    let mut selected: Vec<Question> = Vec::with_capacity(total);
    for level in LEVEL_ORDER {
        selected.extend(
            pool.iter()
                .filter(|q| q.level == level)
                .take(quotas.cap(level))
                .cloned(),
        );
    }

    if selected.len() < total {
        let chosen: HashSet<&str> = selected.iter().map(|q| q.text.as_str()).collect();
        let remainder: Vec<Question> = pool
            .iter()
            .filter(|q| !chosen.contains(q.text.as_str()))
            .take(total - selected.len())
            .cloned()
            .collect();
        selected.extend(remainder);
    }

    selected.truncate(total);
    selected
}
