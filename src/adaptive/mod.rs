pub mod bank;
pub mod evaluation;
pub mod selector;

pub use bank::{InMemoryBank, QuestionBank};
pub use evaluation::{
    evaluate_level, EvaluationError, EvaluationSummary, FlagRecord, Grade, QuestionResult,
    ScoringMode,
};
pub use selector::{
    fixed_question_set, AdaptiveSelector, LevelQuotas, SelectorConfig, SessionError, StepOutcome,
};
