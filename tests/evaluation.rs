use std::collections::BTreeMap;

use interview_core::adaptive::{
    evaluate_level, EvaluationError, FlagRecord, Grade, ScoringMode,
};
use interview_core::types::{Flag, FlagThresholds, Level};

const STRONG_ANSWER: &str =
    "A mutex is a lock that enforces mutual exclusion around shared state. It refers to the \
     smallest primitive that prevents a race condition. For example, a connection pool guards \
     its free list with one. However, coarse locking trades throughput for simplicity and the \
     advantages disappear under contention. Benchmarks showed roughly 40 percent latency \
     improvement after narrowing critical sections across distributed architectures, \
     replication protocols, scheduling heuristics, consistency guarantees and observability \
     pipelines.";

fn level_bank() -> BTreeMap<String, Vec<String>> {
    let mut bank = BTreeMap::new();
    bank.insert(
        "q1".to_string(),
        vec!["mutex".to_string(), "race condition".to_string()],
    );
    bank.insert("q2".to_string(), vec!["deadlock".to_string()]);
    bank
}

#[test]
fn evaluate_level_scores_every_bank_question() {
    let mut answers = BTreeMap::new();
    answers.insert("q1".to_string(), STRONG_ANSWER.to_string());
    // q2 left unanswered: scores 0, never an error

    let summary = evaluate_level(
        &answers,
        &level_bank(),
        Level::Intermediate,
        FlagThresholds::default(),
        ScoringMode::Composite,
    )
    .unwrap();

    assert_eq!(summary.per_question_scores.len(), 2);
    assert_eq!(summary.per_question_scores["q2"].score, 0.0);
    assert_eq!(summary.per_question_scores["q2"].flag, Flag::Easier);
    assert!(summary.per_question_scores["q1"].score >= 0.8);
    assert_eq!(summary.per_question_scores["q1"].flag, Flag::Harder);

    // average is the mean of the raw scores, rounded to 2 decimals
    assert!(summary.average_score > 0.0 && summary.average_score < 1.0);
    assert_eq!(
        summary.average_score,
        (summary.average_score * 100.0).round() / 100.0
    );
    assert_eq!(summary.current_level, Level::Intermediate);
    assert_eq!(
        summary.recommended_next_level,
        Level::Intermediate.next(summary.overall_flag)
    );
}

#[test]
fn evaluate_level_keyword_overlap_mode() {
    let mut answers = BTreeMap::new();
    answers.insert("q2".to_string(), "deadlock avoidance".to_string());

    let summary = evaluate_level(
        &answers,
        &level_bank(),
        Level::Beginner,
        FlagThresholds::default(),
        ScoringMode::KeywordOverlap,
    )
    .unwrap();

    assert_eq!(summary.per_question_scores["q2"].score, 1.0);
    assert_eq!(summary.per_question_scores["q1"].score, 0.0);
}

#[test]
fn evaluate_level_with_empty_bank_is_an_error() {
    let answers = BTreeMap::new();
    let empty = BTreeMap::new();
    assert!(matches!(
        evaluate_level(
            &answers,
            &empty,
            Level::Beginner,
            FlagThresholds::default(),
            ScoringMode::Composite,
        ),
        Err(EvaluationError::EmptyBank)
    ));
}

#[test]
fn flag_record_snapshots_a_summary() {
    let mut answers = BTreeMap::new();
    answers.insert("q1".to_string(), STRONG_ANSWER.to_string());
    answers.insert("q2".to_string(), STRONG_ANSWER.to_string());

    let summary = evaluate_level(
        &answers,
        &level_bank(),
        Level::Hard,
        FlagThresholds::default(),
        ScoringMode::Composite,
    )
    .unwrap();

    let record = FlagRecord::from_summary("user-7", "Core CS", &summary);
    assert_eq!(record.user_id, "user-7");
    assert_eq!(record.field, "Core CS");
    assert_eq!(record.level, Level::Hard);
    assert_eq!(record.avg_score, summary.average_score);
    assert_eq!(record.overall_flag, summary.overall_flag);
    assert_eq!(record.per_question, summary.per_question_scores);
}

#[test]
fn grade_bands_cover_the_percentage_range() {
    assert_eq!(Grade::for_percentage(95.0), Grade::APlus);
    assert_eq!(Grade::for_percentage(90.0), Grade::APlus);
    assert_eq!(Grade::for_percentage(85.0), Grade::A);
    assert_eq!(Grade::for_percentage(70.0), Grade::B);
    assert_eq!(Grade::for_percentage(65.0), Grade::C);
    assert_eq!(Grade::for_percentage(50.0), Grade::D);
    assert_eq!(Grade::for_percentage(10.0), Grade::F);

    assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
    assert!(!Grade::F.feedback().is_empty());
}
