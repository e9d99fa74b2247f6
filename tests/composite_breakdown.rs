use interview_core::scoring::{
    clarity_score, coverage_score, depth_score, structure_features, CompositeScorer, ScoreWeights,
};
use interview_core::text::FuzzyMatcher;
use interview_core::types::Level;

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[test]
fn breakdown_matches_recomputed_features() {
    let scorer = CompositeScorer::default();
    let matcher = FuzzyMatcher::default();
    let keywords = vec!["mutex".to_string(), "deadlock".to_string()];
    let answer = "A mutex prevents deadlock between threads by enforcing mutual exclusion, \
                  for example in a producer-consumer queue.";
    let level = Level::Intermediate;

    let bd = scorer.breakdown(answer, &keywords, level);

    let cov = coverage_score(&matcher, answer, &keywords);
    let components = structure_features(answer);
    let clar = clarity_score(answer, level);
    let dep = depth_score(answer);
    let w = ScoreWeights::for_level(level);
    let expected =
        w.coverage * cov + w.structure * components.score() + w.clarity * clar + w.depth * dep;

    assert_eq!(bd.coverage, round3(cov));
    assert_eq!(bd.structure, round3(components.score()));
    assert_eq!(bd.clarity, round3(clar));
    assert_eq!(bd.depth, round3(dep));
    assert_eq!(bd.final_score, round3(expected.clamp(0.0, 1.0)));
    assert_eq!(bd.structure_components, components);
}

#[test]
fn intermediate_scenario_lands_in_upper_middle_band() {
    let scorer = CompositeScorer::default();
    let keywords = vec!["mutex".to_string(), "deadlock".to_string()];
    let answer = "A mutex prevents deadlock between threads by enforcing mutual exclusion, \
                  for example in a producer-consumer queue.";

    let bd = scorer.breakdown(answer, &keywords, Level::Intermediate);

    assert_eq!(bd.coverage, 1.0, "both keyword phrases must match");
    assert_eq!(bd.structure_components.example, 1);
    assert_eq!(bd.structure_components.definition, 0);
    assert!(bd.final_score > 0.6, "composite was {}", bd.final_score);
}

#[test]
fn empty_answer_breakdown_is_all_zero() {
    let scorer = CompositeScorer::default();
    let keywords = vec!["mutex".to_string()];

    let bd = scorer.breakdown("", &keywords, Level::Hard);

    assert_eq!(bd.coverage, 0.0);
    assert_eq!(bd.structure, 0.0);
    assert_eq!(bd.clarity, 0.0);
    assert_eq!(bd.depth, 0.0);
    assert_eq!(bd.final_score, 0.0);
    assert_eq!(bd.structure_components.definition, 0);
    assert_eq!(bd.structure_components.example, 0);
    assert_eq!(bd.structure_components.tradeoff, 0);
}

#[test]
fn tier_weights_sum_to_one() {
    for level in [Level::Beginner, Level::Intermediate, Level::Hard] {
        let w = ScoreWeights::for_level(level);
        assert!((w.coverage + w.structure + w.clarity + w.depth - 1.0).abs() < 1e-9);
    }
    // coverage dominates everywhere; depth grows with difficulty
    let b = ScoreWeights::for_level(Level::Beginner);
    let h = ScoreWeights::for_level(Level::Hard);
    assert!(b.coverage > b.structure + b.clarity.min(b.depth));
    assert!(h.depth > b.depth);
    assert!(h.coverage < b.coverage);
}

#[test]
fn breakdown_serializes_with_final_field() {
    let scorer = CompositeScorer::default();
    let keywords = vec!["mutex".to_string()];
    let bd = scorer.breakdown("a mutex guards shared state", &keywords, Level::Beginner);

    let json = serde_json::to_value(&bd).unwrap();
    assert!(json.get("final").is_some(), "breakdown must expose `final`");
    assert!(json.get("final_score").is_none());
    assert_eq!(json["coverage"], serde_json::json!(1.0));
    assert_eq!(json["structure_components"]["definition"], 0);
}
