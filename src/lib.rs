//! Adaptive answer scoring and difficulty progression engine for
//! technical interviews.
//!
//! `interview-core` converts free-text interview answers into bounded
//! quality scores using multi-feature heuristics (keyword coverage with
//! fuzzy matching, structural cues, clarity shaping, lexical depth),
//! classifies performance against thresholds, and drives a bounded
//! difficulty state machine that selects the next question in real time
//! while enforcing a fixed per-level question quota. All scoring is
//! deterministic — identical inputs always produce identical scores.
//!
//! The crate performs no I/O of its own: question banks and session
//! storage are boundary traits and value types owned by the calling layer.

pub mod adaptive;
pub mod scoring;
pub mod skills;
pub mod text;
pub mod types;
