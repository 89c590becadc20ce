//! Coverage-driven pairwise test case generation.
//!
//! The engine owns the whole greedy loop:
//! - [`constraint`] — rejects pairs and full cases that hit a declared
//!   invalid combination.
//! - [`coverage`] — the set of still-uncovered pairs plus the weight and
//!   lookup tables that drive candidate construction.
//! - [`generate`] — builds one randomized, coverage-aware candidate.
//! - [`pool`] — samples a pool of candidates per round and keeps the
//!   best valid one.
//! - [`driver`] — repeats pool selection and coverage updates until
//!   every reachable pair is covered.
//!
//! All randomness comes from one ChaCha8 stream seeded at the start of
//! the run, so the same seed and input always reproduce the same suite.

pub mod constraint;
pub mod coverage;
pub mod driver;
pub mod generate;
pub mod pool;
pub mod rng;

pub use constraint::Forbidden;
pub use coverage::CoverageState;
pub use driver::{generate_suite, GenConfig};

/// One generated test case: a global value index per parameter,
/// indexed by parameter position.
pub type TestCase = Vec<usize>;
