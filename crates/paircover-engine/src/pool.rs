//! Per-round candidate pool.
//!
//! Each round samples `pool_size` candidates and keeps the one whose
//! own pairs hit the most still-uncovered entries. Candidates that
//! violate an invalid combination are skipped outright; they never win
//! on score. If nothing scores above the zero baseline the first
//! candidate is retained as a fallback, so a round always yields a
//! case and never panics.

use paircover_ir::Universe;
use rand_chacha::ChaCha8Rng;

use crate::constraint::Forbidden;
use crate::coverage::CoverageState;
use crate::generate::generate_candidate;
use crate::TestCase;

/// Run one selection round. `None` once coverage is exhausted.
pub fn select_candidate(
    universe: &Universe,
    coverage: &CoverageState,
    forbidden: Option<&Forbidden>,
    pool_size: usize,
    rng: &mut ChaCha8Rng,
) -> Option<TestCase> {
    let pool_size = pool_size.max(1);

    let mut pool = Vec::with_capacity(pool_size);
    for _ in 0..pool_size {
        pool.push(generate_candidate(universe, coverage, rng)?);
    }

    let mut best_index = 0;
    let mut most_captured = 0;
    for (i, candidate) in pool.iter().enumerate() {
        if forbidden.is_some_and(|f| f.case_is_forbidden(candidate)) {
            continue;
        }
        let captured = coverage.pairs_captured(candidate);
        if captured > most_captured {
            most_captured = captured;
            best_index = i;
        }
    }

    Some(pool.swap_remove(best_index))
}
