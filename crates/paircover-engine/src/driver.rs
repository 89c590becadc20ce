//! The generation loop.
//!
//! Round after round: sample a pool, keep the best valid candidate,
//! commit it, until no uncovered pair remains. Each accepted case
//! contains its own seed pair, which was uncovered when the round
//! started, so every round strictly shrinks the uncovered set and the
//! loop is bounded by the initial pair count.

use paircover_ir::Universe;

use crate::constraint::Forbidden;
use crate::coverage::CoverageState;
use crate::pool::select_candidate;
use crate::rng::run_rng;
use crate::TestCase;

/// Knobs for a generation run. No ambient state: the seed and pool
/// size travel through every component explicitly.
#[derive(Debug, Clone, Copy)]
pub struct GenConfig {
    /// Seed for the run-wide RNG. Same seed + same input = same suite.
    pub seed: u64,
    /// Candidates sampled per round.
    pub pool_size: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            pool_size: 20,
        }
    }
}

/// Generate a suite covering every reachable pair at least once.
/// Insertion order is generation order; no deduplication.
pub fn generate_suite(
    universe: &Universe,
    forbidden: Option<&Forbidden>,
    config: &GenConfig,
) -> Vec<TestCase> {
    let mut rng = run_rng(config.seed);
    let mut coverage = CoverageState::new(universe, forbidden);
    let mut suite = Vec::new();

    while let Some(winner) =
        select_candidate(universe, &coverage, forbidden, config.pool_size, &mut rng)
    {
        coverage.mark_covered(&winner);
        suite.push(winner);
    }

    suite
}
