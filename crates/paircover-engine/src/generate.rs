//! Single-candidate construction.
//!
//! One call builds one test case from the current coverage state:
//! seed it with the heaviest uncovered pair, shuffle the remaining fill
//! order, then greedily pick each slot's value by how many uncovered
//! pairs it would form with the slots already placed. No backtracking;
//! quality comes from pool sampling, not from this pass.

use paircover_ir::Universe;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::coverage::CoverageState;
use crate::TestCase;

/// Build one candidate, or `None` once coverage is exhausted.
pub fn generate_candidate(
    universe: &Universe,
    coverage: &CoverageState,
    rng: &mut ChaCha8Rng,
) -> Option<TestCase> {
    let [v1, v2] = coverage.best_unused_pair()?;
    let n = universe.parameter_count();

    let mut case = vec![0usize; n];
    // Stored pairs hold the lower-indexed parameter's value first, so
    // first_pos < second_pos always holds here.
    let first_pos = universe.position_of(v1);
    let second_pos = universe.position_of(v2);
    case[first_pos] = v1;
    case[second_pos] = v2;

    // Fill order: identity with the two seeded positions swapped into
    // the front, then a Knuth shuffle of everything from slot 2 on.
    let mut ordering: Vec<usize> = (0..n).collect();
    ordering.swap(0, first_pos);
    ordering.swap(1, second_pos);
    for i in 2..n {
        let j = rng.gen_range(i..n);
        ordering.swap(i, j);
    }

    // Remaining slots: the first value forming the strictly most
    // still-uncovered pairs with the already-placed slots wins.
    for slot in 2..n {
        let pos = ordering[slot];
        let legal = universe.legal_values(pos);

        let mut best_value = legal[0];
        let mut highest = 0;
        for &value in legal {
            let mut captured = 0;
            for placed in &ordering[..slot] {
                // The fill order is shuffled, so the pair may sit in the
                // lookup in either orientation.
                if coverage.still_unused(value, case[*placed]) {
                    captured += 1;
                }
            }
            if captured > highest {
                highest = captured;
                best_value = value;
            }
        }
        case[pos] = best_value;
    }

    Some(case)
}
