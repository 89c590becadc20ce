//! Coverage bookkeeping for the generation loop.
//!
//! [`CoverageState`] tracks which value pairs are still uncovered:
//! - `unused_pairs` — the pairs themselves, in enumeration order;
//! - `search` — a flat value-by-value lookup for O(1) covered checks;
//! - `unused_counts` — per value, how many uncovered pairs contain it,
//!   used to weight seed-pair selection.
//!
//! Pairs are enumerated over parameter index pairs `i < j`, so a stored
//! pair always holds the lower-indexed parameter's value first. The
//! lookup is populated in that orientation only; callers that see
//! values in shuffled order check both orientations.

use paircover_ir::Universe;

use crate::constraint::Forbidden;

#[derive(Debug, Clone)]
pub struct CoverageState {
    unused_pairs: Vec<[usize; 2]>,
    search: Vec<bool>,
    /// Signed: the updater decrements for every pair of an accepted
    /// case, covered or not, so counts can legitimately go negative.
    unused_counts: Vec<i64>,
    value_count: usize,
}

impl CoverageState {
    /// Enumerate the pair universe, dropping pairs the matcher rejects
    /// outright. Dropped pairs never enter the lookup or the counts;
    /// they cannot be covered and do not need to be.
    pub fn new(universe: &Universe, forbidden: Option<&Forbidden>) -> Self {
        let value_count = universe.value_count();
        let mut state = Self {
            unused_pairs: Vec::new(),
            search: vec![false; value_count * value_count],
            unused_counts: vec![0; value_count],
            value_count,
        };

        for i in 0..universe.parameter_count() {
            for j in (i + 1)..universe.parameter_count() {
                for &v1 in universe.legal_values(i) {
                    for &v2 in universe.legal_values(j) {
                        if forbidden.is_some_and(|f| f.pair_is_forbidden(v1, v2)) {
                            continue;
                        }
                        state.unused_pairs.push([v1, v2]);
                        state.search[v1 * value_count + v2] = true;
                        state.unused_counts[v1] += 1;
                        state.unused_counts[v2] += 1;
                    }
                }
            }
        }

        state
    }

    /// Number of pairs still uncovered.
    pub fn remaining(&self) -> usize {
        self.unused_pairs.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.unused_pairs.is_empty()
    }

    pub fn unused_count(&self, v: usize) -> i64 {
        self.unused_counts[v]
    }

    /// The uncovered pair maximizing `unused_counts[v1] + unused_counts[v2]`.
    /// Strict-greater comparison: ties go to the earliest pair in
    /// enumeration order. `None` once everything is covered.
    pub fn best_unused_pair(&self) -> Option<[usize; 2]> {
        if self.unused_pairs.is_empty() {
            return None;
        }
        let mut best_index = 0;
        let mut best_weight = 0;
        for (i, pair) in self.unused_pairs.iter().enumerate() {
            let weight = self.unused_counts[pair[0]] + self.unused_counts[pair[1]];
            if weight > best_weight {
                best_weight = weight;
                best_index = i;
            }
        }
        Some(self.unused_pairs[best_index])
    }

    /// Is the pair `(a, b)` still uncovered? Checks both orientations;
    /// the caller may see the values in either order.
    pub fn still_unused(&self, a: usize, b: usize) -> bool {
        self.search[a * self.value_count + b] || self.search[b * self.value_count + a]
    }

    /// How many of the case's own pairs are still uncovered. Case slots
    /// follow parameter order, which matches the stored orientation.
    pub fn pairs_captured(&self, case: &[usize]) -> usize {
        let mut captured = 0;
        for i in 0..case.len() {
            for j in (i + 1)..case.len() {
                if self.search[case[i] * self.value_count + case[j]] {
                    captured += 1;
                }
            }
        }
        captured
    }

    /// Commit an accepted case: every pair it holds becomes covered.
    ///
    /// The count decrement runs for *every* pair of the case, including
    /// pairs already covered by an earlier case, so `unused_counts` can
    /// drift negative over a run. The reference tool behaves this way
    /// and suite-for-suite output parity depends on it; termination
    /// only needs `unused_pairs` to empty, which is unaffected.
    pub fn mark_covered(&mut self, case: &[usize]) {
        for i in 0..case.len() {
            for j in (i + 1)..case.len() {
                let v1 = case[i];
                let v2 = case[j];

                self.unused_counts[v1] -= 1;
                self.unused_counts[v2] -= 1;
                self.search[v1 * self.value_count + v2] = false;

                if let Some(p) = self
                    .unused_pairs
                    .iter()
                    .position(|pair| pair[0] == v1 && pair[1] == v2)
                {
                    self.unused_pairs.remove(p);
                }
            }
        }
    }
}
