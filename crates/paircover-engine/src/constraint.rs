//! Invalid-combination matching.
//!
//! A [`ForbiddenCombination`] is a conjunction of `parameter = value`
//! terms over a subset of the parameters. Matching counts satisfied
//! terms: only a *complete* match rejects. A two-term combination can
//! therefore prune a pair from the universe outright, while a wider
//! one can only reject a fully assembled test case.

use paircover_ir::ForbiddenCombination;

/// The active set of invalid combinations. Built once, immutable.
#[derive(Debug, Clone)]
pub struct Forbidden {
    combinations: Vec<ForbiddenCombination>,
}

impl Forbidden {
    pub fn new(combinations: Vec<ForbiddenCombination>) -> Self {
        Self { combinations }
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    /// True iff some combination's terms are all satisfied looking at
    /// `v1` and `v2` alone.
    pub fn pair_is_forbidden(&self, v1: usize, v2: usize) -> bool {
        self.combinations.iter().any(|combo| {
            !combo.terms.is_empty()
                && combo
                    .terms
                    .iter()
                    .all(|term| term.value == v1 || term.value == v2)
        })
    }

    /// True iff some combination's terms are all satisfied by the full
    /// assignment.
    pub fn case_is_forbidden(&self, case: &[usize]) -> bool {
        self.combinations.iter().any(|combo| {
            !combo.terms.is_empty()
                && combo
                    .terms
                    .iter()
                    .all(|term| case[term.parameter] == term.value)
        })
    }
}
