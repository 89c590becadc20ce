use serde::{Deserialize, Serialize};

/// A declared parameter: a name and its legal values in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub values: Vec<String>,
}

/// The full set of parameters plus the derived index tables everything
/// downstream works with.
///
/// Every value gets a single global index, assigned by flattening in
/// declaration order: parameter 0's values first, then parameter 1's,
/// and so on. All pair bookkeeping is done over these global indices;
/// labels are only looked up again at output time.
#[derive(Debug, Clone)]
pub struct Universe {
    parameters: Vec<Parameter>,
    /// Global value indices per parameter, in local declaration order.
    legal: Vec<Vec<usize>>,
    /// Label of each global value index.
    labels: Vec<String>,
    /// Owning parameter index of each global value index.
    position: Vec<usize>,
}

impl Universe {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        let mut legal = Vec::with_capacity(parameters.len());
        let mut labels = Vec::new();
        let mut position = Vec::new();

        for (p, parameter) in parameters.iter().enumerate() {
            let mut row = Vec::with_capacity(parameter.values.len());
            for value in &parameter.values {
                row.push(labels.len());
                labels.push(value.clone());
                position.push(p);
            }
            legal.push(row);
        }

        Self {
            parameters,
            legal,
            labels,
            position,
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Total number of values across all parameters.
    pub fn value_count(&self) -> usize {
        self.labels.len()
    }

    /// Size of the unfiltered pair universe:
    /// sum over i < j of |values(i)| * |values(j)|.
    pub fn pair_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.legal.len() {
            for j in (i + 1)..self.legal.len() {
                count += self.legal[i].len() * self.legal[j].len();
            }
        }
        count
    }

    /// Global value indices legal for parameter `p`, in declaration order.
    pub fn legal_values(&self, p: usize) -> &[usize] {
        &self.legal[p]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, v: usize) -> &str {
        &self.labels[v]
    }

    /// The parameter a global value index belongs to, i.e. the slot it
    /// must occupy in a test case.
    pub fn position_of(&self, v: usize) -> usize {
        self.position[v]
    }

    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.name == name)
    }

    /// Resolve a value label within parameter `p` to its global index.
    pub fn value_index(&self, p: usize, label: &str) -> Option<usize> {
        let local = self.parameters[p].values.iter().position(|v| v == label)?;
        Some(self.legal[p][local])
    }
}

/// One `name = value` term of an invalid combination, resolved to indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub parameter: usize,
    /// Global value index the parameter must hold for this term to match.
    pub value: usize,
}

/// An invalid combination: a conjunction of constraints over a subset of
/// the parameters. A test case (or a pair) violates it only when *every*
/// term matches; partial matches are fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenCombination {
    pub terms: Vec<Constraint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_universe() -> Universe {
        Universe::new(vec![
            Parameter {
                name: "A".into(),
                values: vec!["a1".into(), "a2".into()],
            },
            Parameter {
                name: "B".into(),
                values: vec!["b1".into(), "b2".into(), "b3".into()],
            },
            Parameter {
                name: "C".into(),
                values: vec!["c1".into(), "c2".into()],
            },
        ])
    }

    #[test]
    fn test_global_indices_flattened_in_declaration_order() {
        let u = abc_universe();
        assert_eq!(u.legal_values(0), &[0, 1]);
        assert_eq!(u.legal_values(1), &[2, 3, 4]);
        assert_eq!(u.legal_values(2), &[5, 6]);
        assert_eq!(u.label(3), "b2");
    }

    #[test]
    fn test_position_inverts_flattening() {
        let u = abc_universe();
        for p in 0..u.parameter_count() {
            for &v in u.legal_values(p) {
                assert_eq!(u.position_of(v), p);
            }
        }
    }

    #[test]
    fn test_pair_count() {
        // A x B = 6, A x C = 4, B x C = 6.
        assert_eq!(abc_universe().pair_count(), 16);
    }

    #[test]
    fn test_name_and_value_resolution() {
        let u = abc_universe();
        assert_eq!(u.parameter_index("B"), Some(1));
        assert_eq!(u.parameter_index("D"), None);
        assert_eq!(u.value_index(1, "b3"), Some(4));
        assert_eq!(u.value_index(1, "a1"), None);
    }
}
