//! Console rendering of the parsed universe and the generated suite,
//! plus the JSON export shape.

use std::fmt::Write;

use paircover_engine::TestCase;
use paircover_ir::Universe;
use serde::Serialize;

/// The pre-generation dump: parameter and value counts, the flat value
/// list, the internal index layout, and the pair total.
pub fn render_header(universe: &Universe) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "- There are {} parameters",
        universe.parameter_count()
    );
    let _ = writeln!(
        out,
        "- There are {} parameter values",
        universe.value_count()
    );

    let _ = writeln!(out, "- Parameter values:");
    let _ = writeln!(out, "  {}", universe.labels().join(" "));

    let _ = writeln!(out, "- Legal values internal representation:");
    for (p, parameter) in universe.parameters().iter().enumerate() {
        let indices: Vec<String> = universe
            .legal_values(p)
            .iter()
            .map(|v| v.to_string())
            .collect();
        let _ = writeln!(out, "  * {}: {}", parameter.name, indices.join(" "));
    }

    let _ = writeln!(out, "- There are {} pairs", universe.pair_count());
    out
}

/// One line per test case: right-aligned row number, then the value
/// labels, tab-separated.
pub fn render_suite(universe: &Universe, suite: &[TestCase]) -> String {
    let mut out = String::new();
    for (row, case) in suite.iter().enumerate() {
        let labels: Vec<&str> = case.iter().map(|&v| universe.label(v)).collect();
        let _ = writeln!(out, "{:>3}\t{}", row, labels.join("\t"));
    }
    out
}

/// JSON shape for `--json`: parameter names plus label rows, in
/// generation order.
#[derive(Debug, Serialize)]
pub struct SuiteExport {
    pub parameters: Vec<String>,
    pub cases: Vec<Vec<String>>,
}

impl SuiteExport {
    pub fn new(universe: &Universe, suite: &[TestCase]) -> Self {
        Self {
            parameters: universe
                .parameters()
                .iter()
                .map(|p| p.name.clone())
                .collect(),
            cases: suite
                .iter()
                .map(|case| {
                    case.iter()
                        .map(|&v| universe.label(v).to_string())
                        .collect()
                })
                .collect(),
        }
    }
}
