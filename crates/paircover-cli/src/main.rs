//! paircover: pairwise (all-pairs) test case generator.
//!
//! Reads a parameter definition file, optionally an invalid-combination
//! file, and prints a test suite covering every legal value pair at
//! least once. The run is deterministic for a given seed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use paircover_engine::{generate_suite, Forbidden, GenConfig};
use paircover_ir::{parse_forbidden, parse_parameters};

mod error;
mod output;

use error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "paircover",
    version,
    about = "Pairwise (all-pairs) test case generator"
)]
struct Cli {
    /// Parameter definition file: one `name: value1, value2, ...` per line.
    params: PathBuf,

    /// Print only the number of generated test cases.
    #[arg(short = 'c', long)]
    count_only: bool,

    /// Invalid-combination file: one `p1 = v1 & p2 = v2 & ...` per line.
    #[arg(short = 'i', long, value_name = "FILE")]
    invalid: Option<PathBuf>,

    /// Seed for the deterministic RNG.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Candidates sampled per generation round.
    #[arg(long, value_name = "N", default_value_t = 20)]
    pool_size: usize,

    /// Also write the generated suite as JSON to FILE.
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let universe = parse_parameters(&read(&cli.params)?)?;
    let forbidden = match &cli.invalid {
        Some(path) => Some(Forbidden::new(parse_forbidden(&read(path)?, &universe)?)),
        None => None,
    };

    let config = GenConfig {
        seed: cli.seed,
        pool_size: cli.pool_size,
    };

    if !cli.count_only {
        print!("{}", output::render_header(&universe));
        println!("\nComputing test sets which capture all possible pairs...");
    }

    let suite = generate_suite(&universe, forbidden.as_ref(), &config);

    if cli.count_only {
        println!("There are {} test cases", suite.len());
    } else {
        println!("\nResult test sets:\n");
        print!("{}", output::render_suite(&universe, &suite));
    }

    if let Some(path) = &cli.json {
        let export = output::SuiteExport::new(&universe, &suite);
        let text = serde_json::to_string_pretty(&export)?;
        fs::write(path, text).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
