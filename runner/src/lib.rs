//! Tamper Runner
//!
//! Load a JSON parameter document, apply constraint-violation mutations to
//! every leaf for a number of rounds and print a JSON report.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tamper_core::{Parameter, ParameterError, Value};
use tamper_generator::{ExtendedRandom, RandomValueProvider, ValueProvider};
use tamper_mutation::{
    ConfigError, ConstraintViolationMutator, MutationErrorKind, MutationOutcome, MutationStats,
    MutatorConfig,
};
use thiserror::Error;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Parser, Debug)]
#[command(
    name = "tamper-runner",
    version,
    about = "Assign constraint-violating values to API parameters"
)]
pub struct Cli {
    /// Parameter document (JSON).
    pub input: PathBuf,
    /// Mutator configuration (JSON); missing keys take defaults.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Random seed for reproducibility.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    /// Number of mutation rounds over the document.
    #[arg(long, default_value_t = 1)]
    pub rounds: usize,
    /// Assign random values to leaves without one before mutating.
    #[arg(long)]
    pub fill: bool,
    /// Exit with status 2 when any mutation failed.
    #[arg(long)]
    pub fail_on_error: bool,
    /// Pretty-print the report.
    #[arg(long)]
    pub pretty: bool,
}

/// Input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDocument {
    pub parameters: Vec<Parameter>,
}

impl ParameterDocument {
    /// Validate every parameter.
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.parameters.iter().try_for_each(Parameter::validate)
    }
}

/// Errors that stop a run before any mutation.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid parameter: {0}")]
    Parameter(#[from] ParameterError),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to serialize report: {0}")]
    Report(#[source] serde_json::Error),
}

/// A failed mutation attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryError {
    pub kind: MutationErrorKind,
    pub message: String,
}

/// One mutation attempt on one leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub round: usize,
    pub parameter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<MutationOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EntryError>,
    /// Value after the attempt.
    pub value: Value,
}

impl ReportEntry {
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub rounds: usize,
    pub entries: Vec<ReportEntry>,
    pub summary: MutationStats,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(ReportEntry::is_failure)
    }
}

pub fn run(cli: Cli) -> ExitCode {
    let report = match execute(&cli) {
        Ok(report) => report,
        Err(e) => return error_exit(&e),
    };

    let payload = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match payload {
        Ok(payload) => println!("{payload}"),
        Err(e) => return error_exit(&RunnerError::Report(e)),
    }

    if cli.fail_on_error && report.has_failures() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

/// Load inputs named by `cli` and run the mutation rounds.
pub fn execute(cli: &Cli) -> Result<RunReport, RunnerError> {
    let document = load_document(&cli.input)?;
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MutatorConfig::default(),
    };
    mutate_document(&document, config, cli.seed, cli.rounds, cli.fill)
}

pub fn load_document(path: &Path) -> Result<ParameterDocument, RunnerError> {
    let document: ParameterDocument = read_json(path)?;
    document.validate()?;
    debug!(
        "loaded {} parameters from {}",
        document.parameters.len(),
        path.display()
    );
    Ok(document)
}

pub fn load_config(path: &Path) -> Result<MutatorConfig, RunnerError> {
    let config: MutatorConfig = read_json(path)?;
    config.validate()?;
    Ok(config)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, RunnerError> {
    let raw = fs::read_to_string(path).map_err(|source| RunnerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| RunnerError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Run `rounds` passes over a fresh copy of `document`.
///
/// A single mutator is shared across rounds so each round draws new values.
/// With `fill`, leaves without a value are first given one by
/// `RandomValueProvider`.
pub fn mutate_document(
    document: &ParameterDocument,
    config: MutatorConfig,
    seed: u64,
    rounds: usize,
    fill: bool,
) -> Result<RunReport, RunnerError> {
    let provider = RandomValueProvider::new();
    let mut mutator =
        ConstraintViolationMutator::with_config(ExtendedRandom::seeded(seed), provider, config)?;
    let mut filler = ExtendedRandom::seeded(seed.wrapping_add(1));
    let mut entries = Vec::new();

    for round in 0..rounds {
        let mut parameters = document.parameters.clone();
        for leaf in parameters.iter_mut().flat_map(Parameter::leaves_mut) {
            if fill && !leaf.has_value() {
                provider.assign(leaf, &mut filler);
            }
            let result = mutator.try_mutate(leaf);
            let (outcome, error) = match result {
                Ok(outcome) => (Some(outcome), None),
                Err(e) => (
                    None,
                    Some(EntryError {
                        kind: e.kind(),
                        message: e.to_string(),
                    }),
                ),
            };
            entries.push(ReportEntry {
                round,
                parameter: leaf.name.clone(),
                outcome,
                error,
                value: leaf.value().clone(),
            });
        }
    }

    let summary = mutator.stats().clone();
    info!(
        "{} rounds: {} mutated, {} skipped, {} failed",
        rounds,
        summary.mutated,
        summary.total_skipped(),
        summary.total_failed()
    );
    Ok(RunReport {
        seed,
        rounds,
        entries,
        summary,
    })
}

fn error_exit(error: &RunnerError) -> ExitCode {
    eprintln!("{error}");
    ExitCode::from(1)
}
