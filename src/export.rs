//! Exports the configured variables to files.
//!
//! Variables are processed in listed order, one at a time. Every name gets
//! exactly one [`VariableResult`]; a missing variable or a failed write is
//! reported and skipped, never fatal.
//!
//! # Example
//!
//! ```no_run
//! use substantiate::config::Config;
//! use substantiate::env::ProcessEnv;
//! use substantiate::export::export_variables;
//!
//! let config = Config::resolve("/secrets", "API_KEY,DATABASE_URL", None);
//! let report = export_variables(&config, &ProcessEnv);
//! println!("wrote {} file(s)", report.written());
//! ```

use crate::config::Config;
use crate::env::EnvSource;
use crate::error::WriteError;
use crate::writer::write_variable;
use std::path::{Path, PathBuf};

/// What happened to a single variable.
#[derive(Debug)]
pub enum Outcome {
    /// The file was written at this path
    Written(PathBuf),
    /// The variable is not set in the environment
    Missing,
    /// Writing failed
    WriteError(WriteError),
}

/// Outcome for one listed name.
#[derive(Debug)]
pub struct VariableResult {
    pub name: String,
    pub outcome: Outcome,
}

impl VariableResult {
    pub fn is_written(&self) -> bool {
        matches!(self.outcome, Outcome::Written(_))
    }
}

/// Results of one export run, in listed order.
#[derive(Debug)]
pub struct ExportReport {
    directory: PathBuf,
    results: Vec<VariableResult>,
}

impl ExportReport {
    /// Directory the run wrote into.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Per-variable results.
    pub fn results(&self) -> &[VariableResult] {
        &self.results
    }

    /// Number of files written.
    pub fn written(&self) -> usize {
        self.results.iter().filter(|r| r.is_written()).count()
    }

    pub fn missing(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Missing))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::WriteError(_)))
            .count()
    }
}

/// Write every variable in `config` that `env` knows about.
///
/// Prints a notice on stdout for each missing variable and each failed
/// write, then returns the full report. Secret values are never printed.
pub fn export_variables<E: EnvSource>(config: &Config, env: &E) -> ExportReport {
    let mut results = Vec::with_capacity(config.variables.len());

    for name in &config.variables {
        let outcome = match env.lookup(name) {
            Some(value) => match write_variable(config.directory(), name, value.as_encoded_bytes()) {
                Ok(path) => Outcome::Written(path),
                Err(e) => {
                    println!("Error writing to file: {}", e);
                    tracing::warn!(
                        variable = %name,
                        path = %e.path().display(),
                        error = %e,
                        "failed to write variable"
                    );
                    Outcome::WriteError(e)
                }
            },
            None => {
                println!("Environment variable {} does not exist.", name);
                Outcome::Missing
            }
        };

        results.push(VariableResult {
            name: name.clone(),
            outcome,
        });
    }

    ExportReport {
        directory: config.directory.clone(),
        results,
    }
}
