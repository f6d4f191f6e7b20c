// Substantiate Configuration Module
//
// Resolves the target directory and the list of variable names from the
// command-line flags and the SUBSTANTIATE fallback variable.

use crate::env::EnvSource;
use std::path::{Path, PathBuf};

/// Directory used when `-directory` is not given.
pub const DEFAULT_DIRECTORY: &str = "/secrets";

/// Environment variable holding the fallback comma-separated list.
pub const FALLBACK_VAR: &str = "SUBSTANTIATE";

/// Resolved run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the files are written into
    pub directory: PathBuf,

    /// Variable names in listed order, duplicates and empty entries included
    pub variables: Vec<String>,
}

impl Config {
    /// Resolve from the flag values and the fallback list.
    ///
    /// A non-empty `vars_flag` wins over `fallback`. The chosen list is split
    /// on literal commas with no trimming, so `"A,B,"` yields `["A", "B", ""]`.
    /// When both are empty (or the fallback is unset) no variables are selected.
    pub fn resolve<P: Into<PathBuf>>(directory: P, vars_flag: &str, fallback: Option<&str>) -> Self {
        let raw = if vars_flag.is_empty() {
            fallback.unwrap_or_default()
        } else {
            vars_flag
        };

        let variables = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split(',').map(str::to_string).collect()
        };

        Self {
            directory: directory.into(),
            variables,
        }
    }

    /// Resolve using `SUBSTANTIATE` from `env` as the fallback list.
    ///
    /// The list holds variable names, so it is read lossily.
    pub fn from_env<P: Into<PathBuf>, E: EnvSource>(directory: P, vars_flag: &str, env: &E) -> Self {
        let fallback = env.lookup(FALLBACK_VAR);
        let fallback = fallback.as_deref().map(|list| list.to_string_lossy());
        Self::resolve(directory, vars_flag, fallback.as_deref())
    }

    /// Whether there is nothing to export.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Target directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
