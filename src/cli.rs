//! Command-line interface.
//!
//! Flags follow the conventions of the tool this replaces:
//!
//! - Long flags may be written with a single dash (`-directory /out`,
//!   `-vars=A,B`); they are rewritten to their double-dash form before clap
//!   sees them
//! - A flag value may itself start with a dash (`-directory -out`)
//! - Flag parsing stops at the first positional argument; it and everything
//!   after it is collected into [`Cli::ignored`] and otherwise unused

use crate::config::{Config, DEFAULT_DIRECTORY};
use crate::env::EnvSource;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flag names that may be written with a single leading dash.
const LONG_FLAGS: &[&str] = &["directory", "vars", "help", "version"];

/// Flags whose value may be given as the next argument.
const VALUE_FLAGS: &[&str] = &["directory", "vars"];

/// Substantiate - copy environment variables into files
#[derive(Parser, Debug)]
#[command(name = "substantiate")]
#[command(version)]
#[command(about = "Copy environment variables into files, one file per variable", long_about = None)]
#[command(after_help = "Values that parse as padded standard base64 are written decoded.\n\
If -vars is empty, the comma-separated list in $SUBSTANTIATE is used instead.")]
pub struct Cli {
    /// Directory where the secrets files will be created
    #[arg(long, default_value = DEFAULT_DIRECTORY, allow_hyphen_values = true)]
    pub directory: PathBuf,

    /// Comma separated list of environment variables to copy to files
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub vars: String,

    /// Arguments from the first positional onwards
    #[arg(hide = true)]
    pub ignored: Vec<OsString>,
}

impl Cli {
    /// Parse from an argument list, program name first.
    ///
    /// Exits the process with clap's usage error on malformed flags.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Resolve the run configuration, using `env` for the fallback list.
    pub fn config<E: EnvSource>(&self, env: &E) -> Config {
        Config::from_env(self.directory.clone(), &self.vars, env)
    }
}

/// Rewrite arguments into a form clap parses the same way.
///
/// - `-name` / `-name=value` become `--name` / `--name=value` for known flags
/// - The argument following a value flag is passed through untouched
/// - A `--` is inserted before the first positional argument, so it and
///   everything after it land in [`Cli::ignored`]
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = iter.next().into_iter().collect();
    let mut expect_value = false;

    while let Some(arg) = iter.next() {
        if expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        if arg == "--" {
            normalized.push(arg);
            normalized.extend(iter.by_ref());
            break;
        }

        let bytes = arg.as_encoded_bytes();
        if bytes.first() != Some(&b'-') || bytes == b"-" {
            normalized.push(OsString::from("--"));
            normalized.push(arg);
            normalized.extend(iter.by_ref());
            break;
        }

        let Some(flag) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        let body = flag.trim_start_matches('-');
        if !body.contains('=') && VALUE_FLAGS.contains(&body) {
            expect_value = true;
        }
        if is_single_dash_long(flag) {
            normalized.push(OsString::from(format!("-{}", flag)));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
