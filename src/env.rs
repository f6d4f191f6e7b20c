//! Environment lookup used by the exporter.
//!
//! The exporter never calls `std::env` directly. It asks an [`EnvSource`],
//! which is [`ProcessEnv`] in the binary and a plain closure in tests.
//!
//! Values are returned as [`OsString`] so that bytes which are not valid
//! UTF-8 reach the output file unchanged.

use std::ffi::OsString;

/// Source of environment variable values.
pub trait EnvSource {
    /// Value of `name`, or `None` when the variable is not set.
    fn lookup(&self, name: &str) -> Option<OsString>;
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<OsString>,
{
    fn lookup(&self, name: &str) -> Option<OsString> {
        self(name)
    }
}

/// The environment of the running process.
///
/// Names that the platform cannot represent (empty, or containing `=` or NUL)
/// are reported as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<OsString> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }

        std::env::var_os(name)
    }
}
