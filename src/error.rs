//! Errors raised while materializing a single variable on disk.
//!
//! None of these abort a run: the exporter reports them per variable and
//! moves on to the next name.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to write one variable into the target directory.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The target directory could not be inspected (anything but "not found").
    #[error("failed to stat directory {}: {source}", path.display())]
    DirectoryStat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The target directory was missing and could not be created.
    #[error("directory {} does not exist and could not be created: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or truncated.
    #[error("failed to create file {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The decoded content could not be written in full.
    #[error("failed to write file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// Path the failing operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryStat { path, .. }
            | Self::DirectoryCreate { path, .. }
            | Self::FileCreate { path, .. }
            | Self::FileWrite { path, .. } => path,
        }
    }
}
