//! Writes one variable into the target directory.
//!
//! # Behavior
//!
//! - Creates the target directory (and parents) with mode `0755` when missing
//! - Creates or truncates `<directory>/<name>`; the name is not sanitized
//! - Writes the value base64-decoded when possible, verbatim otherwise
//! - Stops at the first failure, leaving whatever was already on disk

use crate::decode::maybe_decode;
use crate::error::WriteError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permission bits for a directory created by [`ensure_directory`].
pub const DIRECTORY_MODE: u32 = 0o755;

/// Write `value` to `<directory>/<name>` and return the path written.
///
/// # Errors
///
/// Returns the first of:
/// - [`WriteError::DirectoryStat`] if the directory cannot be inspected
/// - [`WriteError::DirectoryCreate`] if it is missing and cannot be created
/// - [`WriteError::FileCreate`] if the file cannot be opened for writing
/// - [`WriteError::FileWrite`] if the content cannot be written in full
///
/// # Example
///
/// ```no_run
/// use substantiate::writer::write_variable;
/// use std::path::Path;
///
/// # fn main() -> Result<(), substantiate::error::WriteError> {
/// let path = write_variable(Path::new("/secrets"), "API_KEY", b"c2tfbGl2ZQ==")?;
/// assert_eq!(std::fs::read(path).unwrap(), b"sk_live");
/// # Ok(())
/// # }
/// ```
pub fn write_variable(directory: &Path, name: &str, value: &[u8]) -> Result<PathBuf, WriteError> {
    ensure_directory(directory)?;

    let path = directory.join(name);
    let mut file = fs::File::create(&path).map_err(|source| WriteError::FileCreate {
        path: path.clone(),
        source,
    })?;

    let content = maybe_decode(value);
    file.write_all(&content)
        .map_err(|source| WriteError::FileWrite {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(variable = name, bytes = content.len(), path = %path.display(), "wrote file");
    Ok(path)
}

/// Make sure `directory` exists, creating it and its parents if it does not.
///
/// Only a "not found" stat result triggers creation. If the path exists but
/// is not a directory, this succeeds and the later file creation fails.
pub fn ensure_directory(directory: &Path) -> Result<(), WriteError> {
    match fs::metadata(directory) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            create_dir_all(directory).map_err(|source| WriteError::DirectoryCreate {
                path: directory.to_path_buf(),
                source,
            })?;
            tracing::debug!(directory = %directory.display(), "created directory");
            Ok(())
        }
        Err(source) => Err(WriteError::DirectoryStat {
            path: directory.to_path_buf(),
            source,
        }),
    }
}

#[cfg(unix)]
fn create_dir_all(directory: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(DIRECTORY_MODE)
        .create(directory)
}

#[cfg(not(unix))]
fn create_dir_all(directory: &Path) -> io::Result<()> {
    fs::create_dir_all(directory)
}
