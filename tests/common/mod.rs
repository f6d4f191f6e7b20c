//! Common testing utilities for Substantiate integration tests.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test context that manages a temporary output directory.
pub struct TestContext {
    /// Path to temporary directory
    pub temp_path: PathBuf,
    /// The temporary directory (kept to prevent early deletion)
    _temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with a temporary directory.
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let temp_path = temp_dir.path().to_path_buf();

        Ok(Self {
            temp_path,
            _temp_dir: temp_dir,
        })
    }

    /// Get the path to a file in the temp directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_path.join(name)
    }

    /// Read a written secret file as bytes.
    #[allow(dead_code)]
    pub fn read(&self, relative: &str) -> anyhow::Result<Vec<u8>> {
        Ok(fs::read(self.path(relative))?)
    }

    /// Names of the entries directly inside `relative`, sorted.
    #[allow(dead_code)]
    pub fn list(&self, relative: &str) -> anyhow::Result<Vec<String>> {
        let mut names = fs::read_dir(self.path(relative))?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<Result<Vec<_>, _>>()?;
        names.sort();
        Ok(names)
    }
}

/// In-memory environment for driving the exporter without touching the
/// process environment.
#[allow(dead_code)]
pub fn mock_env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
    let vars: HashMap<String, OsString> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), OsString::from(v)))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_env_lookup() {
        let env = mock_env(&[("KEY1", "value1")]);

        assert_eq!(env("KEY1"), Some(OsString::from("value1")));
        assert_eq!(env("KEY2"), None);
    }

    #[test]
    fn test_test_context_list() {
        let ctx = TestContext::new().unwrap();
        fs::write(ctx.path("b"), "2").unwrap();
        fs::write(ctx.path("a"), "1").unwrap();

        assert_eq!(ctx.list(".").unwrap(), vec!["a", "b"]);
    }
}
