//! Substantiate - copy environment variables into files.
//!
//! Each selected variable is written to `<directory>/<name>`, base64-decoded
//! when the value parses as base64 and verbatim otherwise. Secrets injected
//! as environment variables can then be consumed from a filesystem path.

pub mod cli;
pub mod config;
pub mod decode;
pub mod env;
pub mod error;
pub mod export;
pub mod writer;
