// Substantiate - copy environment variables into files
//
// This is the main entry point for the application.

use anyhow::Result;
use substantiate::cli::Cli;
use substantiate::env::ProcessEnv;
use substantiate::export::export_variables;
use tracing_subscriber::EnvFilter;

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse_args(std::env::args_os());
    init_logging()?;

    if !cli.ignored.is_empty() {
        tracing::debug!(ignored = ?cli.ignored, "ignoring arguments after the first positional");
    }

    let config = cli.config(&ProcessEnv);
    if config.is_empty() {
        println!("No environment variables specified.");
        return Ok(());
    }

    let report = export_variables(&config, &ProcessEnv);

    tracing::info!(
        missing = report.missing(),
        failed = report.failed(),
        "Wrote {} file(s) to {}",
        report.written(),
        report.directory().display()
    );

    // Per-variable failures are reported above and never change the exit code.
    Ok(())
}
