pub mod cleanup;
pub mod fixtures;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Name of the fixture file, relative to the working directory.
const OUTPUT: &str = "testGraphs.json";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("failed to read the working directory")?;

    let fixtures = fixtures::build_fixtures(&cwd);
    let output = cwd.join(OUTPUT);
    fixtures::write_fixtures(&fixtures, &output)?;

    tracing::info!(count = fixtures.len(), path = %output.display(), "wrote test graphs");
    Ok(())
}
