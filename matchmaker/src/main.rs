mod batch;
mod cli;
mod interactive;
mod output;

use clap::Parser;
use cli::{Cli, Commands, InteractiveArgs};
use output::RenderMode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command.unwrap_or(Commands::Interactive(InteractiveArgs::default())) {
        Commands::Interactive(args) => {
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            interactive::Session::new(stdin, stdout, RenderMode::new(args.tex_only)).run()
        }
        Commands::Batch(args) => {
            let sizes = batch::run(
                &args.file,
                args.render_dir.as_deref(),
                RenderMode::new(args.tex_only),
                &mut std::io::stdout().lock(),
            )?;
            tracing::info!(graphs = sizes.len(), "done");
            Ok(())
        }
    }
}
