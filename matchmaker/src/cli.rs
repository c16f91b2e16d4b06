use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "matchmaker", version, about = "Maximum matchings of bipartite graphs")]
pub struct Cli {
    /// Print without ANSI colours
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read adjacency matrices from stdin, one at a time (default)
    Interactive(InteractiveArgs),
    /// Match every graph of a fixture file such as testGraphs.json
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub struct InteractiveArgs {
    /// Only write the .tex file instead of running pdflatex
    #[arg(long)]
    pub tex_only: bool,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON object mapping labels to adjacency matrices
    pub file: PathBuf,

    /// Draw each graph with its matching into <DIR>/<label>/
    #[arg(long, value_name = "DIR")]
    pub render_dir: Option<PathBuf>,

    /// Only write the .tex files instead of running pdflatex
    #[arg(long)]
    pub tex_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["matchmaker"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn batch_arguments() {
        let cli = Cli::try_parse_from([
            "matchmaker",
            "batch",
            "testGraphs.json",
            "--render-dir",
            "out",
            "--tex-only",
            "--no-color",
        ])
        .unwrap();
        let Some(Commands::Batch(args)) = cli.command else {
            panic!("expected the batch command");
        };
        assert_eq!(args.file, PathBuf::from("testGraphs.json"));
        assert_eq!(args.render_dir, Some(PathBuf::from("out")));
        assert!(args.tex_only);
        assert!(cli.no_color);
    }

    #[test]
    fn batch_needs_a_file() {
        assert!(Cli::try_parse_from(["matchmaker", "batch"]).is_err());
    }
}
