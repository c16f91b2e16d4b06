use std::{
    io::Write,
    path::{Path, PathBuf},
};

use bigraph::{tex, BipartiteGraph, Matching, MaximumMatching};
use colored::*;

/// How a graph and its matching get drawn.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum RenderMode {
    Pdf,
    TexOnly,
}

impl RenderMode {
    pub fn new(tex_only: bool) -> Self {
        if tex_only {
            Self::TexOnly
        } else {
            Self::Pdf
        }
    }

    /// Draws into `dir`, returning the path of the produced file.
    pub fn render(
        self,
        graph: &BipartiteGraph,
        matching: &Matching,
        dir: &Path,
    ) -> bigraph::Result<PathBuf> {
        let offset = Some(tex::centred_offset(graph));
        match self {
            Self::Pdf => tex::render_pdf(graph, dir, Some(matching), offset),
            Self::TexOnly => tex::write_tex(graph, dir, Some(matching), offset),
        }
    }
}

pub fn print_matching(
    out: &mut impl Write,
    graph: &BipartiteGraph,
    max: &MaximumMatching,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{} {} ({} of {} edges)",
        "maximum matching:".green().bold(),
        max.matching,
        max.matching.len(),
        graph.edge_count()
    )?;
    writeln!(out, "{} {}", "vertex cover:".dimmed(), max.cover)
}

pub fn print_error(out: &mut impl Write, err: &dyn std::fmt::Display) -> std::io::Result<()> {
    writeln!(out, "{}", err.to_string().red())
}
