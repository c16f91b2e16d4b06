//! TikZ drawings of bipartite graphs, with the matched edges highlighted.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{BipartiteGraph, GraphError, Matching, Result};

const PREAMBLE: &str = r"\documentclass{article}
\usepackage{tikz}
\begin{document}

\begin{tikzpicture}[every node/.style={circle,inner sep=1pt,fill=black}]
";

const POSTAMBLE: &str = r"\end{tikzpicture}
\end{document}
";

/// Draws X on the line y = 1 and Y on the line y = 0, vertex i at x = i.
/// `offset` shifts the X row by `offset[0]` and the Y row by `offset[1]`.
pub fn to_tex(
    graph: &BipartiteGraph,
    matching: Option<&Matching>,
    offset: Option<[i32; 2]>,
) -> String {
    let [x_off, y_off] = offset.unwrap_or([0, 0]);
    let mut tex = String::from(PREAMBLE);

    for x in 0..graph.x_len() {
        tex.push_str(&format!("\t\\node (X{x}) at ({}, 1) {{}};\n", x as i32 + x_off));
    }
    for y in 0..graph.y_len() {
        tex.push_str(&format!("\t\\node (Y{y}) at ({}, 0) {{}};\n", y as i32 + y_off));
    }

    for (x, y) in graph.edges() {
        let style = match matching {
            Some(m) if m.contains(x, y) => " [red, very thick]",
            _ => "",
        };
        tex.push_str(&format!("\t\\draw{style} (X{x}) -- (Y{y});\n"));
    }

    tex.push_str(POSTAMBLE);
    tex
}

/// Offsets that centre the smaller vertex set under the larger one.
pub fn centred_offset(graph: &BipartiteGraph) -> [i32; 2] {
    let (x, y) = (graph.x_len() as i32, graph.y_len() as i32);
    if x >= y {
        [0, (x - y) / 2]
    } else {
        [(y - x) / 2, 0]
    }
}

fn basename(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_owned())
}

/// Creates `dir` if needed and writes `dir/<name of dir>.tex` into it.
pub fn write_tex(
    graph: &BipartiteGraph,
    dir: &Path,
    matching: Option<&Matching>,
    offset: Option<[i32; 2]>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let tex_path = dir.join(format!("{}.tex", basename(dir)));
    std::fs::write(&tex_path, to_tex(graph, matching, offset))?;
    tracing::debug!(path = %tex_path.display(), "wrote tex file");
    Ok(tex_path)
}

/// Writes the tex file and compiles it with `pdflatex` inside `dir`.
///
/// The output of `pdflatex` is appended to `dir/<name of dir>.log`.
/// Returns the path of the produced PDF.
pub fn render_pdf(
    graph: &BipartiteGraph,
    dir: &Path,
    matching: Option<&Matching>,
    offset: Option<[i32; 2]>,
) -> Result<PathBuf> {
    let tex_path = write_tex(graph, dir, matching, offset)?;
    let name = basename(dir);

    let output = Command::new("pdflatex")
        .arg("-interaction=nonstopmode")
        .arg(format!("{name}.tex"))
        .current_dir(dir)
        .output()
        .map_err(|e| GraphError::Render {
            tex: tex_path.clone(),
            reason: e.to_string(),
        })?;

    let mut log = OpenOptions::new()
        .append(true)
        .create(true)
        .open(dir.join(format!("{name}.log")))?;
    log.write_all(&output.stdout)?;
    log.write_all(&output.stderr)?;

    if !output.status.success() {
        return Err(GraphError::Render {
            tex: tex_path,
            reason: format!("exited with {}", output.status),
        });
    }
    let pdf = dir.join(format!("{name}.pdf"));
    tracing::info!(path = %pdf.display(), "rendered graph");
    Ok(pdf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maximum_matching, Matrix};

    fn graph() -> BipartiteGraph {
        BipartiteGraph::from_matrix(Matrix(vec![vec![1, 1], vec![0, 1], vec![0, 0]])).unwrap()
    }

    #[test]
    fn nodes_and_edges_are_drawn() {
        let tex = to_tex(&graph(), None, None);
        assert!(tex.starts_with("\\documentclass{article}"));
        assert!(tex.contains("\t\\node (X2) at (2, 1) {};\n"));
        assert!(tex.contains("\t\\node (Y1) at (1, 0) {};\n"));
        assert!(tex.contains("\t\\draw (X0) -- (Y0);\n"));
        assert_eq!(tex.matches("\\draw").count(), 3);
        assert!(!tex.contains("red"));
        assert!(tex.ends_with("\\end{document}\n"));
    }

    #[test]
    fn matched_edges_are_highlighted() {
        let g = graph();
        let max = maximum_matching(&g);
        let tex = to_tex(&g, Some(&max.matching), Some([0, 1]));
        assert_eq!(tex.matches("[red, very thick]").count(), 2);
        assert!(tex.contains("\t\\draw [red, very thick] (X1) -- (Y1);\n"));
        assert!(tex.contains("\t\\node (Y0) at (1, 0) {};\n"));
    }

    #[test]
    fn centring() {
        assert_eq!(centred_offset(&graph()), [0, 0]);
        let wide = BipartiteGraph::empty(2, 7).unwrap();
        assert_eq!(centred_offset(&wide), [2, 0]);
    }

    #[test]
    fn tex_file_is_named_after_its_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("weird_case");
        let path = write_tex(&graph(), &dir, None, None).unwrap();
        assert_eq!(path, dir.join("weird_case.tex"));
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, to_tex(&graph(), None, None));

        // an existing directory is reused
        assert!(write_tex(&graph(), &dir, None, None).is_ok());
    }
}
