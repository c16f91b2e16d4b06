use std::{fs::File, io::Write, path::Path};

use anyhow::Context;
use bigraph::{maximum_matching, BipartiteGraph, FixtureSet};
use colored::*;

use crate::output::RenderMode;

/// Matches every graph of the fixture file at `path`, in label order.
///
/// Returns the size of each maximum matching keyed by label.
pub fn run(
    path: &Path,
    render_dir: Option<&Path>,
    mode: RenderMode,
    out: &mut impl Write,
) -> anyhow::Result<Vec<(String, usize)>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let fixtures: FixtureSet = serde_json::from_reader(file)
        .with_context(|| format!("{} is not a JSON object of adjacency matrices", path.display()))?;
    tracing::info!(count = fixtures.len(), file = %path.display(), "loaded graphs");

    let mut sizes = Vec::with_capacity(fixtures.len());
    for (label, matrix) in fixtures {
        let graph = BipartiteGraph::from_matrix(matrix)
            .with_context(|| format!("graph {label:?} is not a valid adjacency matrix"))?;
        let max = maximum_matching(&graph);
        writeln!(
            out,
            "{} {}x{}, |M| = {}, M = {}",
            format!("{label}:").bold(),
            graph.x_len(),
            graph.y_len(),
            max.matching.len(),
            max.matching
        )?;

        if let Some(root) = render_dir {
            let rendered = mode
                .render(&graph, &max.matching, &root.join(&label))
                .with_context(|| format!("failed to render graph {label:?}"))?;
            tracing::debug!(path = %rendered.display(), "rendered");
        }
        sizes.push((label, max.matching.len()));
    }
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixtures(dir: &Path, json: &str) -> std::path::PathBuf {
        let path = dir.join("graphs.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn sizes_in_label_order() {
        colored::control::set_override(false);
        let tmp = tempfile::tempdir().unwrap();
        let path = write_fixtures(
            tmp.path(),
            r#"{"weird_case": [[1,1,0],[0,0,1],[1,0,0]], "k1,1": [[1]], "star": [[1],[1],[1]]}"#,
        );
        let mut out = Vec::new();
        let sizes = run(&path, None, RenderMode::TexOnly, &mut out).unwrap();
        assert_eq!(
            sizes,
            vec![
                ("k1,1".to_owned(), 1),
                ("star".to_owned(), 1),
                ("weird_case".to_owned(), 3)
            ]
        );
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("star: 3x1, |M| = 1, M = {X0-Y0}"));
    }

    #[test]
    fn renders_one_directory_per_graph() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_fixtures(tmp.path(), r#"{"a": [[1,0],[0,1]], "b": [[1]]}"#);
        let render = tmp.path().join("render");
        run(&path, Some(render.as_path()), RenderMode::TexOnly, &mut std::io::sink()).unwrap();
        assert!(render.join("a/a.tex").is_file());
        assert!(render.join("b/b.tex").is_file());
    }

    #[test]
    fn invalid_matrix_names_the_graph() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_fixtures(tmp.path(), r#"{"broken": [[1,0],[1]]}"#);
        let err = run(&path, None, RenderMode::TexOnly, &mut std::io::sink()).unwrap_err();
        assert!(err.to_string().contains("\"broken\""));
    }

    #[test]
    fn missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run(
            &tmp.path().join("nope.json"),
            None,
            RenderMode::TexOnly,
            &mut std::io::sink(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("failed to open"));
    }
}
