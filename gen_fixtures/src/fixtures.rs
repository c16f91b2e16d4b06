use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use bigraph::{FixtureSet, Matrix};

use crate::cleanup::remove_stale_dir;

/// Sizes of the complete bipartite graphs: 1, 4, 7 and 10.
pub fn complete_sizes() -> impl Iterator<Item = usize> {
    (1..11).step_by(3)
}

pub fn complete_label(n: usize) -> String {
    format!("k{n},{n}")
}

/// K_{n,n}: every vertex of X is adjacent to every vertex of Y.
pub fn complete(n: usize) -> Matrix {
    Matrix::filled(n, n, 1)
}

fn with_ones(rows: usize, cols: usize, ones: &[(usize, usize)]) -> Matrix {
    let mut matrix = Matrix::zeroed(rows, cols);
    for &(row, col) in ones {
        matrix.0[row][col] = 1;
    }
    matrix
}

/// A small 3x3 graph where the greedy choice for X0 has to be undone.
pub fn weird_case() -> Matrix {
    with_ones(3, 3, &[(0, 0), (0, 1), (1, 2), (2, 0)])
}

/// The 9x8 example graph from the textbook chapter on matchings.
pub fn textbook_ex() -> Matrix {
    with_ones(
        9,
        8,
        &[
            (0, 0),
            (1, 0),
            (2, 1),
            (3, 0),
            (4, 0),
            (4, 1),
            (4, 2),
            (5, 1),
            (5, 2),
            (6, 2),
            (6, 3),
            (7, 1),
            (7, 4),
            (7, 6),
            (8, 1),
            (8, 5),
            (8, 7),
        ],
    )
}

/// Builds every fixture. Leftover directories named after the complete
/// graphs are removed from `root` on the way; failures there are ignored.
pub fn build_fixtures(root: &Path) -> FixtureSet {
    let mut fixtures = FixtureSet::new();

    for n in complete_sizes() {
        let label = complete_label(n);
        let _ = remove_stale_dir(&root.join(&label));
        fixtures.insert(label, complete(n));
    }

    fixtures.insert("weird_case".to_owned(), weird_case());
    fixtures.insert("textbook_ex".to_owned(), textbook_ex());
    fixtures
}

/// Dumps the fixtures to stdout, then writes them as one JSON object to `path`,
/// replacing whatever was there.
pub fn write_fixtures(fixtures: &FixtureSet, path: &Path) -> anyhow::Result<()> {
    println!("{fixtures:?}");

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, fixtures)
        .with_context(|| format!("failed to serialize fixtures to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
