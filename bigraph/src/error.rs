use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building, reading or rendering a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A row of the matrix does not have the same length as the first one.
    #[error("row {row} has {found} columns, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Adjacency matrices only hold 0 (no edge) or 1 (edge).
    #[error("cell ({row}, {col}) holds {value}, only 0 and 1 are allowed")]
    NonBinary { row: usize, col: usize, value: u8 },
    #[error("both vertex sets need at least one vertex, got {x}x{y}")]
    Empty { x: usize, y: usize },
    #[error("cell ({row}, {col}) is outside of a {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// The edge is not in the graph or shares an endpoint with another matched edge.
    #[error("edge X{x} -- Y{y} cannot be part of the matching: {reason}")]
    InvalidMatching { x: usize, y: usize, reason: &'static str },
    #[error("invalid adjacency matrix JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("pdflatex failed on {}: {reason}", .tex.display())]
    Render { tex: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
