//! Bipartite graphs given as `|X| x |Y|` adjacency matrices, and their
//! maximum matchings.

pub mod error;
pub use error::*;
pub mod matrix;
pub use matrix::*;
pub mod graph;
pub use graph::*;
pub mod matching;
pub use matching::*;
pub mod tex;

use std::collections::BTreeMap;

/// Labelled graphs as stored in a fixture file, e.g. `testGraphs.json`.
///
/// Ordered by label so that serializing the same set twice gives the same bytes.
pub type FixtureSet = BTreeMap<String, Matrix>;
