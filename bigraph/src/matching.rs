//! Maximum matchings in bipartite graphs through repeated augmenting paths.
//!
//! The search follows Algorithm 3.2.1 of Douglas B. West, *Introduction to
//! Graph Theory* (2nd edition): starting from the unsaturated vertices of X,
//! grow M-alternating paths. Reaching an unsaturated vertex of Y yields an
//! augmenting path, otherwise the explored sets give a vertex cover of the
//! same size as the matching, which proves the matching maximum.

use std::collections::VecDeque;

use crate::{BipartiteGraph, GraphError, Matrix, Result, Vertex, VertexSet};

/// A set of pairwise disjoint edges of a bipartite graph.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Matching {
    mate_of_x: Vec<Option<usize>>,
    mate_of_y: Vec<Option<usize>>,
}

impl Matching {
    pub fn empty(graph: &BipartiteGraph) -> Self {
        Self {
            mate_of_x: vec![None; graph.x_len()],
            mate_of_y: vec![None; graph.y_len()],
        }
    }

    /// Builds a matching from a matrix of the same shape as `graph`.
    ///
    /// Every marked cell must be an edge of `graph`, and no two marked cells
    /// may share a row or a column.
    pub fn from_matrix(graph: &BipartiteGraph, repr: &Matrix) -> Result<Self> {
        repr.validate()?;
        let mut matching = Self::empty(graph);
        for (x, y) in repr.ones() {
            if !graph.has_edge(x, y) {
                return Err(GraphError::InvalidMatching {
                    x,
                    y,
                    reason: "not an edge of the graph",
                });
            }
            if matching.mate_of_x[x].is_some() || matching.mate_of_y[y].is_some() {
                return Err(GraphError::InvalidMatching {
                    x,
                    y,
                    reason: "an endpoint is already matched",
                });
            }
            matching.mate_of_x[x] = Some(y);
            matching.mate_of_y[y] = Some(x);
        }
        Ok(matching)
    }

    /// Number of edges in the matching.
    pub fn len(&self) -> usize {
        self.mate_of_x.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.mate_of_x.get(x).copied().flatten() == Some(y)
    }

    pub fn mate_of_x(&self, x: usize) -> Option<usize> {
        self.mate_of_x.get(x).copied().flatten()
    }

    pub fn mate_of_y(&self, y: usize) -> Option<usize> {
        self.mate_of_y.get(y).copied().flatten()
    }

    /// Matched edges as `(x, y)` pairs ordered by `x`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.mate_of_x
            .iter()
            .enumerate()
            .filter_map(|(x, mate)| mate.map(|y| (x, y)))
    }

    pub fn saturated_x(&self) -> VertexSet {
        self.edges().map(|(x, _)| Vertex::X(x)).collect()
    }

    pub fn saturated_y(&self) -> VertexSet {
        self.edges().map(|(_, y)| Vertex::Y(y)).collect()
    }

    /// The vertices of X not covered by any matched edge.
    pub fn unsaturated_x(&self) -> VertexSet {
        self.mate_of_x
            .iter()
            .enumerate()
            .filter(|(_, mate)| mate.is_none())
            .map(|(x, _)| Vertex::X(x))
            .collect()
    }

    /// The matching as a subgraph in adjacency matrix form.
    pub fn to_matrix(&self) -> Matrix {
        let mut repr = Matrix::zeroed(self.mate_of_x.len(), self.mate_of_y.len());
        for (x, y) in self.edges() {
            repr.0[x][y] = 1;
        }
        repr
    }

    /// Replaces the matching with its symmetric difference with the path.
    pub fn augment(&mut self, path: &AugmentingPath) {
        // The path alternates x, y, x, y, ... so each (x, y) pair becomes a
        // matched edge and the old mates are overwritten along the way.
        for pair in path.0.chunks(2) {
            let (x, y) = (pair[0], pair[1]);
            self.mate_of_x[x] = Some(y);
            self.mate_of_y[y] = Some(x);
        }
    }
}

impl std::fmt::Display for Matching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edges: Vec<String> = self.edges().map(|(x, y)| format!("X{x}-Y{y}")).collect();
        write!(f, "{{{}}}", edges.join(", "))
    }
}

/// An M-alternating path from an unsaturated vertex of X to an unsaturated
/// vertex of Y, stored as the vertex indices `x0 y0 x1 y1 ... xk yk`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AugmentingPath(Vec<usize>);

impl AugmentingPath {
    pub fn vertices(&self) -> Vec<Vertex> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &v)| if i % 2 == 0 { Vertex::X(v) } else { Vertex::Y(v) })
            .collect()
    }

    /// Number of edges on the path, always odd.
    pub fn edge_count(&self) -> usize {
        self.0.len() - 1
    }
}

impl std::fmt::Display for AugmentingPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.vertices().iter().map(Vertex::to_string).collect();
        f.write_str(&names.join(" -> "))
    }
}

/// Outcome of one augmenting path search.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Augmentation {
    Path(AugmentingPath),
    /// No augmenting path exists. The cover has as many vertices as the
    /// matching has edges, so the matching is maximum.
    Cover(VertexSet),
}

/// Looks for an M-augmenting path in `graph`.
pub fn augmenting_path(graph: &BipartiteGraph, matching: &Matching) -> Augmentation {
    // S: reached vertices of X, T: reached vertices of Y.
    let mut reached_x = vec![false; graph.x_len()];
    let mut parent_of_y: Vec<Option<usize>> = vec![None; graph.y_len()];
    let mut queue = VecDeque::new();

    for x in 0..graph.x_len() {
        if matching.mate_of_x(x).is_none() {
            reached_x[x] = true;
            queue.push_back(x);
        }
    }

    while let Some(x) = queue.pop_front() {
        for y in graph.neighbors(x) {
            if parent_of_y[y].is_some() || matching.contains(x, y) {
                continue;
            }
            parent_of_y[y] = Some(x);
            match matching.mate_of_y(y) {
                None => return Augmentation::Path(trace_back(matching, &parent_of_y, y)),
                Some(w) => {
                    if !reached_x[w] {
                        reached_x[w] = true;
                        queue.push_back(w);
                    }
                }
            }
        }
    }

    let cover = parent_of_y
        .iter()
        .enumerate()
        .filter(|(_, parent)| parent.is_some())
        .map(|(y, _)| Vertex::Y(y))
        .chain(
            reached_x
                .iter()
                .enumerate()
                .filter(|(_, reached)| !**reached)
                .map(|(x, _)| Vertex::X(x)),
        )
        .collect();
    Augmentation::Cover(cover)
}

/// Walks back from the unsaturated `end` to the root of its search tree.
fn trace_back(matching: &Matching, parent_of_y: &[Option<usize>], end: usize) -> AugmentingPath {
    let mut path = Vec::new();
    let mut y = end;
    // every reached y has a parent, and a reached x is either a root or the
    // mate of a reached y
    while let Some(x) = parent_of_y[y] {
        path.push(y);
        path.push(x);
        match matching.mate_of_x(x) {
            Some(prev) => y = prev,
            None => break,
        }
    }
    path.reverse();
    AugmentingPath(path)
}

/// A maximum matching together with a vertex cover of the same size.
#[derive(Clone, Debug)]
pub struct MaximumMatching {
    pub matching: Matching,
    pub cover: VertexSet,
}

/// Grows the empty matching one augmenting path at a time until none is left.
pub fn maximum_matching(graph: &BipartiteGraph) -> MaximumMatching {
    let mut matching = Matching::empty(graph);
    loop {
        match augmenting_path(graph, &matching) {
            Augmentation::Path(path) => {
                tracing::trace!(%path, "augmenting");
                matching.augment(&path);
            }
            Augmentation::Cover(cover) => {
                tracing::debug!(size = matching.len(), %cover, "no augmenting path left");
                return MaximumMatching { matching, cover };
            }
        }
    }
}
