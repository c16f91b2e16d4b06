use std::collections::BTreeSet;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::{GraphError, Matrix, Result};

/// A vertex of a bipartite graph, identified by its side and its index
/// (row index for `X`, column index for `Y`).
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Debug)]
pub enum Vertex {
    X(usize),
    Y(usize),
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vertex::X(i) => write!(f, "X{i}"),
            Vertex::Y(j) => write!(f, "Y{j}"),
        }
    }
}

/// An ordered set of vertices.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct VertexSet(BTreeSet<Vertex>);

impl VertexSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn insert(&mut self, v: Vertex) -> bool {
        self.0.insert(v)
    }
    pub fn contains(&self, v: &Vertex) -> bool {
        self.0.contains(v)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.0.iter()
    }
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).copied().collect())
    }
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).copied().collect())
    }
    /// Vertices of `self` that are not in `other`.
    pub fn minus(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).copied().collect())
    }
}

impl FromIterator<Vertex> for VertexSet {
    fn from_iter<T: IntoIterator<Item = Vertex>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for VertexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.0.iter().map(Vertex::to_string).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// A bipartite graph with vertex sets X and Y stored as an `|X| x |Y|`
/// adjacency matrix: cell (i, j) is 1 when `x_i` and `y_j` are adjacent.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Matrix", into = "Matrix")]
pub struct BipartiteGraph {
    repr: Matrix,
}

impl BipartiteGraph {
    /// A graph with `x` and `y` vertices and no edges.
    pub fn empty(x: usize, y: usize) -> Result<Self> {
        if x == 0 || y == 0 {
            return Err(GraphError::Empty { x, y });
        }
        Ok(Self {
            repr: Matrix::zeroed(x, y),
        })
    }

    pub fn from_matrix(repr: Matrix) -> Result<Self> {
        repr.validate()?;
        Ok(Self { repr })
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, &self.repr)?;
        Ok(())
    }

    pub fn matrix(&self) -> &Matrix {
        &self.repr
    }

    pub fn x_len(&self) -> usize {
        self.repr.rows()
    }

    pub fn y_len(&self) -> usize {
        self.repr.cols()
    }

    pub fn x_vertices(&self) -> VertexSet {
        (0..self.x_len()).map(Vertex::X).collect()
    }

    pub fn y_vertices(&self) -> VertexSet {
        (0..self.y_len()).map(Vertex::Y).collect()
    }

    pub fn has_edge(&self, x: usize, y: usize) -> bool {
        self.repr.get(x, y).is_some_and(|cell| cell != 0)
    }

    /// Indices of the Y vertices adjacent to `x_x`, in increasing order.
    pub fn neighbors(&self, x: usize) -> impl Iterator<Item = usize> + '_ {
        self.repr
            .0
            .get(x)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter(|(_, cell)| **cell != 0)
            .map(|(y, _)| y)
    }

    /// Every edge as an `(x, y)` pair, row-major.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.repr.ones()
    }

    pub fn edge_count(&self) -> usize {
        self.repr.count_ones()
    }

    /// The same graph as an undirected petgraph graph. X vertices get the
    /// node indices `0..|X|`, Y vertices follow.
    pub fn to_petgraph(&self) -> UnGraph<Vertex, ()> {
        let mut graph = UnGraph::with_capacity(self.x_len() + self.y_len(), self.edge_count());
        let xs: Vec<NodeIndex> = (0..self.x_len())
            .map(|i| graph.add_node(Vertex::X(i)))
            .collect();
        let ys: Vec<NodeIndex> = (0..self.y_len())
            .map(|j| graph.add_node(Vertex::Y(j)))
            .collect();
        for (x, y) in self.edges() {
            graph.add_edge(xs[x], ys[y], ());
        }
        graph
    }
}

impl TryFrom<Matrix> for BipartiteGraph {
    type Error = GraphError;

    fn try_from(value: Matrix) -> Result<Self> {
        Self::from_matrix(value)
    }
}

impl From<BipartiteGraph> for Matrix {
    fn from(value: BipartiteGraph) -> Self {
        value.repr
    }
}
