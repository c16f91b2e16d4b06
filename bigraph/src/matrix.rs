use crate::{GraphError, Result};

/// A 0/1 matrix stored row by row.
///
/// Serialized as a plain JSON array of arrays so the files stay readable by
/// anything that understands nested lists, e.g. `[[1, 1], [1, 1]]` for K2,2.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Matrix(pub Vec<Vec<u8>>);

impl Matrix {
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0)
    }

    pub fn filled(rows: usize, cols: usize, value: u8) -> Self {
        Self(vec![vec![value; cols]; rows])
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Width of the first row, 0 when there are no rows at all.
    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Marks the cell at (`row`, `col`) with a 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<()> {
        let (rows, cols) = (self.rows(), self.cols());
        match self.0.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = 1;
                Ok(())
            }
            None => Err(GraphError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            }),
        }
    }

    /// Coordinates of every non-zero cell, row-major.
    pub fn ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell != 0)
                .map(move |(j, _)| (i, j))
        })
    }

    pub fn count_ones(&self) -> usize {
        self.ones().count()
    }

    /// Checks that the matrix is rectangular and only holds 0s and 1s.
    pub fn validate(&self) -> Result<()> {
        let expected = self.cols();
        for (row, cells) in self.0.iter().enumerate() {
            if cells.len() != expected {
                return Err(GraphError::Jagged {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            if let Some((col, &value)) = cells.iter().enumerate().find(|(_, v)| **v > 1) {
                return Err(GraphError::NonBinary { row, col, value });
            }
        }
        Ok(())
    }
}

impl From<Vec<Vec<u8>>> for Matrix {
    fn from(value: Vec<Vec<u8>>) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.0 {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
