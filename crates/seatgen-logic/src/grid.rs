//! Generic row-major 2-D table.
//!
//! Cells live in one flat `Vec<Option<T>>`; the cell at `(row, column)` is at
//! index `row * columns + column`. The flat view is exposed so the generator
//! can bulk-copy whole rows without per-cell indexing.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Offsets of the 4-neighborhood: up, down, left, right.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A `rows × columns` table of optional values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawGrid<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<T>>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<T>>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, GridError> {
        if raw.rows.checked_mul(raw.columns) != Some(raw.cells.len()) {
            return Err(GridError::ShapeMismatch {
                rows: raw.rows,
                columns: raw.columns,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            rows: raw.rows,
            columns: raw.columns,
            cells: raw.cells,
        })
    }
}

impl<T> Grid<T> {
    /// Creates an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`.
    pub fn new(rows: usize, columns: usize) -> Self {
        let Some(len) = rows.checked_mul(columns) else {
            panic!("a {rows}x{columns} grid has too many cells");
        };
        let mut cells = Vec::with_capacity(len);
        cells.resize_with(len, || None);
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells, occupied or not.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, GridError> {
        if row >= self.rows || column >= self.columns {
            return Err(GridError::IndexOutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }

    /// Returns the value at `(row, column)`, `None` if the cell is empty.
    pub fn get(&self, row: usize, column: usize) -> Result<Option<&T>, GridError> {
        let i = self.index(row, column)?;
        Ok(self.cells[i].as_ref())
    }

    /// Stores `value` at `(row, column)` and returns the previous value.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<Option<T>, GridError> {
        let i = self.index(row, column)?;
        Ok(self.cells[i].replace(value))
    }

    /// Empties `(row, column)` and returns what was there.
    pub fn take(&mut self, row: usize, column: usize) -> Result<Option<T>, GridError> {
        let i = self.index(row, column)?;
        Ok(self.cells[i].take())
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    /// Occupied cells directly above, below, left and right of
    /// `(row, column)`. Diagonals, empty cells and positions outside the
    /// grid are skipped.
    pub fn neighbors(&self, row: usize, column: usize) -> Result<Vec<(usize, usize)>, GridError> {
        self.index(row, column)?;
        Ok(self.neighbor_positions(row, column).collect())
    }

    /// Values of the occupied 4-neighbors of `(row, column)`.
    pub fn neighbor_values(
        &self,
        row: usize,
        column: usize,
    ) -> Result<impl Iterator<Item = &T> + '_, GridError> {
        self.index(row, column)?;
        Ok(self
            .neighbor_positions(row, column)
            .filter_map(move |(r, c)| self.cells[r * self.columns + c].as_ref()))
    }

    fn neighbor_positions(
        &self,
        row: usize,
        column: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = column.checked_add_signed(dc)?;
            if r >= self.rows || c >= self.columns {
                return None;
            }
            self.cells[r * self.columns + c].as_ref().map(|_| (r, c))
        })
    }

    /// The values of one row, left to right.
    pub fn row(&self, index: usize) -> Result<&[Option<T>], GridError> {
        if index >= self.rows {
            return Err(GridError::RowOutOfBounds {
                row: index,
                rows: self.rows,
            });
        }
        let start = index * self.columns;
        Ok(&self.cells[start..start + self.columns])
    }

    /// The values of one column, top to bottom.
    pub fn column(&self, index: usize) -> Result<Vec<Option<&T>>, GridError> {
        if index >= self.columns {
            return Err(GridError::ColumnOutOfBounds {
                column: index,
                columns: self.columns,
            });
        }
        Ok(self
            .cells
            .iter()
            .skip(index)
            .step_by(self.columns)
            .map(Option::as_ref)
            .collect())
    }

    /// Row-major flat view.
    pub fn as_flat(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Mutable row-major flat view, length `rows * columns`.
    pub fn as_flat_mut(&mut self) -> &mut [Option<T>] {
        &mut self.cells
    }

    /// Iterates `(row, column, value)` over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<&T>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (i / self.columns, i % self.columns, c.as_ref()))
    }
}
