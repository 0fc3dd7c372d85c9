//! The finished seat table.
//!
//! A `SeatTable` is a [`Grid`] of names plus what export and display need to
//! know about the run that produced it: the seed, the leader row of every
//! column, and the lucky person.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SeatConfig;
use crate::error::GridError;
use crate::grid::Grid;

/// Marker written into seats nobody sits in.
pub const EMPTY_SEAT_PLACEHOLDER: &str = "-";

/// A generated seat table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatTable {
    grid: Grid<String>,
    seed: Option<String>,
    /// Leader row index per column; empty when leaders were not requested.
    leaders: Vec<usize>,
    lucky_person: Option<String>,
}

impl SeatTable {
    pub(crate) fn new(
        rows: usize,
        columns: usize,
        seed: Option<&str>,
        has_leaders: bool,
    ) -> Self {
        Self {
            grid: Grid::new(rows, columns),
            seed: seed.map(str::to_string),
            leaders: if has_leaders { vec![0; columns] } else { Vec::new() },
            lucky_person: None,
        }
    }

    /// A placeholder-only table sized for `config`, with no seed, leaders or
    /// lucky person.
    pub fn empty(config: &SeatConfig) -> Self {
        let mut table = Self::new(config.row_count, config.column_count, None, false);
        table.fill_empty();
        table
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Read-only access to the underlying grid.
    pub fn grid(&self) -> &Grid<String> {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid<String> {
        &mut self.grid
    }

    /// Name at `(row, column)`; the placeholder for empty seats.
    pub fn get(&self, row: usize, column: usize) -> Result<&str, GridError> {
        Ok(self
            .grid
            .get(row, column)?
            .map_or(EMPTY_SEAT_PLACEHOLDER, String::as_str))
    }

    /// Whether `(row, column)` holds nobody.
    pub fn is_empty_seat(&self, row: usize, column: usize) -> Result<bool, GridError> {
        Ok(self.get(row, column)? == EMPTY_SEAT_PLACEHOLDER)
    }

    /// Names of one row, left to right.
    pub fn row(&self, index: usize) -> Result<Vec<&str>, GridError> {
        Ok(self
            .grid
            .row(index)?
            .iter()
            .map(|c| c.as_deref().unwrap_or(EMPTY_SEAT_PLACEHOLDER))
            .collect())
    }

    /// Every row, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.rows()).map(move |r| {
            self.grid.as_flat()[r * self.columns()..(r + 1) * self.columns()]
                .iter()
                .map(|c| c.as_deref().unwrap_or(EMPTY_SEAT_PLACEHOLDER))
                .collect()
        })
    }

    /// Every seated name (placeholders excluded), row-major.
    pub fn seated(&self) -> impl Iterator<Item = &str> + '_ {
        self.grid
            .as_flat()
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|name| *name != EMPTY_SEAT_PLACEHOLDER)
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    pub fn has_leaders(&self) -> bool {
        !self.leaders.is_empty()
    }

    /// Leader row index per column, empty if leaders were not requested.
    pub fn leaders(&self) -> &[usize] {
        &self.leaders
    }

    pub(crate) fn leaders_mut(&mut self) -> &mut [usize] {
        &mut self.leaders
    }

    /// Leader row of `column`.
    pub fn leader_of(&self, column: usize) -> Option<usize> {
        self.leaders.get(column).copied()
    }

    pub fn is_leader(&self, row: usize, column: usize) -> bool {
        self.leader_of(column) == Some(row)
    }

    /// Columns whose leader sits in `row`.
    pub fn leaders_of_row(&self, row: usize) -> Vec<usize> {
        self.leaders
            .iter()
            .enumerate()
            .filter(|&(_, &r)| r == row)
            .map(|(c, _)| c)
            .collect()
    }

    pub fn lucky_person(&self) -> Option<&str> {
        self.lucky_person.as_deref()
    }

    pub fn has_lucky_person(&self) -> bool {
        self.lucky_person.is_some()
    }

    pub(crate) fn set_lucky_person(&mut self, name: Option<String>) {
        self.lucky_person = name;
    }

    /// Write the placeholder into every empty cell.
    pub(crate) fn fill_empty(&mut self) {
        for cell in self.grid.as_flat_mut() {
            if cell.is_none() {
                *cell = Some(EMPTY_SEAT_PLACEHOLDER.to_string());
            }
        }
    }
}

/// One bracketed line per row; leaders wrapped in braces; the lucky person,
/// if any, on the last line.
impl fmt::Display for SeatTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            write!(f, "[")?;
            for (c, name) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                if self.is_leader(r, c) {
                    write!(f, "{{{name}}}")?;
                } else {
                    write!(f, "{name}")?;
                }
            }
            writeln!(f, "]")?;
        }
        if let Some(lucky) = &self.lucky_person {
            write!(f, "{lucky}")?;
        }
        Ok(())
    }
}
