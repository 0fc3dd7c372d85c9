//! Error taxonomy for seat table generation.

use thiserror::Error;

/// Coarse classification of a [`SeatError`], for callers that only need to
/// decide whether to fix the config, relax constraints or try another seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structurally invalid config (non-positive dimensions, bad positions).
    IllegalArgument,
    /// Not enough seats or leader candidates; detected before any attempt.
    InfeasibleConstraints,
    /// The retry budget ran out without a valid candidate.
    GenerationExhausted,
    /// A cell access outside the grid.
    IndexOutOfBounds,
}

/// A single config validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("row count must be positive")]
    ZeroRows,
    #[error("column count must be positive")]
    ZeroColumns,
    #[error("shuffled row count must be positive")]
    ZeroShuffledRows,
    /// `rows * columns` does not fit in a `usize`.
    #[error("a {rows}x{columns} grid has too many cells")]
    GridTooLarge { rows: usize, columns: usize },
    /// Zero-based column index outside `[0, column_count)`.
    #[error("disabled last-row position {position} is outside 0..{columns}")]
    DisabledPositionOutOfRange { position: usize, columns: usize },
    /// A name collides with the empty-seat placeholder.
    #[error("\"{0}\" is reserved for empty seats and cannot be used as a name")]
    ReservedName(String),
    #[error("cannot pick a lucky person from an empty name list")]
    NoLuckyCandidate,
}

/// Out-of-range grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {column}) is outside a {rows}x{columns} grid")]
    IndexOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    #[error("row {row} is outside a grid with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },
    #[error("column {column} is outside a grid with {columns} columns")]
    ColumnOutOfBounds { column: usize, columns: usize },
    /// Stored cells do not match the declared shape.
    #[error("a {rows}x{columns} grid cannot hold {cells} cells")]
    ShapeMismatch {
        rows: usize,
        columns: usize,
        cells: usize,
    },
}

/// Errors returned by [`generate`](crate::generator::generate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatError {
    #[error("illegal seat config: {}", join_errors(.0))]
    IllegalConfig(Vec<ConfigError>),
    #[error("shuffle block must hold at least one seat")]
    EmptyShuffleBlock,
    #[error("not enough seats: {seats} seats for {people} people")]
    NotEnoughSeats { seats: usize, people: usize },
    #[error("not enough leaders: {leaders} leaders for {columns} columns")]
    NotEnoughLeaders { leaders: usize, columns: usize },
    #[error("no valid seat table after {0} generations, check the config or use another seed")]
    TooManyGenerations(u32),
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl SeatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeatError::IllegalConfig(_) | SeatError::EmptyShuffleBlock => {
                ErrorKind::IllegalArgument
            }
            SeatError::NotEnoughSeats { .. } | SeatError::NotEnoughLeaders { .. } => {
                ErrorKind::InfeasibleConstraints
            }
            SeatError::TooManyGenerations(_) => ErrorKind::GenerationExhausted,
            SeatError::Grid(_) => ErrorKind::IndexOutOfBounds,
        }
    }
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            SeatError::IllegalConfig(vec![ConfigError::ZeroRows]).kind(),
            ErrorKind::IllegalArgument
        );
        assert_eq!(
            SeatError::NotEnoughSeats { seats: 3, people: 4 }.kind(),
            ErrorKind::InfeasibleConstraints
        );
        assert_eq!(
            SeatError::NotEnoughLeaders {
                leaders: 1,
                columns: 2
            }
            .kind(),
            ErrorKind::InfeasibleConstraints
        );
        assert_eq!(
            SeatError::TooManyGenerations(65536).kind(),
            ErrorKind::GenerationExhausted
        );
    }

    #[test]
    fn illegal_config_lists_every_problem() {
        let err = SeatError::IllegalConfig(vec![ConfigError::ZeroRows, ConfigError::ZeroColumns]);
        assert_eq!(
            err.to_string(),
            "illegal seat config: row count must be positive; column count must be positive"
        );
    }

    #[test]
    fn grid_error_converts() {
        let err: SeatError = GridError::RowOutOfBounds { row: 5, rows: 2 }.into();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
        assert_eq!(err.to_string(), "row 5 is outside a grid with 2 rows");
    }
}
