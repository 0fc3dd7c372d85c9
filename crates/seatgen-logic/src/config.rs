//! Seat table generation parameters.
//!
//! `SeatConfig` is the already-parsed form of whatever the user edited (a
//! JSON file, a form, CLI flags). The core never reads files; it only
//! validates the values it is handed.
//!
//! ```
//! use seatgen_logic::config::{validate_config, SeatConfig};
//!
//! let mut config = SeatConfig::default();
//! config.names = (1..=12).map(|i| format!("P{i}")).collect();
//! assert!(validate_config(&config).is_empty());
//! assert_eq!(config.seat_count(), 49);
//! assert_eq!(config.people_in_seat_count(), 12);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SeatError};
use crate::table::EMPTY_SEAT_PLACEHOLDER;

/// Validated-on-use generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatConfig {
    /// Grid rows.
    #[serde(alias = "rows")]
    pub row_count: usize,
    /// Grid columns.
    #[serde(alias = "columns")]
    pub column_count: usize,
    /// Rows per shuffle block; `shuffled_row_count * column_count` people are
    /// shuffled together.
    #[serde(alias = "shuffled_rows")]
    pub shuffled_row_count: usize,
    /// Zero-based column indices of last-row seats that stay empty.
    pub disabled_last_row_positions: BTreeSet<usize>,
    /// Everyone to seat, in input order (e.g. sorted by height).
    pub names: Vec<String>,
    /// Names eligible to lead a column.
    pub leaders: BTreeSet<String>,
    /// Pairs that must not end up in adjacent cells.
    #[serde(alias = "separated")]
    pub separated_pairs: Vec<(String, String)>,
    /// Withdraw one person from seating and report them separately.
    pub find_lucky: bool,
    /// Pick one leader per column.
    pub find_leaders: bool,
}

impl Default for SeatConfig {
    fn default() -> Self {
        Self {
            row_count: 7,
            column_count: 7,
            shuffled_row_count: 2,
            disabled_last_row_positions: BTreeSet::new(),
            names: Vec::new(),
            leaders: BTreeSet::new(),
            separated_pairs: Vec::new(),
            find_lucky: false,
            find_leaders: false,
        }
    }
}

impl SeatConfig {
    /// Seats that can hold someone: every cell minus disabled last-row seats.
    pub fn seat_count(&self) -> usize {
        self.row_count
            .saturating_mul(self.column_count)
            .saturating_sub(self.disabled_last_row_positions.len())
    }

    /// People who actually get a seat (everyone but the lucky person).
    pub fn people_in_seat_count(&self) -> usize {
        self.names.len() - usize::from(self.find_lucky && !self.names.is_empty())
    }

    /// People per shuffle block.
    pub fn shuffle_block_size(&self) -> usize {
        self.shuffled_row_count.saturating_mul(self.column_count)
    }

    /// Validates the config and checks that the constraints are satisfiable
    /// on their face: enough seats, and enough leaders when leaders are wanted.
    pub fn check(&self) -> Result<(), SeatError> {
        let errors = validate_config(self);
        if !errors.is_empty() {
            return Err(SeatError::IllegalConfig(errors));
        }

        let seats = self.seat_count();
        let people = self.people_in_seat_count();
        if seats < people {
            return Err(SeatError::NotEnoughSeats { seats, people });
        }

        if self.find_leaders && self.leaders.len() < self.column_count {
            return Err(SeatError::NotEnoughLeaders {
                leaders: self.leaders.len(),
                columns: self.column_count,
            });
        }

        Ok(())
    }
}

/// Validate a seat config, returning all errors found.
pub fn validate_config(config: &SeatConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.row_count == 0 {
        errors.push(ConfigError::ZeroRows);
    }
    if config.column_count == 0 {
        errors.push(ConfigError::ZeroColumns);
    }
    if config.shuffled_row_count == 0 {
        errors.push(ConfigError::ZeroShuffledRows);
    }
    if config.row_count.checked_mul(config.column_count).is_none() {
        errors.push(ConfigError::GridTooLarge {
            rows: config.row_count,
            columns: config.column_count,
        });
    }

    for &position in &config.disabled_last_row_positions {
        if position >= config.column_count {
            errors.push(ConfigError::DisabledPositionOutOfRange {
                position,
                columns: config.column_count,
            });
        }
    }

    let reserved = config
        .names
        .iter()
        .chain(config.leaders.iter())
        .chain(config.separated_pairs.iter().flat_map(|(a, b)| [a, b]))
        .any(|name| name == EMPTY_SEAT_PLACEHOLDER);
    if reserved {
        errors.push(ConfigError::ReservedName(EMPTY_SEAT_PLACEHOLDER.to_string()));
    }

    if config.find_lucky && config.names.is_empty() {
        errors.push(ConfigError::NoLuckyCandidate);
    }

    errors
}
