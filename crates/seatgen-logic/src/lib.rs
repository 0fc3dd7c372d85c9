//! Pure seat table generation logic for seatgen.
//!
//! This crate contains the whole generation algorithm and nothing else: no
//! file formats, no UI, no global state. Functions take plain data and
//! return results, so the same core serves the console launcher, tests and
//! any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Generation parameters and their validation |
//! | [`error`] | Error taxonomy (`SeatError`, `ConfigError`, `GridError`) |
//! | [`generator`] | Rejection-sampling generator and candidate validation |
//! | [`grid`] | Generic row-major table with 4-neighbor queries |
//! | [`scheduler`] | Block-wise shuffle ranges over the placement list |
//! | [`seed`] | Seed string → 64-bit initializer → random source |
//! | [`separation`] | Undirected "must not sit together" graph |
//! | [`table`] | Finished seat table: grid + seed, leaders, lucky person |
//!
//! ```
//! use seatgen_logic::config::SeatConfig;
//! use seatgen_logic::generator::generate;
//!
//! let config = SeatConfig {
//!     row_count: 2,
//!     column_count: 2,
//!     shuffled_row_count: 1,
//!     names: vec!["Ann".into(), "Bob".into(), "Cai".into(), "Dee".into()],
//!     ..SeatConfig::default()
//! };
//! let table = generate(&config, Some("42")).unwrap();
//! assert_eq!(table.rows(), 2);
//! assert_eq!(table.seed(), Some("42"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod scheduler;
pub mod seed;
pub mod separation;
pub mod table;

pub use config::SeatConfig;
pub use error::{ConfigError, ErrorKind, GridError, SeatError};
pub use generator::{generate, SeatGenerator, MAX_GENERATIONS};
pub use grid::Grid;
pub use separation::SeparationGraph;
pub use table::{SeatTable, EMPTY_SEAT_PLACEHOLDER};
