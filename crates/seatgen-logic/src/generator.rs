//! Seat table generation by whole-candidate rejection sampling.
//!
//! Every attempt builds a complete candidate from scratch:
//!
//! 1. copy the name list, optionally withdrawing the lucky person
//! 2. shuffle it block by block ([`BlockScheduler`])
//! 3. pour full rows into the grid, then scatter the leftovers over the
//!    allowed seats of the next row
//! 4. reject if any separated pair ended up side by side, or if some column
//!    has no leader candidate; otherwise pick the leaders and stop
//!
//! A rejected candidate is thrown away entirely and the next attempt draws
//! from the same, already advanced, random stream. Equal `(config, seed)`
//! pairs therefore replay the exact same sequence of attempts.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SeatConfig;
use crate::error::SeatError;
use crate::scheduler::BlockScheduler;
use crate::seed::{rng_from_seed, SeatRng};
use crate::separation::SeparationGraph;
use crate::table::SeatTable;

/// Attempts made before giving up.
pub const MAX_GENERATIONS: u32 = 65536;

/// Generate a seat table for `config` from `seed`.
pub fn generate(config: &SeatConfig, seed: Option<&str>) -> Result<SeatTable, SeatError> {
    SeatGenerator::new(config)?.generate(seed)
}

/// A checked config with its separation graph and shuffle plan, reusable
/// across seeds.
#[derive(Debug, Clone)]
pub struct SeatGenerator {
    row_count: usize,
    column_count: usize,
    disabled_last_row_positions: BTreeSet<usize>,
    names: Vec<String>,
    leaders: BTreeSet<String>,
    separation: SeparationGraph,
    scheduler: BlockScheduler,
    find_lucky: bool,
    find_leaders: bool,
}

impl SeatGenerator {
    /// Validate `config` and prepare everything that does not change between
    /// attempts. Fails before any attempt if the config is illegal or the
    /// constraints are infeasible on their face.
    pub fn new(config: &SeatConfig) -> Result<Self, SeatError> {
        config.check()?;

        let scheduler = BlockScheduler::new(
            config.people_in_seat_count(),
            config.column_count,
            config.shuffled_row_count,
        )?;
        let separation =
            SeparationGraph::build(&config.names, config.separated_pairs.iter().cloned());

        Ok(Self {
            row_count: config.row_count,
            column_count: config.column_count,
            disabled_last_row_positions: config.disabled_last_row_positions.clone(),
            names: config.names.clone(),
            leaders: config.leaders.clone(),
            separation,
            scheduler,
            find_lucky: config.find_lucky,
            find_leaders: config.find_leaders,
        })
    }

    pub fn separation(&self) -> &SeparationGraph {
        &self.separation
    }

    pub fn scheduler(&self) -> &BlockScheduler {
        &self.scheduler
    }

    /// Generate a seat table from `seed`.
    pub fn generate(&self, seed: Option<&str>) -> Result<SeatTable, SeatError> {
        self.generate_with_attempts(seed).map(|(table, _)| table)
    }

    /// Like [`generate`](Self::generate), also returning how many attempts
    /// it took.
    pub fn generate_with_attempts(
        &self,
        seed: Option<&str>,
    ) -> Result<(SeatTable, u32), SeatError> {
        let mut rng = rng_from_seed(seed);
        let mut table = SeatTable::new(self.row_count, self.column_count, seed, self.find_leaders);
        let mut names: Vec<String> = Vec::with_capacity(self.names.len());
        let mut attempts = 0u32;

        loop {
            if attempts >= MAX_GENERATIONS {
                log::warn!(
                    "no valid seat table after {} attempts (seed {:?})",
                    attempts,
                    seed
                );
                return Err(SeatError::TooManyGenerations(MAX_GENERATIONS));
            }
            attempts += 1;

            self.fill_candidate(&mut table, &mut names, &mut rng)?;
            if self.check_and_find_leaders(&mut table, &mut rng) {
                break;
            }
        }

        table.fill_empty();
        log::debug!(
            "seat table generated in {} attempt(s) (seed {:?})",
            attempts,
            seed
        );
        Ok((table, attempts))
    }

    /// Build one candidate arrangement into `table`.
    fn fill_candidate(
        &self,
        table: &mut SeatTable,
        names: &mut Vec<String>,
        rng: &mut SeatRng,
    ) -> Result<(), SeatError> {
        table.grid_mut().clear();

        names.clear();
        names.extend_from_slice(&self.names);
        if self.find_lucky {
            let i = rng.gen_range(0..names.len());
            table.set_lucky_person(Some(names.remove(i)));
        }

        self.scheduler.shuffle(names, rng);

        // Full rows go straight in, row-major.
        let full_rows = names.len() / self.column_count;
        let filled = full_rows * self.column_count;
        for (cell, name) in table.grid_mut().as_flat_mut()[..filled]
            .iter_mut()
            .zip(&names[..filled])
        {
            *cell = Some(name.clone());
        }

        // The rest land on random allowed seats of the next row.
        let rest = names.len() - filled;
        if rest == 0 {
            return Ok(());
        }
        let mut columns: Vec<usize> = (0..self.column_count).collect();
        if full_rows == self.row_count - 1 {
            columns.retain(|c| !self.disabled_last_row_positions.contains(c));
        }
        columns.shuffle(rng);
        for (&column, name) in columns.iter().take(rest).zip(&names[filled..]) {
            table.grid_mut().set(full_rows, column, name.clone())?;
        }
        Ok(())
    }

    /// Validate a candidate and, when leaders are wanted, pick one per column.
    fn check_and_find_leaders(&self, table: &mut SeatTable, rng: &mut SeatRng) -> bool {
        let grid = table.grid();
        for (row, column, name) in grid.cells() {
            let Some(name) = name else { continue };
            if !self.separation.has_edges(name) {
                continue;
            }
            let Ok(mut neighbors) = grid.neighbor_values(row, column) else {
                return false;
            };
            if neighbors.any(|other| self.separation.is_separated(name, other)) {
                return false;
            }
        }

        if !self.find_leaders {
            return true;
        }

        let mut picked = Vec::with_capacity(self.column_count);
        for column in 0..self.column_count {
            let Ok(cells) = grid.column(column) else {
                return false;
            };
            let candidates: Vec<usize> = cells
                .iter()
                .enumerate()
                .filter(|(_, name)| name.is_some_and(|n| self.leaders.contains(n)))
                .map(|(row, _)| row)
                .collect();
            match candidates.choose(rng) {
                Some(&row) => picked.push(row),
                None => return false,
            }
        }
        table.leaders_mut().copy_from_slice(&picked);
        true
    }
}
