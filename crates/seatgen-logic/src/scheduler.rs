//! Block-wise shuffle scheduling.
//!
//! The name list arrives in a meaningful order (say, shortest first). Rather
//! than shuffling it whole, the list is cut into blocks of
//! `shuffled_row_count * column_count` people and each block is shuffled on
//! its own. People therefore only move within a band of rows, which keeps the
//! coarse front-to-back order and keeps rejection sampling converging fast.
//!
//! A trailing remainder too small to fill one row is folded into the block
//! before it instead of becoming a tiny block of its own.

use std::ops::Range;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SeatError;

/// Fixed shuffle ranges over the list of people who get a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockScheduler {
    ranges: Vec<Range<usize>>,
}

impl BlockScheduler {
    /// Plan the shuffle ranges for `people` seated entities.
    pub fn new(
        people: usize,
        column_count: usize,
        shuffled_row_count: usize,
    ) -> Result<Self, SeatError> {
        let block = shuffled_row_count.saturating_mul(column_count);
        if block == 0 {
            return Err(SeatError::EmptyShuffleBlock);
        }

        let mut ranges: Vec<Range<usize>> = Vec::new();
        let mut left = people;
        while left > block {
            let start = people - left;
            ranges.push(start..start + block);
            left -= block;
        }

        if left < column_count {
            match ranges.last_mut() {
                Some(last) => last.end = people,
                None if left > 0 => ranges.push(0..people),
                None => {}
            }
        } else {
            ranges.push(people - left..people);
        }

        Ok(Self { ranges })
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Shuffle every range of `names` in place, in range order.
    ///
    /// Entries past the last range are left alone.
    pub fn shuffle<T, R: Rng + ?Sized>(&self, names: &mut [T], rng: &mut R) {
        for range in &self.ranges {
            let end = range.end.min(names.len());
            if range.start < end {
                names[range.start..end].shuffle(rng);
            }
        }
    }
}
