//! Interval helpers over the fixed 5-minute study grid.
//!
//! Candidate study blocks are `[t, t + BLOCK_LEN)` for every `t` from
//! `GRID_START` to `GRID_END` inclusive, in `STEP_MIN` steps. The bound
//! applies to the start only, so the last block ends at 17:50.

use crate::models::{Interval, LabeledInterval, Minutes};

pub const GRID_START: Minutes = 8 * 60;
pub const GRID_END: Minutes = 16 * 60 + 10;
pub const BLOCK_LEN: Minutes = 100;
pub const STEP_MIN: Minutes = 5;

/// Start times of every candidate block, ascending.
pub fn candidate_starts() -> impl Iterator<Item = Minutes> {
    (GRID_START..=GRID_END).step_by(STEP_MIN as usize)
}

pub fn candidate_block(start: Minutes) -> Interval {
    Interval::with_len(start, BLOCK_LEN)
}

/// True if the half-open intervals intersect.
pub fn overlaps(a: &Interval, b: &Interval) -> bool {
    a.start.max(b.start) < a.end.min(b.end)
}

/// Sorts and folds overlapping or touching intervals into a minimal
/// non-overlapping sequence.
pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        match merged.last_mut() {
            Some(last) if iv.start <= last.end => {
                last.end = last.end.max(iv.end);
            }
            _ => merged.push(iv),
        }
    }
    merged
}

/// Outcome of scanning one day against the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridScan {
    /// Blocks with no overlap, ascending by start.
    pub free_blocks: Vec<Interval>,
    /// Every start achieving `min_conflict_count`, ascending.
    pub min_conflict_starts: Vec<Minutes>,
    pub min_conflict_count: usize,
}

/// Anything that occupies a span of a day.
pub trait Occupies {
    fn span(&self) -> Interval;
}

impl Occupies for Interval {
    fn span(&self) -> Interval {
        *self
    }
}

impl Occupies for LabeledInterval {
    fn span(&self) -> Interval {
        self.interval
    }
}

/// Number of intervals in `busy` that overlap the block starting at `start`.
pub fn conflicts_at<T: Occupies>(start: Minutes, busy: &[T]) -> usize {
    let block = candidate_block(start);
    busy.iter().filter(|iv| overlaps(&block, &iv.span())).count()
}

/// Scans every candidate start against `busy`.
///
/// Works on merged intervals (one count per merged run) as well as on
/// labeled, unmerged ones (one count per class).
pub fn scan<T: Occupies>(busy: &[T]) -> GridScan {
    let mut free_blocks = Vec::new();
    let mut min_conflict_starts = Vec::new();
    let mut min_conflict_count = usize::MAX;

    for start in candidate_starts() {
        let count = conflicts_at(start, busy);
        if count == 0 {
            free_blocks.push(candidate_block(start));
        }
        if count < min_conflict_count {
            min_conflict_count = count;
            min_conflict_starts.clear();
            min_conflict_starts.push(start);
        } else if count == min_conflict_count {
            min_conflict_starts.push(start);
        }
    }

    GridScan {
        free_blocks,
        min_conflict_starts,
        min_conflict_count,
    }
}

/// Scan over a day's merged busy intervals.
pub fn scan_grid(busy: &[Interval]) -> GridScan {
    scan(busy)
}
