// Minimum-conflict diagnostics for days without a free study block.
//
// Counts come from the labeled, unmerged intervals: a block touching two
// distinct classes counts 2 even when the merged grid sees a single run.

use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::grid::{candidate_block, overlaps, scan};
use crate::models::{LabeledInterval, Minutes};

/// Starts with the fewest overlapping classes, and that count.
pub fn min_conflict_by_labels(labeled: &[LabeledInterval]) -> (Vec<Minutes>, usize) {
    let result = scan(labeled);
    (result.min_conflict_starts, result.min_conflict_count)
}

/// Labeled intervals overlapping the block that begins at `start`,
/// ordered by their own start.
pub fn offenders_at(start: Minutes, labeled: &[LabeledInterval]) -> Vec<LabeledInterval> {
    let block = candidate_block(start);
    let mut hits: Vec<LabeledInterval> = labeled
        .iter()
        .filter(|l| overlaps(&block, &l.interval))
        .cloned()
        .collect();
    hits.sort_by_key(|l| l.start());
    hits
}

/// Start times that share exactly the same offending courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGroup {
    pub offenders: Vec<LabeledInterval>,
    /// Sorted and de-duplicated.
    pub starts: Vec<Minutes>,
}

impl ConflictGroup {
    pub fn courses(&self) -> Vec<&str> {
        self.offenders.iter().map(|o| o.course.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayConflicts {
    pub min_conflicts: usize,
    /// Ordered by the sorted course-code tuple of each group.
    pub groups: Vec<ConflictGroup>,
}

/// Groups every minimum-conflict start by its offender code set.
pub fn diagnose_day(labeled: &[LabeledInterval]) -> DayConflicts {
    let (best_starts, min_conflicts) = min_conflict_by_labels(labeled);

    let mut groups: BTreeMap<Vec<String>, (Vec<LabeledInterval>, BTreeSet<Minutes>)> =
        BTreeMap::new();
    for start in best_starts {
        let offenders = offenders_at(start, labeled);
        let key: Vec<String> = offenders
            .iter()
            .map(|o| o.course.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        groups
            .entry(key)
            .or_insert_with(|| (offenders, BTreeSet::new()))
            .1
            .insert(start);
    }

    DayConflicts {
        min_conflicts,
        groups: groups
            .into_values()
            .map(|(offenders, starts)| ConflictGroup {
                offenders,
                starts: starts.into_iter().collect(),
            })
            .collect(),
    }
}
