// Per-day busy time: the merged view used for free-window detection and the
// labeled view used for conflict attribution.

use crate::algorithm::grid::{merge, scan_grid};
use crate::models::{Day, Interval, LabeledInterval, Section};

/// Day → merged, sorted, non-overlapping busy intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusyGrid {
    days: [Vec<Interval>; 5],
}

impl BusyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Day) -> &[Interval] {
        &self.days[day.index()]
    }

    /// Adds the section's interval on each of its days and re-merges those days.
    pub fn add_section(&mut self, section: &Section) {
        let iv = section.interval();
        for day in section.days.iter() {
            let slot = &mut self.days[day.index()];
            slot.push(iv);
            *slot = merge(slot);
        }
    }

    /// Copy of this grid with `section` added. `self` is left untouched.
    pub fn with_section(&self, section: &Section) -> BusyGrid {
        let mut copy = self.clone();
        copy.add_section(section);
        copy
    }

    /// Free study blocks summed over all five weekdays.
    pub fn free_block_count(&self) -> usize {
        Day::ALL
            .iter()
            .map(|d| scan_grid(self.day(*d)).free_blocks.len())
            .sum()
    }
}

/// Day → unmerged intervals with their course, in commit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledBusyGrid {
    days: [Vec<LabeledInterval>; 5],
}

impl LabeledBusyGrid {
    pub fn day(&self, day: Day) -> &[LabeledInterval] {
        &self.days[day.index()]
    }

    pub fn add_section(&mut self, section: &Section) {
        for day in section.days.iter() {
            self.days[day.index()].push(LabeledInterval {
                course: section.course.clone(),
                interval: section.interval(),
            });
        }
    }

    /// Labels dropped and merged; equals the `BusyGrid` day it mirrors.
    pub fn merged(&self, day: Day) -> Vec<Interval> {
        let plain: Vec<Interval> = self.day(day).iter().map(|l| l.interval).collect();
        merge(&plain)
    }
}

/// Both busy views, only ever grown together through [`Calendar::commit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    busy: BusyGrid,
    labeled: LabeledBusyGrid,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&mut self, section: &Section) {
        self.busy.add_section(section);
        self.labeled.add_section(section);
    }

    pub fn busy(&self) -> &BusyGrid {
        &self.busy
    }

    pub fn labeled(&self) -> &LabeledBusyGrid {
        &self.labeled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayMask;

    fn section(code: &str, days: &str, start: u32, duration: u32) -> Section {
        Section {
            course: code.to_string(),
            days: DayMask::parse(days).unwrap(),
            start,
            duration,
        }
    }

    #[test]
    fn test_with_section_does_not_touch_original() {
        let mut grid = BusyGrid::new();
        grid.add_section(&section("ABCD 101", "M", 480, 100));
        let before = grid.clone();
        let scored = grid.with_section(&section("ABCD 102", "MW", 600, 50));
        assert_eq!(grid, before);
        assert_eq!(scored.day(Day::Wednesday), &[Interval::new(600, 650)]);
    }

    #[test]
    fn test_calendar_views_stay_in_lockstep() {
        let mut cal = Calendar::new();
        cal.commit(&section("ABCD 101", "W", 480, 100));
        cal.commit(&section("EFGH 202", "W", 540, 100));
        cal.commit(&section("IJKL 303", "MW", 900, 60));

        for day in Day::ALL {
            assert_eq!(cal.labeled().merged(day), cal.busy().day(day));
        }
        assert_eq!(cal.busy().day(Day::Wednesday).len(), 2);
        assert_eq!(cal.labeled().day(Day::Wednesday).len(), 3);
    }

    #[test]
    fn test_free_block_count_empty_week() {
        assert_eq!(BusyGrid::new().free_block_count(), 5 * 99);
    }
}
