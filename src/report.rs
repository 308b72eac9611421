//! Final per-day report: free study windows, or the least-bad starts and
//! the classes in the way.

use std::fmt;

use serde::Serialize;

use crate::algorithm::conflict::{diagnose_day, DayConflicts};
use crate::algorithm::grid::{scan_grid, BLOCK_LEN, GRID_END, GRID_START};
use crate::algorithm::section_selector::Selection;
use crate::models::{to_hhmm, Day, Interval, LabeledInterval, Minutes, Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: String,
    pub end: String,
}

impl From<&Interval> for Window {
    fn from(iv: &Interval) -> Self {
        Window {
            start: to_hhmm(iv.start),
            end: to_hhmm(iv.end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offender {
    pub course: String,
    pub start: String,
    pub end: String,
    pub duration: Minutes,
}

impl From<&LabeledInterval> for Offender {
    fn from(l: &LabeledInterval) -> Self {
        Offender {
            course: l.course.clone(),
            start: to_hhmm(l.start()),
            end: to_hhmm(l.end()),
            duration: l.duration(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub offenders: Vec<Offender>,
    pub starts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayOutcome {
    Free { windows: Vec<Window> },
    Conflicted { min_conflicts: usize, groups: Vec<Group> },
}

impl From<DayConflicts> for DayOutcome {
    fn from(c: DayConflicts) -> Self {
        DayOutcome::Conflicted {
            min_conflicts: c.min_conflicts,
            groups: c
                .groups
                .iter()
                .map(|g| Group {
                    offenders: g.offenders.iter().map(Offender::from).collect(),
                    starts: g.starts.iter().map(|s| to_hhmm(*s)).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub day: Day,
    #[serde(flatten)]
    pub outcome: DayOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedSection {
    pub course: String,
    pub days: String,
    pub start: String,
    pub duration: Minutes,
    pub mandatory: bool,
}

impl SelectedSection {
    fn new(section: &Section, mandatory: bool) -> Self {
        SelectedSection {
            course: section.course.clone(),
            days: section.days.to_string(),
            start: to_hhmm(section.start),
            duration: section.duration,
            mandatory,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub days: Vec<DayReport>,
    pub sections: Vec<SelectedSection>,
}

impl Report {
    /// Scans each weekday of the final merged grid; a day with no free
    /// block is diagnosed from the labeled grid instead.
    pub fn build(selection: &Selection) -> Report {
        let busy = selection.calendar.busy();
        let labeled = selection.calendar.labeled();

        let days = Day::ALL
            .iter()
            .map(|&day| {
                let scan = scan_grid(busy.day(day));
                let outcome = if scan.free_blocks.is_empty() {
                    DayOutcome::from(diagnose_day(labeled.day(day)))
                } else {
                    DayOutcome::Free {
                        windows: scan.free_blocks.iter().map(Window::from).collect(),
                    }
                };
                DayReport { day, outcome }
            })
            .collect();

        let sections = selection
            .mandatory
            .values()
            .map(|s| SelectedSection::new(s, true))
            .chain(selection.chosen.iter().map(|c| SelectedSection::new(&c.section, false)))
            .collect();

        Report { days, sections }
    }

    pub fn day(&self, day: Day) -> &DayReport {
        &self.days[day.index()]
    }

    /// True when every weekday has at least one free window.
    pub fn all_days_free(&self) -> bool {
        self.days
            .iter()
            .all(|d| matches!(d.outcome, DayOutcome::Free { .. }))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}-minute meeting blocks (start {}-{}):",
            BLOCK_LEN,
            to_hhmm(GRID_START),
            to_hhmm(GRID_END)
        )?;
        if !self.all_days_free() {
            writeln!(
                f,
                "Some days have no free block; those list the least-conflicting starts instead."
            )?;
        }
        for d in &self.days {
            match &d.outcome {
                DayOutcome::Free { windows } => {
                    writeln!(f, "{}:", d.day.name())?;
                    for w in windows {
                        writeln!(f, "  {} – {}", w.start, w.end)?;
                    }
                }
                DayOutcome::Conflicted { min_conflicts, groups } => {
                    writeln!(
                        f,
                        "{}: no free block; minimum conflicts = {}",
                        d.day.name(),
                        min_conflicts
                    )?;
                    for g in groups {
                        for o in &g.offenders {
                            writeln!(f, "  {} at {} for {} min", o.course, o.start, o.duration)?;
                        }
                        writeln!(f, "    starts: {}", g.starts.join(", "))?;
                    }
                }
            }
        }

        if !self.sections.is_empty() {
            writeln!(f)?;
            writeln!(f, "Selected sections:")?;
            for s in &self.sections {
                let kind = if s.mandatory { "only section" } else { "chosen" };
                writeln!(
                    f,
                    "  {:<10} {:<5} {} {:>4} min  ({})",
                    s.course, s.days, s.start, s.duration, kind
                )?;
            }
        }
        Ok(())
    }
}
