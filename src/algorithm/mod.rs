// Scheduling core: grid scans, busy views, greedy selection and diagnostics.
pub mod busy;
pub mod conflict;
pub mod grid;
pub mod section_selector;

pub use busy::{BusyGrid, Calendar, LabeledBusyGrid};
pub use conflict::{diagnose_day, min_conflict_by_labels, offenders_at, ConflictGroup, DayConflicts};
pub use grid::{merge, overlaps, scan_grid, GridScan};
pub use section_selector::{score_candidate, select_sections, Choice, Selection};
