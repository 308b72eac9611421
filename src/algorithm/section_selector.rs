use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::algorithm::busy::{BusyGrid, Calendar};
use crate::models::{Minutes, Section};
use crate::repository::{Course, Partition};

/// An optional course's committed section and the score it won with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub course: String,
    pub section: Section,
    /// Total free blocks across the week right after this commit.
    pub score: usize,
}

/// Result of the greedy run: what was locked in and the final calendar.
#[derive(Debug, Clone)]
pub struct Selection {
    pub mandatory: BTreeMap<String, Section>,
    /// Optional courses in commit order.
    pub chosen: Vec<Choice>,
    pub calendar: Calendar,
}

impl Selection {
    /// Committed section of any course, mandatory or chosen.
    pub fn section_for(&self, code: &str) -> Option<&Section> {
        self.mandatory.get(code).or_else(|| {
            self.chosen
                .iter()
                .find(|c| c.course == code)
                .map(|c| &c.section)
        })
    }

    /// Chosen sections keyed by course code.
    pub fn chosen_map(&self) -> BTreeMap<&str, &Section> {
        self.chosen
            .iter()
            .map(|c| (c.course.as_str(), &c.section))
            .collect()
    }
}

/// Free blocks left across the week if `section` were added to `busy`.
/// Scores against a copy; `busy` is never modified.
pub fn score_candidate(busy: &BusyGrid, section: &Section) -> usize {
    busy.with_section(section).free_block_count()
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    course_idx: usize,
    section_idx: usize,
    start: Minutes,
    score: usize,
}

/// Best (course, section) among `remaining`: highest score, then earliest
/// start. Scanning is in course then section arrival order, so an exact
/// tie keeps the first candidate seen.
fn best_candidate(busy: &BusyGrid, remaining: &[Course]) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (course_idx, course) in remaining.iter().enumerate() {
        for (section_idx, section) in course.sections.iter().enumerate() {
            let score = score_candidate(busy, section);
            debug!(course = %course.code, days = %section.days, start = section.start, score, "candidate scored");
            let better = match best {
                None => true,
                Some(b) => score > b.score || (score == b.score && section.start < b.start),
            };
            if better {
                best = Some(Candidate {
                    course_idx,
                    section_idx,
                    start: section.start,
                    score,
                });
            }
        }
    }
    best
}

/// Locks every mandatory section, then greedily commits one section per
/// optional course until none remain.
pub fn select_sections(partition: Partition) -> Selection {
    let Partition {
        mandatory,
        optional: mut remaining,
    } = partition;

    let mut calendar = Calendar::new();
    for section in mandatory.values() {
        calendar.commit(section);
    }

    let mut chosen = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let Some(best) = best_candidate(calendar.busy(), &remaining) else {
            // only courses without sections are left
            warn!(left = remaining.len(), "optional courses without sections skipped");
            break;
        };
        let mut course = remaining.remove(best.course_idx);
        let section = course.sections.swap_remove(best.section_idx);
        calendar.commit(&section);
        info!(course = %course.code, days = %section.days, start = section.start, score = best.score, "section committed");
        chosen.push(Choice {
            course: course.code,
            section,
            score: best.score,
        });
    }

    Selection {
        mandatory,
        chosen,
        calendar,
    }
}
