//! In-memory collection of validated sections grouped by course code.

pub mod validate;

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::error::ValidationError;
use crate::models::{RawRecord, Section};

pub use validate::validate;

/// A course code and its sections in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: String,
    pub sections: Vec<Section>,
}

impl Course {
    pub fn is_mandatory(&self) -> bool {
        self.sections.len() == 1
    }
}

/// Mandatory (single-section) and optional (multi-section) courses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub mandatory: BTreeMap<String, Section>,
    /// Ordered by first arrival of each course; the selector scans in this order.
    pub optional: Vec<Course>,
}

#[derive(Debug, Clone, Default)]
pub struct SectionRepository {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl SectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `record` and appends the section under its course code.
    /// A rejected record leaves the repository unchanged.
    pub fn ingest(&mut self, record: &RawRecord) -> Result<&Section, ValidationError> {
        let section = validate(record)?;
        let idx = match self.index.get(&section.course) {
            Some(&i) => i,
            None => {
                self.courses.push(Course {
                    code: section.course.clone(),
                    sections: Vec::new(),
                });
                let i = self.courses.len() - 1;
                self.index.insert(section.course.clone(), i);
                i
            }
        };
        debug!(course = %section.course, days = %section.days, start = section.start, "section added");
        let sections = &mut self.courses[idx].sections;
        sections.push(section);
        Ok(&sections[sections.len() - 1])
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn section_count(&self) -> usize {
        self.courses.iter().map(|c| c.sections.len()).sum()
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn sections_for(&self, code: &str) -> Option<&[Section]> {
        self.index.get(code).map(|&i| self.courses[i].sections.as_slice())
    }

    /// Splits the current state into mandatory and optional courses.
    pub fn partition(&self) -> Partition {
        let mut partition = Partition::default();
        for course in &self.courses {
            if course.is_mandatory() {
                partition
                    .mandatory
                    .insert(course.code.clone(), course.sections[0].clone());
            } else {
                partition.optional.push(course.clone());
            }
        }
        info!(
            mandatory = partition.mandatory.len(),
            optional = partition.optional.len(),
            "courses partitioned"
        );
        partition
    }
}
