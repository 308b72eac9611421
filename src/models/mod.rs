// Core data structures: days, intervals, sections and raw input records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minutes since midnight.
pub type Minutes = u32;

/// Weekday of a class meeting. Iteration order is Monday..Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Single-letter code used in schedules (`R` is Thursday).
    pub fn letter(self) -> char {
        match self {
            Day::Monday => 'M',
            Day::Tuesday => 'T',
            Day::Wednesday => 'W',
            Day::Thursday => 'R',
            Day::Friday => 'F',
        }
    }

    /// Case-insensitive inverse of [`Day::letter`].
    pub fn from_letter(c: char) -> Option<Day> {
        match c.to_ascii_uppercase() {
            'M' => Some(Day::Monday),
            'T' => Some(Day::Tuesday),
            'W' => Some(Day::Wednesday),
            'R' => Some(Day::Thursday),
            'F' => Some(Day::Friday),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Set of weekdays stored as a bitmask (bit `i` = `Day::ALL[i]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub struct DayMask(u8);

impl DayMask {
    pub const fn empty() -> Self {
        DayMask(0)
    }

    /// Parses a day string such as `"MWF"` or `"tr"`.
    /// Returns `None` for an empty string or any letter outside `MTWRF`.
    pub fn parse(s: &str) -> Option<DayMask> {
        if s.is_empty() {
            return None;
        }
        let mut mask = DayMask::empty();
        for c in s.chars() {
            mask.insert(Day::from_letter(c)?);
        }
        Some(mask)
    }

    pub fn insert(&mut self, day: Day) {
        self.0 |= 1 << day.index();
    }

    pub fn contains(self, day: Day) -> bool {
        self.0 & (1 << day.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in the mask, Monday first.
    pub fn iter(self) -> impl Iterator<Item = Day> {
        Day::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Day> for DayMask {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        let mut mask = DayMask::empty();
        for day in iter {
            mask.insert(day);
        }
        mask
    }
}

impl fmt::Display for DayMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            write!(f, "{}", day.letter())?;
        }
        Ok(())
    }
}

impl From<DayMask> for String {
    fn from(mask: DayMask) -> String {
        mask.to_string()
    }
}

/// Half-open minute interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Interval {
    pub start: Minutes,
    pub end: Minutes,
}

impl Interval {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        debug_assert!(start <= end, "interval start after end");
        Interval { start, end }
    }

    pub fn with_len(start: Minutes, len: Minutes) -> Self {
        Interval::new(start, start.saturating_add(len))
    }

    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", to_hhmm(self.start), to_hhmm(self.end))
    }
}

/// One scheduled offering of a course. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub course: String,
    pub days: DayMask,
    pub start: Minutes,
    pub duration: Minutes,
}

impl Section {
    pub fn interval(&self) -> Interval {
        Interval::with_len(self.start, self.duration)
    }
}

/// Busy interval that keeps the course it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledInterval {
    pub course: String,
    pub interval: Interval,
}

impl LabeledInterval {
    pub fn start(&self) -> Minutes {
        self.interval.start
    }

    pub fn end(&self) -> Minutes {
        self.interval.end
    }

    pub fn duration(&self) -> Minutes {
        self.interval.duration()
    }
}

/// Unvalidated five-field record as delivered by a spreadsheet row or a
/// prompt line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    pub subject: String,
    pub number: String,
    pub days: String,
    pub start: String,
    pub duration: String,
}

impl RawRecord {
    pub fn new(subject: &str, number: &str, days: &str, start: &str, duration: &str) -> Self {
        RawRecord {
            subject: subject.to_string(),
            number: number.to_string(),
            days: days.to_string(),
            start: start.to_string(),
            duration: duration.to_string(),
        }
    }

    /// Builds a record from a whitespace-separated line
    /// (`SUBJ NUM DAYS HH:MM DURATION`). Returns the field count on mismatch.
    pub fn from_line(line: &str) -> Result<Self, usize> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [subject, number, days, start, duration] => {
                Ok(RawRecord::new(subject, number, days, start, duration))
            }
            other => Err(other.len()),
        }
    }
}

/// Formats minutes as zero-padded `HH:MM`. Values past midnight keep
/// counting hours (`25:10`).
pub fn to_hhmm(m: Minutes) -> String {
    format!("{:02}:{:02}", m / 60, m % 60)
}
