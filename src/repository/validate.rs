// Record validation: turns a RawRecord into a Section or names the broken rule.

use chrono::{NaiveTime, Timelike};

use crate::error::ValidationError;
use crate::models::{DayMask, Minutes, RawRecord, Section};

/// Subject: exactly four uppercase ASCII letters (`MEEN`).
fn valid_subject(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Number: three digits, optionally followed by the lab marker (`221`, `221L`).
fn valid_number(s: &str) -> bool {
    let digits = match s.len() {
        3 => s,
        4 if s.ends_with(['L', 'l']) => &s[..3],
        _ => return false,
    };
    digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses strict 24-hour `HH:MM` into minutes from midnight.
pub fn parse_start(s: &str) -> Option<Minutes> {
    let b = s.as_bytes();
    let shape_ok = b.len() == 5
        && b[2] == b':'
        && b[..2].iter().chain(&b[3..]).all(|c| c.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    let t = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
    Some(t.hour() * 60 + t.minute())
}

/// Positive integer made of ASCII digits only.
fn parse_duration(s: &str) -> Option<Minutes> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<Minutes>().ok().filter(|d| *d > 0)
}

/// Checks the rules in order (course code, days, start, duration) and
/// returns the first violation.
pub fn validate(record: &RawRecord) -> Result<Section, ValidationError> {
    let course = format!("{} {}", record.subject, record.number);
    if !valid_subject(&record.subject) || !valid_number(&record.number) {
        return Err(ValidationError::CourseCode(course));
    }

    let days = DayMask::parse(&record.days)
        .ok_or_else(|| ValidationError::Days(record.days.clone()))?;

    let start =
        parse_start(&record.start).ok_or_else(|| ValidationError::StartTime(record.start.clone()))?;

    // the class must end on the minute line, so start + duration has to fit
    let duration = parse_duration(&record.duration)
        .filter(|d| start.checked_add(*d).is_some())
        .ok_or_else(|| ValidationError::Duration(record.duration.clone()))?;

    // no start-time range restriction beyond a valid clock time
    Ok(Section {
        course,
        days,
        start,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        let s = validate(&RawRecord::new("MEEN", "221L", "mwf", "09:10", "50")).unwrap();
        assert_eq!(s.course, "MEEN 221L");
        assert_eq!(s.days.to_string(), "MWF");
        assert_eq!(s.start, 550);
        assert_eq!(s.duration, 50);
    }

    #[test]
    fn test_course_code_rules() {
        for (subj, num) in [("ab", "221"), ("MEE", "221"), ("MEEN", "22"), ("MEEN", "221X"), ("MEEN", "2a1")] {
            let err = validate(&RawRecord::new(subj, num, "M", "09:00", "50")).unwrap_err();
            assert!(matches!(err, ValidationError::CourseCode(_)), "{subj} {num}");
        }
    }

    #[test]
    fn test_days_rule() {
        let err = validate(&RawRecord::new("MEEN", "221", "MS", "09:00", "50")).unwrap_err();
        assert_eq!(err, ValidationError::Days("MS".to_string()));
        let err = validate(&RawRecord::new("MEEN", "221", "", "09:00", "50")).unwrap_err();
        assert!(matches!(err, ValidationError::Days(_)));
    }

    #[test]
    fn test_start_rule() {
        assert_eq!(parse_start("00:00"), Some(0));
        assert_eq!(parse_start("23:59"), Some(1439));
        for bad in ["24:00", "9:00", "09:60", "0900", "09:5", " 09:00", "ab:cd"] {
            assert_eq!(parse_start(bad), None, "{bad}");
        }
    }

    #[test]
    fn test_duration_rule() {
        for bad in ["0", "-5", "+5", "", "1.5", "abc", "99999999999"] {
            let err = validate(&RawRecord::new("MEEN", "221", "M", "09:00", bad)).unwrap_err();
            assert!(matches!(err, ValidationError::Duration(_)), "{bad}");
        }
        let ok = validate(&RawRecord::new("MEEN", "221", "M", "09:00", "075")).unwrap();
        assert_eq!(ok.duration, 75);
    }

    #[test]
    fn test_duration_past_end_of_minute_range() {
        let err = validate(&RawRecord::new("ABCD", "101", "M", "23:59", "4294967295")).unwrap_err();
        assert_eq!(err, ValidationError::Duration("4294967295".to_string()));

        let max = Minutes::MAX - 1439;
        let ok = validate(&RawRecord::new("ABCD", "101", "M", "23:59", &max.to_string())).unwrap();
        assert_eq!(ok.interval().end, Minutes::MAX);
    }

    #[test]
    fn test_first_violation_wins() {
        let err = validate(&RawRecord::new("ab", "221", "XX", "99:99", "0")).unwrap_err();
        assert!(matches!(err, ValidationError::CourseCode(_)));
    }
}
