// End-to-end runs through `plan`, from raw records to the final report.

use zlp_scheduler::models::{Day, RawRecord};
use zlp_scheduler::report::{DayOutcome, Window};
use zlp_scheduler::{ingest_records, plan, Report, SchedulerError, SectionRepository, ValidationError};

fn run(rows: &[(&str, &str, &str, &str, &str)]) -> Report {
    let records: Vec<RawRecord> = rows
        .iter()
        .map(|(a, b, c, d, e)| RawRecord::new(a, b, c, d, e))
        .collect();
    let mut repo = SectionRepository::new();
    ingest_records(&mut repo, &records);
    plan(&repo).expect("fixture has sections")
}

fn windows(report: &Report, day: Day) -> &[Window] {
    match &report.day(day).outcome {
        DayOutcome::Free { windows } => windows,
        other => panic!("{:?} not free: {:?}", day, other),
    }
}

fn window(start: &str, end: &str) -> Window {
    Window {
        start: start.to_string(),
        end: end.to_string(),
    }
}

#[test]
fn test_single_monday_class() {
    let report = run(&[("ABCD", "101", "M", "08:00", "100")]);
    assert!(report.all_days_free());

    let monday = windows(&report, Day::Monday);
    assert!(monday.contains(&window("09:45", "11:25")));
    // half-open: the class ends at 09:40, so a block may start right there
    assert_eq!(monday[0], window("09:40", "11:20"));
    assert_eq!(monday.len(), 79);

    for day in [Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday] {
        let w = windows(&report, day);
        assert_eq!(w.len(), 99);
        assert_eq!(w[0], window("08:00", "09:40"));
        assert_eq!(w[98], window("16:10", "17:50"));
    }

    let text = report.to_string();
    assert!(text.contains("Monday:\n  09:40 – 11:20\n"));
    assert!(!text.contains("no free block"));
}

#[test]
fn test_optional_course_picks_earlier_monday_section() {
    let report = run(&[
        ("WXYZ", "305", "M", "08:00", "100"),
        ("WXYZ", "305", "M", "14:00", "100"),
    ]);
    assert_eq!(report.sections.len(), 1);
    assert_eq!(report.sections[0].start, "08:00");
    assert!(!report.sections[0].mandatory);
    assert_eq!(windows(&report, Day::Monday).len(), 79);
}

#[test]
fn test_blocked_wednesday_names_each_class() {
    // 07:00-12:00 and 11:00-18:00 leave no 100-minute gap on Wednesday
    let report = run(&[
        ("ABCD", "101", "W", "07:00", "300"),
        ("EFGH", "202", "W", "11:00", "420"),
    ]);
    assert!(!report.all_days_free());
    assert_eq!(windows(&report, Day::Monday).len(), 99);

    match &report.day(Day::Wednesday).outcome {
        DayOutcome::Conflicted { min_conflicts, groups } => {
            assert_eq!(*min_conflicts, 1);
            assert_eq!(groups.len(), 2);

            let first = &groups[0];
            assert_eq!(first.offenders.len(), 1);
            assert_eq!(first.offenders[0].course, "ABCD 101");
            assert_eq!(first.offenders[0].start, "07:00");
            assert_eq!(first.offenders[0].duration, 300);
            assert_eq!(first.starts.first().map(String::as_str), Some("08:00"));
            assert_eq!(first.starts.last().map(String::as_str), Some("09:20"));

            let second = &groups[1];
            assert_eq!(second.offenders[0].course, "EFGH 202");
            assert_eq!(second.offenders[0].start, "11:00");
            assert_eq!(second.offenders[0].duration, 420);
            assert_eq!(second.starts.first().map(String::as_str), Some("12:00"));
            assert_eq!(second.starts.last().map(String::as_str), Some("16:10"));
        }
        other => panic!("expected conflicts, got {:?}", other),
    }

    let text = report.to_string();
    let second_line = text.lines().nth(1).unwrap();
    assert_eq!(
        second_line,
        "Some days have no free block; those list the least-conflicting starts instead."
    );
    assert!(text.contains("Monday:\n  08:00 – 09:40\n"));
    assert!(text.contains("Wednesday: no free block; minimum conflicts = 1"));
    assert!(text.contains("  ABCD 101 at 07:00 for 300 min"));
}

#[test]
fn test_stacked_classes_count_separately() {
    // merged view sees one run; labeled view sees two classes under every block
    let report = run(&[
        ("ABCD", "101", "F", "07:00", "700"),
        ("EFGH", "202", "F", "07:00", "700"),
    ]);
    match &report.day(Day::Friday).outcome {
        DayOutcome::Conflicted { min_conflicts, groups } => {
            assert_eq!(*min_conflicts, 2);
            assert_eq!(groups.len(), 1);
            let codes: Vec<&str> = groups[0].offenders.iter().map(|o| o.course.as_str()).collect();
            assert_eq!(codes, vec!["ABCD 101", "EFGH 202"]);
            assert_eq!(groups[0].starts.len(), 99);
        }
        other => panic!("expected conflicts, got {:?}", other),
    }
}

#[test]
fn test_lowercase_subject_is_rejected() {
    let mut repo = SectionRepository::new();
    let record = RawRecord::from_line("ab 221 MW 09:00 100").unwrap();
    let err = repo.ingest(&record).unwrap_err();
    assert!(matches!(err, ValidationError::CourseCode(_)));
    assert!(err.to_string().contains("course code malformed"));
    assert!(repo.courses().all(|c| c.sections.iter().all(|s| s.course != "ab 221")));
    assert!(matches!(plan(&repo), Err(SchedulerError::NoSections)));
}

#[test]
fn test_bad_rows_do_not_abort_the_run() {
    let records = vec![
        RawRecord::new("MEEN", "221", "MW", "09:00", "50"),
        RawRecord::new("MEEN", "222", "MW", "9:00", "50"),
        RawRecord::new("MEEN", "223", "MX", "09:00", "50"),
        RawRecord::new("MEEN", "224", "MW", "09:00", "0"),
    ];
    let mut repo = SectionRepository::new();
    assert_eq!(ingest_records(&mut repo, &records), 1);
    assert!(plan(&repo).is_ok());
}

#[test]
fn test_oversized_duration_is_skipped_not_fatal() {
    let records = vec![
        RawRecord::new("ABCD", "101", "M", "23:59", "4294967295"),
        RawRecord::new("ABCD", "101", "T", "08:00", "4294000000"),
    ];
    let mut repo = SectionRepository::new();
    assert_eq!(ingest_records(&mut repo, &records), 1);

    // the accepted row covers Tuesday entirely
    let report = plan(&repo).unwrap();
    assert_eq!(windows(&report, Day::Monday).len(), 99);
    match &report.day(Day::Tuesday).outcome {
        DayOutcome::Conflicted { min_conflicts, .. } => assert_eq!(*min_conflicts, 1),
        other => panic!("expected conflicts, got {:?}", other),
    }

    let mut repo = SectionRepository::new();
    assert_eq!(ingest_records(&mut repo, &records[..1]), 0);
    assert!(matches!(plan(&repo), Err(SchedulerError::NoSections)));
}

#[test]
fn test_json_report_shape() {
    let report = run(&[("ABCD", "101", "W", "07:00", "700")]);
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(value["days"][0]["day"], "Monday");
    assert_eq!(value["days"][0]["status"], "free");
    assert_eq!(value["days"][2]["status"], "conflicted");
    assert_eq!(value["days"][2]["min_conflicts"], 1);
    assert_eq!(value["sections"][0]["days"], "W");
}
