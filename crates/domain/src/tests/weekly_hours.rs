// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CalendarTag, CalendarTags, DayHoursSource, DomainError, Employee, EmployeeId, LeaveType,
    LeaveTypeCatalog, ShiftAssignment, ShiftPattern, WeeklyHoursPolicy, WeeklyHoursReport,
    compute_weekly_hours, parse_date, validate_weekly_hours,
};
use time::{Date, OffsetDateTime};

fn create_test_catalog() -> LeaveTypeCatalog {
    LeaveTypeCatalog::new(vec![
        LeaveType::new("annual", false),
        LeaveType::new("sick", false),
        LeaveType::new("overtime", true),
    ])
    .unwrap()
}

fn create_test_employee(pattern: Option<ShiftPattern>) -> Employee {
    Employee::new(EmployeeId::new("E100").unwrap(), "Test Employee", pattern)
}

fn date(value: &str) -> Date {
    parse_date(value).unwrap()
}

/// Tags each listed date with the given pattern.
fn tag_days(days: &[&str], pattern: ShiftPattern) -> CalendarTags {
    days.iter()
        .map(|d| CalendarTag::new(date(d), false, Some(pattern)))
        .collect()
}

fn no_assignments() -> Vec<ShiftAssignment> {
    Vec::new()
}

fn assignment(employee_id: &str, day: &str, shift_type: &str) -> ShiftAssignment {
    ShiftAssignment::new(
        EmployeeId::new(employee_id).unwrap(),
        date(day),
        shift_type,
        OffsetDateTime::UNIX_EPOCH,
    )
}

#[test]
fn test_absence_candidate_on_scheduled_day_contributes_nothing() {
    // 2024-06-10 is a Monday.
    let tags: CalendarTags = tag_days(&["2024-06-10", "2024-06-11", "2024-06-12"], ShiftPattern::A);
    let employee: Employee = create_test_employee(Some(ShiftPattern::A));

    let report: WeeklyHoursReport = compute_weekly_hours(
        &employee,
        date("2024-06-10"),
        "annual",
        &no_assignments(),
        &tags,
        &create_test_catalog(),
        &WeeklyHoursPolicy::default(),
    )
    .unwrap();

    assert_eq!(report.week_start, date("2024-06-10"));
    assert_eq!(report.days.len(), 7);
    assert_eq!(report.total_hours, 20);
    assert_eq!(report.days[0].hours, 0);
    assert!(matches!(
        report.days[0].source,
        DayHoursSource::Absence { .. }
    ));
    assert_eq!(report.days[1].source, DayHoursSource::ScheduledShift);
}

#[test]
fn test_six_scheduled_days_exceed_cap() {
    let tags: CalendarTags = tag_days(
        &[
            "2024-06-10",
            "2024-06-11",
            "2024-06-12",
            "2024-06-13",
            "2024-06-14",
            "2024-06-15",
        ],
        ShiftPattern::A,
    );
    let employee: Employee = create_test_employee(Some(ShiftPattern::A));

    let result: Result<WeeklyHoursReport, DomainError> = validate_weekly_hours(
        &employee,
        date("2024-06-16"),
        "sick",
        &no_assignments(),
        &tags,
        &create_test_catalog(),
        &WeeklyHoursPolicy::default(),
    );

    let err: DomainError = result.unwrap_err();
    assert_eq!(
        err,
        DomainError::HoursExceeded {
            employee_id: String::from("E100"),
            week_start: date("2024-06-10"),
            total_hours: 60,
            cap: 50,
        }
    );
    assert!(format!("{err}").contains("60"));
}

#[test]
fn test_exactly_at_cap_is_accepted() {
    let tags: CalendarTags = tag_days(
        &[
            "2024-06-10",
            "2024-06-11",
            "2024-06-12",
            "2024-06-13",
            "2024-06-14",
        ],
        ShiftPattern::A,
    );
    let employee: Employee = create_test_employee(Some(ShiftPattern::A));

    let report: WeeklyHoursReport = validate_weekly_hours(
        &employee,
        date("2024-06-15"),
        "annual",
        &no_assignments(),
        &tags,
        &create_test_catalog(),
        &WeeklyHoursPolicy::default(),
    )
    .unwrap();

    assert_eq!(report.total_hours, 50);
    assert!(!report.exceeds_cap());
}

#[test]
fn test_overtime_on_rest_day_adds_hours() {
    let mut tags: CalendarTags = tag_days(&["2024-06-10", "2024-06-11"], ShiftPattern::A);
    tags.upsert(CalendarTag::new(date("2024-06-12"), false, Some(ShiftPattern::B)));
    let employee: Employee = create_test_employee(Some(ShiftPattern::A));

    let report: WeeklyHoursReport = compute_weekly_hours(
        &employee,
        date("2024-06-12"),
        "overtime",
        &no_assignments(),
        &tags,
        &create_test_catalog(),
        &WeeklyHoursPolicy::default(),
    )
    .unwrap();

    assert_eq!(report.total_hours, 30);
    assert_eq!(
        report.days[2].source,
        DayHoursSource::Overtime {
            shift_type: String::from("overtime")
        }
    );
}

#[test]
fn test_holidays_are_not_scheduled_workdays() {
    let tags: CalendarTags = [
        CalendarTag::new(date("2024-12-23"), false, Some(ShiftPattern::B)),
        CalendarTag::new(date("2024-12-24"), false, Some(ShiftPattern::B)),
        CalendarTag::new(date("2024-12-25"), true, Some(ShiftPattern::B)),
    ]
    .into_iter()
    .collect();
    let employee: Employee = create_test_employee(Some(ShiftPattern::B));

    let report: WeeklyHoursReport = compute_weekly_hours(
        &employee,
        date("2024-12-29"),
        "annual",
        &no_assignments(),
        &tags,
        &create_test_catalog(),
        &WeeklyHoursPolicy::default(),
    )
    .unwrap();

    assert_eq!(report.total_hours, 20);
    assert_eq!(report.days[2].source, DayHoursSource::Off);
}

#[test]
fn test_candidate_replaces_existing_assignment() {
    let tags: CalendarTags = tag_days(&["2024-06-10"], ShiftPattern::B);
    let employee: Employee = create_test_employee(Some(ShiftPattern::A));
    let existing: Vec<ShiftAssignment> = vec![assignment("E100", "2024-06-10", "overtime")];

    let report: WeeklyHoursReport = compute_weekly_hours(
        &employee,
        date("2024-06-10"),
        "annual",
        &existing,
        &tags,
        &create_test_catalog(),
        &WeeklyHoursPolicy::default(),
    )
    .unwrap();

    assert_eq!(report.total_hours, 0);
}

#[test]
fn test_existing_assignments_outside_week_or_employee_are_ignored() {
    let employee: Employee = create_test_employee(Some(ShiftPattern::A));
    let existing: Vec<ShiftAssignment> = vec![
        assignment("E100", "2024-06-09", "overtime"),
        assignment("E100", "2024-06-17", "overtime"),
        assignment("E200", "2024-06-11", "overtime"),
        assignment("E100", "2024-06-13", "overtime"),
    ];

    let report: WeeklyHoursReport = compute_weekly_hours(
        &employee,
        date("2024-06-12"),
        "annual",
        &existing,
        &CalendarTags::new(),
        &create_test_catalog(),
        &WeeklyHoursPolicy::default(),
    )
    .unwrap();

    assert_eq!(report.total_hours, 10);
}

#[test]
fn test_raw_shift_codes_contribute_nothing() {
    let tags: CalendarTags = tag_days(&["2024-06-10"], ShiftPattern::A);
    let employee: Employee = create_test_employee(Some(ShiftPattern::A));

    let report: WeeklyHoursReport = compute_weekly_hours(
        &employee,
        date("2024-06-10"),
        "DA",
        &no_assignments(),
        &tags,
        &create_test_catalog(),
        &WeeklyHoursPolicy::default(),
    )
    .unwrap();

    assert_eq!(report.total_hours, 0);
}

#[test]
fn test_employee_without_pattern_has_no_scheduled_days() {
    let tags: CalendarTags = tag_days(&["2024-06-10", "2024-06-11"], ShiftPattern::A);
    let employee: Employee = create_test_employee(None);

    let report: WeeklyHoursReport = compute_weekly_hours(
        &employee,
        date("2024-06-14"),
        "overtime",
        &no_assignments(),
        &tags,
        &create_test_catalog(),
        &WeeklyHoursPolicy::default(),
    )
    .unwrap();

    assert_eq!(report.total_hours, 10);
}

#[test]
fn test_custom_policy() {
    let tags: CalendarTags = tag_days(&["2024-06-10", "2024-06-11"], ShiftPattern::A);
    let employee: Employee = create_test_employee(Some(ShiftPattern::A));
    let policy: WeeklyHoursPolicy = WeeklyHoursPolicy::new(12, 30);

    let result: Result<WeeklyHoursReport, DomainError> = validate_weekly_hours(
        &employee,
        date("2024-06-12"),
        "overtime",
        &no_assignments(),
        &tags,
        &create_test_catalog(),
        &policy,
    );

    assert!(matches!(
        result,
        Err(DomainError::HoursExceeded {
            total_hours: 36,
            cap: 30,
            ..
        })
    ));
}
