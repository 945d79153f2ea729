// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DailyLeaveOverview, DayNight, Employee, EmployeeId, LeaveType, LeaveTypeCatalog,
    ShiftAssignment, ShiftPattern, daily_leave_overview, parse_date,
};
use time::{Date, OffsetDateTime};

fn create_test_employee(id: &str, name: &str, day_night: DayNight) -> Employee {
    let mut employee: Employee =
        Employee::new(EmployeeId::new(id).unwrap(), name, Some(ShiftPattern::A));
    employee.day_night = Some(day_night);
    employee
}

fn assignment(id: &str, day: &str, shift_type: &str) -> ShiftAssignment {
    ShiftAssignment::new(
        EmployeeId::new(id).unwrap(),
        parse_date(day).unwrap(),
        shift_type,
        OffsetDateTime::UNIX_EPOCH,
    )
}

fn fixture() -> (Vec<Employee>, Vec<ShiftAssignment>, LeaveTypeCatalog) {
    let employees: Vec<Employee> = vec![
        create_test_employee("E1", "Ada", DayNight::Day),
        create_test_employee("E2", "Bo", DayNight::Night),
        create_test_employee("E3", "Cy", DayNight::Day),
    ];
    let assignments: Vec<ShiftAssignment> = vec![
        assignment("E1", "2024-06-10", "annual"),
        assignment("E2", "2024-06-10", "annual"),
        assignment("E3", "2024-06-10", "overtime"),
        assignment("E3", "2024-06-11", "annual"),
        assignment("E9", "2024-06-10", "annual"),
        assignment("E1", "2024-06-12", "DA"),
    ];
    let catalog: LeaveTypeCatalog = LeaveTypeCatalog::new(vec![
        LeaveType::new("annual", false),
        LeaveType::new("sick", false),
        LeaveType::new("overtime", true),
    ])
    .unwrap();
    (employees, assignments, catalog)
}

#[test]
fn test_overview_groups_by_leave_type() {
    let (employees, assignments, catalog) = fixture();
    let date: Date = parse_date("2024-06-10").unwrap();

    let overview: DailyLeaveOverview =
        daily_leave_overview(date, &assignments, &employees, &catalog, None);

    assert_eq!(overview.absences.len(), 2);
    assert_eq!(overview.absences[0].leave_type.name, "annual");
    let names: Vec<&str> = overview.absences[0]
        .employees
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ada", "Bo"]);
    assert_eq!(overview.absences[1].count(), 0);
    assert_eq!(overview.overtime.len(), 1);
    assert_eq!(overview.overtime[0].count(), 1);
}

#[test]
fn test_overview_filters_by_cohort() {
    let (employees, assignments, catalog) = fixture();
    let date: Date = parse_date("2024-06-10").unwrap();

    let overview: DailyLeaveOverview = daily_leave_overview(
        date,
        &assignments,
        &employees,
        &catalog,
        Some(DayNight::Night),
    );

    assert_eq!(overview.cohort, Some(DayNight::Night));
    assert_eq!(overview.absences[0].count(), 1);
    assert_eq!(overview.absences[0].employees[0].name, "Bo");
    assert_eq!(overview.overtime[0].count(), 0);
}

#[test]
fn test_overview_ignores_raw_shift_codes() {
    let (employees, assignments, catalog) = fixture();
    let date: Date = parse_date("2024-06-12").unwrap();

    let overview: DailyLeaveOverview =
        daily_leave_overview(date, &assignments, &employees, &catalog, None);

    assert!(overview.absences.iter().all(|h| h.count() == 0));
    assert!(overview.overtime.iter().all(|h| h.count() == 0));
}
