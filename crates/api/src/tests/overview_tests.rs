// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the daily leave overview handler.

use shiftboard_persistence::Persistence;

use crate::tests::helpers::create_test_persistence;
use crate::{
    ApiError, AssignmentPolicy, DailyOverviewResponse, SetAssignmentRequest, get_daily_overview,
    set_assignment,
};

fn record(persistence: &mut Persistence, employee_id: &str, date: &str, shift_type: &str) {
    set_assignment(
        persistence,
        &AssignmentPolicy::default(),
        employee_id,
        date,
        &SetAssignmentRequest {
            shift_type: shift_type.to_string(),
        },
    )
    .unwrap();
}

#[test]
fn test_overview_groups_by_leave_type() {
    let mut persistence: Persistence = create_test_persistence();
    record(&mut persistence, "E1", "2024-06-10", "annual");
    record(&mut persistence, "E2", "2024-06-10", "overtime");
    record(&mut persistence, "E2", "2024-06-11", "annual");

    let overview: DailyOverviewResponse =
        get_daily_overview(&mut persistence, "2024-06-10", None).unwrap();

    assert_eq!(overview.day_night, None);
    assert_eq!(overview.absences.len(), 2);
    assert_eq!(overview.absences[0].leave_type.name, "annual");
    assert_eq!(overview.absences[0].count, 1);
    assert_eq!(overview.absences[0].employees[0].employee_id, "E1");
    assert_eq!(overview.absences[1].count, 0);
    assert_eq!(overview.overtime.len(), 1);
    assert_eq!(overview.overtime[0].employees[0].name, "Employee E2");
}

#[test]
fn test_overview_cohort_filter() {
    let mut persistence: Persistence = create_test_persistence();
    record(&mut persistence, "E1", "2024-06-10", "annual");
    record(&mut persistence, "E2", "2024-06-10", "annual");

    let night: DailyOverviewResponse =
        get_daily_overview(&mut persistence, "2024-06-10", Some("N")).unwrap();

    assert_eq!(night.day_night.as_deref(), Some("N"));
    let listed: Vec<&str> = night.absences[0]
        .employees
        .iter()
        .map(|e| e.employee_id.as_str())
        .collect();
    assert_eq!(listed, vec!["E2"]);
}

#[test]
fn test_overview_ignores_raw_shift_codes() {
    let mut persistence: Persistence = create_test_persistence();
    record(&mut persistence, "E1", "2024-06-10", "D12");

    let overview: DailyOverviewResponse =
        get_daily_overview(&mut persistence, "2024-06-10", None).unwrap();

    assert!(overview.absences.iter().all(|h| h.count == 0));
    assert!(overview.overtime.iter().all(|h| h.count == 0));
}

#[test]
fn test_overview_rejects_unknown_cohort() {
    let mut persistence: Persistence = create_test_persistence();

    let result = get_daily_overview(&mut persistence, "2024-06-10", Some("X"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "day_night"
    ));
}
