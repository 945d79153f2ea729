// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the assignment handlers and weekly hours enforcement.

use shiftboard_persistence::Persistence;

use crate::tests::helpers::{create_test_persistence, enforcing_policy, tag_working_week};
use crate::{
    ApiError, AssignmentMutationResponse, AssignmentPolicy, ListAssignmentsResponse,
    MoveAssignmentRequest, SetAssignmentRequest, WeeklyHoursRequest, WeeklyHoursResponse,
    check_weekly_hours, clear_assignment, list_assignments, move_assignment, set_assignment,
};

fn set(
    persistence: &mut Persistence,
    policy: &AssignmentPolicy,
    employee_id: &str,
    date: &str,
    shift_type: &str,
) -> Result<AssignmentMutationResponse, ApiError> {
    set_assignment(
        persistence,
        policy,
        employee_id,
        date,
        &SetAssignmentRequest {
            shift_type: shift_type.to_string(),
        },
    )
}

fn move_request(from_date: &str, to_employee_id: &str, to_date: &str) -> MoveAssignmentRequest {
    MoveAssignmentRequest {
        from_date: from_date.to_string(),
        to_employee_id: to_employee_id.to_string(),
        to_date: to_date.to_string(),
    }
}

fn shift_types(persistence: &mut Persistence, employee_id: &str) -> Vec<(String, String)> {
    let response: ListAssignmentsResponse = list_assignments(persistence, employee_id).unwrap();
    response
        .assignments
        .into_iter()
        .map(|a| (a.date, a.shift_type))
        .collect()
}

#[test]
fn test_set_creates_then_updates() {
    let mut persistence: Persistence = create_test_persistence();
    let policy: AssignmentPolicy = AssignmentPolicy::default();

    let created: AssignmentMutationResponse =
        set(&mut persistence, &policy, "E1", "2024-06-10", "annual").unwrap();
    let updated: AssignmentMutationResponse =
        set(&mut persistence, &policy, "E1", "2024-06-10", "sick").unwrap();

    assert_eq!(created.outcome, "created");
    assert_eq!(updated.outcome, "updated");
    assert_eq!(updated.assignments[0].created_at, created.assignments[0].created_at);
    assert_eq!(
        shift_types(&mut persistence, "E1"),
        vec![(String::from("2024-06-10"), String::from("sick"))]
    );
}

#[test]
fn test_set_rejects_blank_shift_type() {
    let mut persistence: Persistence = create_test_persistence();

    let result = set(
        &mut persistence,
        &AssignmentPolicy::default(),
        "E1",
        "2024-06-10",
        "   ",
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "shift_type"
    ));
}

#[test]
fn test_set_for_unknown_employee_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = set(
        &mut persistence,
        &AssignmentPolicy::default(),
        "E404",
        "2024-06-10",
        "annual",
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_clear_assignment() {
    let mut persistence: Persistence = create_test_persistence();
    set(&mut persistence, &AssignmentPolicy::default(), "E1", "2024-06-10", "annual").unwrap();

    let cleared: AssignmentMutationResponse =
        clear_assignment(&mut persistence, "E1", "2024-06-10").unwrap();
    let again = clear_assignment(&mut persistence, "E1", "2024-06-10");

    assert_eq!(cleared.outcome, "cleared");
    assert!(cleared.assignments.is_empty());
    assert!(shift_types(&mut persistence, "E1").is_empty());
    assert!(matches!(again, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_move_to_empty_slot() {
    let mut persistence: Persistence = create_test_persistence();
    let policy: AssignmentPolicy = AssignmentPolicy::default();
    set(&mut persistence, &policy, "E1", "2024-06-10", "annual").unwrap();

    let moved: AssignmentMutationResponse = move_assignment(
        &mut persistence,
        &policy,
        "E1",
        &move_request("2024-06-10", "E2", "2024-06-11"),
    )
    .unwrap();

    assert_eq!(moved.outcome, "moved");
    assert!(shift_types(&mut persistence, "E1").is_empty());
    assert_eq!(
        shift_types(&mut persistence, "E2"),
        vec![(String::from("2024-06-11"), String::from("annual"))]
    );
}

#[test]
fn test_move_onto_occupied_slot_swaps() {
    let mut persistence: Persistence = create_test_persistence();
    let policy: AssignmentPolicy = AssignmentPolicy::default();
    set(&mut persistence, &policy, "E1", "2024-06-10", "annual").unwrap();
    set(&mut persistence, &policy, "E2", "2024-06-12", "sick").unwrap();

    let swapped: AssignmentMutationResponse = move_assignment(
        &mut persistence,
        &policy,
        "E1",
        &move_request("2024-06-10", "E2", "2024-06-12"),
    )
    .unwrap();

    assert_eq!(swapped.outcome, "swapped");
    assert_eq!(swapped.assignments.len(), 2);
    assert_eq!(
        shift_types(&mut persistence, "E1"),
        vec![(String::from("2024-06-10"), String::from("sick"))]
    );
    assert_eq!(
        shift_types(&mut persistence, "E2"),
        vec![(String::from("2024-06-12"), String::from("annual"))]
    );
}

#[test]
fn test_move_from_empty_slot_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = move_assignment(
        &mut persistence,
        &AssignmentPolicy::default(),
        "E1",
        &move_request("2024-06-10", "E2", "2024-06-11"),
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_move_to_same_slot_is_unchanged() {
    let mut persistence: Persistence = create_test_persistence();
    let policy: AssignmentPolicy = AssignmentPolicy::default();
    set(&mut persistence, &policy, "E1", "2024-06-10", "annual").unwrap();

    let response: AssignmentMutationResponse = move_assignment(
        &mut persistence,
        &policy,
        "E1",
        &move_request("2024-06-10", "E1", "2024-06-10"),
    )
    .unwrap();

    assert_eq!(response.outcome, "unchanged");
    assert_eq!(shift_types(&mut persistence, "E1").len(), 1);
}

#[test]
fn test_enforced_cap_rejects_overtime_on_full_week() {
    let mut persistence: Persistence = create_test_persistence();
    tag_working_week(&mut persistence);

    let result = set(&mut persistence, &enforcing_policy(), "E1", "2024-06-15", "overtime");

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "weekly_hours_cap"
    ));
    assert!(shift_types(&mut persistence, "E1").is_empty());
}

#[test]
fn test_unenforced_policy_allows_overtime_on_full_week() {
    let mut persistence: Persistence = create_test_persistence();
    tag_working_week(&mut persistence);

    let response: AssignmentMutationResponse = set(
        &mut persistence,
        &AssignmentPolicy::default(),
        "E1",
        "2024-06-15",
        "overtime",
    )
    .unwrap();

    assert_eq!(response.outcome, "created");
}

#[test]
fn test_enforced_cap_allows_absence() {
    let mut persistence: Persistence = create_test_persistence();
    tag_working_week(&mut persistence);

    let response: AssignmentMutationResponse =
        set(&mut persistence, &enforcing_policy(), "E1", "2024-06-10", "annual").unwrap();

    assert_eq!(response.outcome, "created");
}

#[test]
fn test_enforced_cap_rejects_move_and_keeps_source() {
    let mut persistence: Persistence = create_test_persistence();
    tag_working_week(&mut persistence);
    let policy: AssignmentPolicy = enforcing_policy();
    // E2 rests all week, so one overtime day stays under the cap.
    set(&mut persistence, &policy, "E2", "2024-06-15", "overtime").unwrap();

    let result = move_assignment(
        &mut persistence,
        &policy,
        "E2",
        &move_request("2024-06-15", "E1", "2024-06-15"),
    );

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
    assert_eq!(
        shift_types(&mut persistence, "E2"),
        vec![(String::from("2024-06-15"), String::from("overtime"))]
    );
    assert!(shift_types(&mut persistence, "E1").is_empty());
}

#[test]
fn test_enforced_cap_rejects_swap_overloading_source_week() {
    let mut persistence: Persistence = create_test_persistence();
    tag_working_week(&mut persistence);
    let policy: AssignmentPolicy = enforcing_policy();
    // E1 works 06-11..14 and sits at the cap with Sunday overtime.
    set(&mut persistence, &policy, "E1", "2024-06-10", "annual").unwrap();
    set(&mut persistence, &policy, "E1", "2024-06-16", "overtime").unwrap();
    set(&mut persistence, &policy, "E2", "2024-06-15", "overtime").unwrap();

    let result = move_assignment(
        &mut persistence,
        &policy,
        "E1",
        &move_request("2024-06-10", "E2", "2024-06-15"),
    );

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
    assert_eq!(
        shift_types(&mut persistence, "E1"),
        vec![
            (String::from("2024-06-10"), String::from("annual")),
            (String::from("2024-06-16"), String::from("overtime")),
        ]
    );
    assert_eq!(
        shift_types(&mut persistence, "E2"),
        vec![(String::from("2024-06-15"), String::from("overtime"))]
    );
}

#[test]
fn test_unenforced_swap_allowed() {
    let mut persistence: Persistence = create_test_persistence();
    tag_working_week(&mut persistence);
    let policy: AssignmentPolicy = AssignmentPolicy::default();
    set(&mut persistence, &policy, "E1", "2024-06-10", "annual").unwrap();
    set(&mut persistence, &policy, "E1", "2024-06-16", "overtime").unwrap();
    set(&mut persistence, &policy, "E2", "2024-06-15", "overtime").unwrap();

    let response: AssignmentMutationResponse = move_assignment(
        &mut persistence,
        &policy,
        "E1",
        &move_request("2024-06-10", "E2", "2024-06-15"),
    )
    .unwrap();

    assert_eq!(response.outcome, "swapped");
}

#[test]
fn test_weekly_precheck_reports_week() {
    let mut persistence: Persistence = create_test_persistence();
    tag_working_week(&mut persistence);

    let report: WeeklyHoursResponse = check_weekly_hours(
        &mut persistence,
        &AssignmentPolicy::default(),
        "E1",
        &WeeklyHoursRequest {
            date: String::from("2024-06-12"),
            shift_type: String::from("annual"),
        },
    )
    .unwrap();

    assert_eq!(report.week_start, "2024-06-10");
    assert_eq!(report.days.len(), 7);
    assert_eq!(report.total_hours, 40);
    assert_eq!(report.cap, 50);
    assert_eq!(report.days[2].source, "absence");
    assert_eq!(report.days[5].source, "off");
}

#[test]
fn test_weekly_precheck_rejects_over_cap() {
    let mut persistence: Persistence = create_test_persistence();
    tag_working_week(&mut persistence);

    let result = check_weekly_hours(
        &mut persistence,
        &AssignmentPolicy::default(),
        "E1",
        &WeeklyHoursRequest {
            date: String::from("2024-06-16"),
            shift_type: String::from("overtime"),
        },
    );

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
    assert!(shift_types(&mut persistence, "E1").is_empty());
}
