// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_assignment, create_test_roster, created_at, date, employee, later, slot,
};
use crate::{Command, CoreError, MutationOutcome, Roster, SlotWrite, TransitionResult, apply};
use shiftboard_domain::{DomainError, ShiftAssignment};

#[test]
fn test_set_assignment_creates_row_in_empty_slot() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::SetAssignment {
        employee_id: employee("E1"),
        date: date("2024-06-12"),
        shift_type: String::from("sick"),
    };

    let result: TransitionResult = apply(&roster, command, later()).unwrap();

    let row: &ShiftAssignment = result.new_roster.get(&slot("E1", "2024-06-12")).unwrap();
    assert_eq!(row.shift_type, "sick");
    assert_eq!(row.created_at, later());
    assert_eq!(row.updated_at, later());
    assert!(matches!(result.outcome, MutationOutcome::Created(_)));
    assert_eq!(result.writes, vec![SlotWrite::Upsert(row.clone())]);
    // The input roster is untouched.
    assert!(roster.get(&slot("E1", "2024-06-12")).is_none());
}

#[test]
fn test_set_assignment_overwrites_and_keeps_creation_time() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::SetAssignment {
        employee_id: employee("E1"),
        date: date("2024-06-10"),
        shift_type: String::from("sick"),
    };

    let result: TransitionResult = apply(&roster, command, later()).unwrap();

    let rows: Vec<&ShiftAssignment> = result
        .new_roster
        .assignments_for(&employee("E1"))
        .filter(|a| a.date == date("2024-06-10"))
        .collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].shift_type, "sick");
    assert_eq!(rows[0].created_at, created_at());
    assert_eq!(rows[0].updated_at, later());
    assert!(matches!(result.outcome, MutationOutcome::Updated(_)));
}

#[test]
fn test_set_assignment_twice_keeps_latest_value_only() {
    let roster: Roster = Roster::new();
    let first: TransitionResult = apply(
        &roster,
        Command::SetAssignment {
            employee_id: employee("E1"),
            date: date("2024-06-10"),
            shift_type: String::from("annual"),
        },
        created_at(),
    )
    .unwrap();

    let second: TransitionResult = apply(
        &first.new_roster,
        Command::SetAssignment {
            employee_id: employee("E1"),
            date: date("2024-06-10"),
            shift_type: String::from("overtime"),
        },
        later(),
    )
    .unwrap();

    let rows: Vec<&ShiftAssignment> = second
        .new_roster
        .assignments_for(&employee("E1"))
        .collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].shift_type, "overtime");
}

#[test]
fn test_set_assignment_rejects_empty_shift_type() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::SetAssignment {
        employee_id: employee("E1"),
        date: date("2024-06-12"),
        shift_type: String::from("  "),
    };

    let result: Result<TransitionResult, CoreError> = apply(&roster, command, later());

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::ValidationFailed {
            field: "shift_type",
            ..
        }))
    ));
}

#[test]
fn test_set_assignment_does_not_touch_other_rows() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::SetAssignment {
        employee_id: employee("E1"),
        date: date("2024-06-10"),
        shift_type: String::from("sick"),
    };

    let result: TransitionResult = apply(&roster, command, later()).unwrap();

    assert_eq!(
        result.new_roster.get(&slot("E1", "2024-06-11")),
        roster.get(&slot("E1", "2024-06-11"))
    );
    assert_eq!(
        result.new_roster.get(&slot("E2", "2024-06-10")),
        roster.get(&slot("E2", "2024-06-10"))
    );
}

#[test]
fn test_clear_assignment_removes_row() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::ClearAssignment {
        employee_id: employee("E1"),
        date: date("2024-06-10"),
    };

    let result: TransitionResult = apply(&roster, command, later()).unwrap();

    assert!(result.new_roster.get(&slot("E1", "2024-06-10")).is_none());
    assert_eq!(
        result.writes,
        vec![SlotWrite::Delete(slot("E1", "2024-06-10"))]
    );
    assert!(matches!(result.outcome, MutationOutcome::Cleared(_)));
}

#[test]
fn test_clear_assignment_twice_fails_with_not_found() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::ClearAssignment {
        employee_id: employee("E1"),
        date: date("2024-06-10"),
    };

    let first: TransitionResult = apply(&roster, command.clone(), later()).unwrap();
    let second: Result<TransitionResult, CoreError> =
        apply(&first.new_roster, command, later());

    assert!(matches!(
        second,
        Err(CoreError::DomainViolation(
            DomainError::AssignmentNotFound { .. }
        ))
    ));
}

#[test]
fn test_clear_assignment_on_unknown_employee_fails_with_not_found() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::ClearAssignment {
        employee_id: employee("E9"),
        date: date("2024-06-10"),
    };

    let result: Result<TransitionResult, CoreError> = apply(&roster, command, later());

    assert!(result.is_err());
}

#[test]
fn test_swap_exchanges_values_and_keeps_keys() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::MoveOrSwap {
        employee_id: employee("E1"),
        from_date: date("2024-06-10"),
        to_employee_id: employee("E2"),
        to_date: date("2024-06-10"),
    };

    let result: TransitionResult = apply(&roster, command, later()).unwrap();

    let source: &ShiftAssignment = result.new_roster.get(&slot("E1", "2024-06-10")).unwrap();
    let target: &ShiftAssignment = result.new_roster.get(&slot("E2", "2024-06-10")).unwrap();
    assert_eq!(source.shift_type, "sick");
    assert_eq!(target.shift_type, "annual");
    assert_eq!(source.updated_at, later());
    assert_eq!(target.updated_at, later());
    assert_eq!(source.created_at, created_at());

    // No row created or deleted.
    assert_eq!(result.new_roster.assignments_for(&employee("E1")).count(), 2);
    assert_eq!(result.new_roster.assignments_for(&employee("E2")).count(), 1);
    assert_eq!(result.writes.len(), 2);
    assert!(
        result
            .writes
            .iter()
            .all(|w| matches!(w, SlotWrite::Upsert(_)))
    );
    assert!(matches!(result.outcome, MutationOutcome::Swapped { .. }));
}

#[test]
fn test_swap_within_one_employee() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::MoveOrSwap {
        employee_id: employee("E1"),
        from_date: date("2024-06-10"),
        to_employee_id: employee("E1"),
        to_date: date("2024-06-11"),
    };

    let result: TransitionResult = apply(&roster, command, later()).unwrap();

    assert_eq!(
        result
            .new_roster
            .get(&slot("E1", "2024-06-10"))
            .unwrap()
            .shift_type,
        "overtime"
    );
    assert_eq!(
        result
            .new_roster
            .get(&slot("E1", "2024-06-11"))
            .unwrap()
            .shift_type,
        "annual"
    );
}

#[test]
fn test_move_to_empty_slot_relocates_row() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::MoveOrSwap {
        employee_id: employee("E1"),
        from_date: date("2024-06-10"),
        to_employee_id: employee("E2"),
        to_date: date("2024-06-14"),
    };

    let result: TransitionResult = apply(&roster, command, later()).unwrap();

    assert!(result.new_roster.get(&slot("E1", "2024-06-10")).is_none());
    let moved: &ShiftAssignment = result.new_roster.get(&slot("E2", "2024-06-14")).unwrap();
    assert_eq!(moved.shift_type, "annual");
    assert_eq!(moved.created_at, created_at());
    assert_eq!(
        result.writes,
        vec![SlotWrite::Relocate {
            from: slot("E1", "2024-06-10"),
            assignment: moved.clone(),
        }]
    );
    assert!(matches!(result.outcome, MutationOutcome::Moved { .. }));
}

#[test]
fn test_move_from_empty_slot_fails_with_not_found() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::MoveOrSwap {
        employee_id: employee("E2"),
        from_date: date("2024-06-11"),
        to_employee_id: employee("E1"),
        to_date: date("2024-06-10"),
    };

    let result: Result<TransitionResult, CoreError> = apply(&roster, command, later());

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::AssignmentNotFound {
            employee_id: String::from("E2"),
            date: date("2024-06-11"),
        }))
    );
}

#[test]
fn test_move_onto_same_slot_is_a_no_op() {
    let roster: Roster = create_test_roster();
    let command: Command = Command::MoveOrSwap {
        employee_id: employee("E1"),
        from_date: date("2024-06-10"),
        to_employee_id: employee("E1"),
        to_date: date("2024-06-10"),
    };

    let result: TransitionResult = apply(&roster, command, later()).unwrap();

    assert_eq!(result.new_roster, roster);
    assert!(result.writes.is_empty());
    assert_eq!(result.outcome, MutationOutcome::Unchanged);
}

#[test]
fn test_failed_command_produces_no_writes() {
    let roster: Roster = Roster::from_assignments(vec![create_test_assignment(
        "E1",
        "2024-06-10",
        "annual",
    )]);
    let command: Command = Command::MoveOrSwap {
        employee_id: employee("E1"),
        from_date: date("2024-06-09"),
        to_employee_id: employee("E1"),
        to_date: date("2024-06-10"),
    };

    assert!(apply(&roster, command, later()).is_err());
    assert_eq!(
        roster.get(&slot("E1", "2024-06-10")).unwrap().shift_type,
        "annual"
    );
}
