// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Command;
use crate::tests::helpers::{date, employee};
use shiftboard_domain::EmployeeId;

#[test]
fn test_command_names() {
    let set: Command = Command::SetAssignment {
        employee_id: employee("E1"),
        date: date("2024-06-10"),
        shift_type: String::from("annual"),
    };
    let clear: Command = Command::ClearAssignment {
        employee_id: employee("E1"),
        date: date("2024-06-10"),
    };

    assert_eq!(set.name(), "SetAssignment");
    assert_eq!(clear.name(), "ClearAssignment");
}

#[test]
fn test_move_or_swap_touches_both_employees_in_sorted_order() {
    let command: Command = Command::MoveOrSwap {
        employee_id: employee("E9"),
        from_date: date("2024-06-10"),
        to_employee_id: employee("E1"),
        to_date: date("2024-06-11"),
    };

    let employees: Vec<EmployeeId> = command.employees();

    assert_eq!(employees, vec![employee("E1"), employee("E9")]);
    assert_eq!(command.name(), "MoveOrSwap");
}

#[test]
fn test_move_within_one_employee_touches_one_partition() {
    let command: Command = Command::MoveOrSwap {
        employee_id: employee("E1"),
        from_date: date("2024-06-10"),
        to_employee_id: employee("E1"),
        to_date: date("2024-06-12"),
    };

    assert_eq!(command.employees(), vec![employee("E1")]);
}
