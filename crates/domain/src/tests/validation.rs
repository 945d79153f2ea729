// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, Employee, EmployeeId, LeaveType, ShiftPattern, validate_color,
    validate_employee_fields, validate_employee_id_unique, validate_leave_type_fields,
    validate_leave_type_name_unique, validate_password, validate_shift_type,
};

fn create_test_employee(id: &str) -> Employee {
    Employee::new(
        EmployeeId::new(id).unwrap(),
        "Test Employee",
        Some(ShiftPattern::A),
    )
}

#[test]
fn test_validate_shift_type_rejects_blank() {
    assert!(validate_shift_type("annual").is_ok());
    assert!(matches!(
        validate_shift_type("  "),
        Err(DomainError::ValidationFailed {
            field: "shift_type",
            ..
        })
    ));
}

#[test]
fn test_validate_employee_fields_rejects_empty_name() {
    let mut employee: Employee = create_test_employee("E100");
    assert!(validate_employee_fields(&employee).is_ok());

    employee.name = String::new();
    assert!(matches!(
        validate_employee_fields(&employee),
        Err(DomainError::ValidationFailed { field: "name", .. })
    ));
}

#[test]
fn test_validate_password_rejects_empty() {
    assert!(validate_password("secret").is_ok());
    assert!(validate_password("").is_err());
}

#[test]
fn test_validate_employee_id_unique() {
    let existing: Vec<Employee> = vec![create_test_employee("E100")];

    assert!(validate_employee_id_unique(&EmployeeId::new("E200").unwrap(), &existing).is_ok());
    assert!(validate_employee_id_unique(&EmployeeId::new("E100").unwrap(), &existing).is_err());
}

#[test]
fn test_validate_color() {
    assert!(validate_color("#ff9800").is_ok());
    assert!(validate_color("#FFF").is_ok());
    assert!(validate_color("ff9800").is_err());
    assert!(validate_color("#ff98").is_err());
    assert!(validate_color("#gggggg").is_err());
}

#[test]
fn test_validate_leave_type_fields() {
    assert!(validate_leave_type_fields(&LeaveType::new("annual", false)).is_ok());
    assert!(validate_leave_type_fields(&LeaveType::new(" ", false)).is_err());

    let mut bad_color: LeaveType = LeaveType::new("annual", false);
    bad_color.color = Some(String::from("orange"));
    assert!(matches!(
        validate_leave_type_fields(&bad_color),
        Err(DomainError::ValidationFailed { field: "color", .. })
    ));
}

#[test]
fn test_validate_leave_type_name_unique_allows_renaming_self() {
    let existing: Vec<LeaveType> = vec![
        LeaveType::with_id(1, "annual", false, None),
        LeaveType::with_id(2, "overtime", true, None),
    ];

    assert!(validate_leave_type_name_unique("annual", Some(1), &existing).is_ok());
    assert!(validate_leave_type_name_unique("sick", None, &existing).is_ok());
    assert_eq!(
        validate_leave_type_name_unique("overtime", Some(1), &existing),
        Err(DomainError::DuplicateLeaveTypeName(String::from("overtime")))
    );
}
