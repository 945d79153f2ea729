// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, parse_date};

#[test]
fn test_domain_error_display() {
    let date = parse_date("2024-06-10").unwrap();

    let err: DomainError = DomainError::AssignmentNotFound {
        employee_id: String::from("E100"),
        date,
    };
    assert_eq!(
        format!("{err}"),
        "No shift assignment for employee 'E100' on 2024-06-10"
    );

    let err: DomainError = DomainError::EmployeeNotFound(String::from("E100"));
    assert_eq!(format!("{err}"), "Employee 'E100' not found");

    let err: DomainError = DomainError::CalendarTagNotFound(date);
    assert_eq!(format!("{err}"), "No calendar tag for 2024-06-10");

    let err: DomainError = DomainError::HoursExceeded {
        employee_id: String::from("E100"),
        week_start: date,
        total_hours: 60,
        cap: 50,
    };
    assert_eq!(
        format!("{err}"),
        "Weekly working hours for employee 'E100' in the week of 2024-06-10 would be 60, \
         exceeding the cap of 50"
    );

    let err: DomainError = DomainError::ValidationFailed {
        field: "shift_type",
        message: String::from("Shift type is required"),
    };
    assert_eq!(format!("{err}"), "Invalid shift_type: Shift type is required");

    let err: DomainError = DomainError::DuplicateLeaveTypeName(String::from("sick"));
    assert_eq!(
        format!("{err}"),
        "Leave type name 'sick' appears more than once"
    );

    let err: DomainError = DomainError::InvalidDayNight(String::from("X"));
    assert_eq!(
        format!("{err}"),
        "Invalid day/night cohort 'X'. Must be D or N"
    );
}
