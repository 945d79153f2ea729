// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Employee, EmployeeId, LeaveType};
use std::collections::HashSet;

/// Validates the value being written into an assignment slot.
///
/// # Errors
///
/// Returns `ValidationFailed` if the shift type is empty or whitespace.
pub fn validate_shift_type(shift_type: &str) -> Result<(), DomainError> {
    if shift_type.trim().is_empty() {
        return Err(DomainError::ValidationFailed {
            field: "shift_type",
            message: String::from("Shift type is required"),
        });
    }
    Ok(())
}

/// Validates that an employee's basic field constraints are met.
///
/// This function checks that required fields are not empty.
/// It does NOT check for uniqueness (that requires context).
///
/// # Errors
///
/// Returns `ValidationFailed` if the name is empty.
pub fn validate_employee_fields(employee: &Employee) -> Result<(), DomainError> {
    if employee.name.trim().is_empty() {
        return Err(DomainError::ValidationFailed {
            field: "name",
            message: String::from("Name cannot be empty"),
        });
    }
    Ok(())
}

/// Validates a password supplied when creating or updating an employee.
///
/// # Errors
///
/// Returns `ValidationFailed` if the password is empty.
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.is_empty() {
        return Err(DomainError::ValidationFailed {
            field: "password",
            message: String::from("Password is required"),
        });
    }
    Ok(())
}

/// Validates that an employee number is not already in the directory.
///
/// # Errors
///
/// Returns `ValidationFailed` if the identifier is already in use.
pub fn validate_employee_id_unique(
    new_id: &EmployeeId,
    existing: &[Employee],
) -> Result<(), DomainError> {
    let existing_ids: HashSet<&EmployeeId> = existing.iter().map(|e| &e.employee_id).collect();

    if existing_ids.contains(new_id) {
        return Err(DomainError::ValidationFailed {
            field: "employee_id",
            message: format!("Employee ID '{new_id}' already exists"),
        });
    }
    Ok(())
}

/// Validates a leave type's own fields.
///
/// # Errors
///
/// Returns `ValidationFailed` if the name is empty or the color is not a
/// `#rgb` / `#rrggbb` hex color.
pub fn validate_leave_type_fields(leave_type: &LeaveType) -> Result<(), DomainError> {
    if leave_type.name.trim().is_empty() {
        return Err(DomainError::ValidationFailed {
            field: "name",
            message: String::from("Leave type name is required"),
        });
    }
    if let Some(color) = &leave_type.color {
        validate_color(color)?;
    }
    Ok(())
}

/// Validates a display color.
///
/// # Errors
///
/// Returns `ValidationFailed` unless the value is `#` followed by three or
/// six hex digits.
pub fn validate_color(color: &str) -> Result<(), DomainError> {
    let digits: Option<&str> = color.strip_prefix('#');
    let valid: bool = digits.is_some_and(|d| {
        (d.len() == 3 || d.len() == 6) && d.chars().all(|c| c.is_ascii_hexdigit())
    });

    if !valid {
        return Err(DomainError::ValidationFailed {
            field: "color",
            message: format!("'{color}' is not a hex color"),
        });
    }
    Ok(())
}

/// Validates that a leave type name is not taken by another entry.
///
/// `exclude_id` skips the entry being renamed.
///
/// # Errors
///
/// Returns `DuplicateLeaveTypeName` if another entry has the name.
pub fn validate_leave_type_name_unique(
    name: &str,
    exclude_id: Option<i64>,
    existing: &[LeaveType],
) -> Result<(), DomainError> {
    let taken: bool = existing
        .iter()
        .filter(|lt| exclude_id.is_none() || lt.leave_id != exclude_id)
        .any(|lt| lt.name == name);

    if taken {
        return Err(DomainError::DuplicateLeaveTypeName(name.to_string()));
    }
    Ok(())
}
