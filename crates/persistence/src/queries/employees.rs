// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard_domain::{Employee, EmployeeId};
use tracing::debug;

use crate::data_models::EmployeeRow;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Lists every employee ordered by employee number.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_employees(conn: &mut SqliteConnection) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .order(employees::employee_id.asc())
        .select(EmployeeRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Employee::try_from).collect()
}

/// Retrieves an employee.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn get_employee(
    conn: &mut SqliteConnection,
    employee_id: &EmployeeId,
) -> Result<Option<Employee>, PersistenceError> {
    debug!(employee_id = %employee_id, "Looking up employee");

    employees::table
        .find(employee_id.value())
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?
        .map(Employee::try_from)
        .transpose()
}

/// Checks a password against the stored bcrypt hash.
///
/// # Returns
///
/// The employee when the identifier exists and the password matches,
/// `None` otherwise.
///
/// # Errors
///
/// Returns an error if the query fails or the stored hash is malformed.
pub fn verify_credentials(
    conn: &mut SqliteConnection,
    employee_id: &EmployeeId,
    password: &str,
) -> Result<Option<Employee>, PersistenceError> {
    let row: Option<EmployeeRow> = employees::table
        .find(employee_id.value())
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    let Some(row) = row else {
        debug!(employee_id = %employee_id, "Login for unknown employee");
        return Ok(None);
    };

    let matches: bool = bcrypt::verify(password, &row.password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))?;

    if !matches {
        debug!(employee_id = %employee_id, "Password mismatch");
        return Ok(None);
    }

    Employee::try_from(row).map(Some)
}
