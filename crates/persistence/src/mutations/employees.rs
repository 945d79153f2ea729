// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard_domain::{Employee, EmployeeId};
use time::OffsetDateTime;
use tracing::info;

use crate::data_models::{EmployeeUpdate, NewEmployee, format_timestamp};
use crate::diesel_schema::employees;
use crate::error::PersistenceError;
use crate::queries::employees::get_employee;

fn hash_password(password: &str) -> Result<String, PersistenceError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))
}

/// Creates an employee.
///
/// # Errors
///
/// Returns `UniqueViolation` if the employee number is taken, or an error
/// if hashing or the insert fails.
pub fn create_employee(
    conn: &mut SqliteConnection,
    employee: &NewEmployee,
    now: OffsetDateTime,
) -> Result<Employee, PersistenceError> {
    info!(
        employee_id = %employee.employee_id,
        role = %employee.role,
        "Creating employee"
    );

    let password_hash: String = hash_password(&employee.password)?;

    diesel::insert_into(employees::table)
        .values((
            employees::employee_id.eq(employee.employee_id.value()),
            employees::name.eq(&employee.name),
            employees::password_hash.eq(&password_hash),
            employees::shift_pattern.eq(employee.shift_pattern.map(|p| p.as_str())),
            employees::site.eq(employee.site.as_deref()),
            employees::day_night.eq(employee.day_night.map(|d| d.as_str())),
            employees::role.eq(employee.role.as_str()),
            employees::created_at.eq(format_timestamp(now)?),
        ))
        .execute(conn)?;

    get_employee(conn, &employee.employee_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Employee {}", employee.employee_id)))
}

/// Applies a partial update to an employee.
///
/// # Errors
///
/// Returns `NotFound` if the employee does not exist.
pub fn update_employee(
    conn: &mut SqliteConnection,
    employee_id: &EmployeeId,
    update: &EmployeeUpdate,
) -> Result<Employee, PersistenceError> {
    conn.transaction(|conn| {
        if get_employee(conn, employee_id)?.is_none() {
            return Err(PersistenceError::NotFound(format!("Employee {employee_id}")));
        }

        if let Some(name) = &update.name {
            diesel::update(employees::table.find(employee_id.value()))
                .set(employees::name.eq(name))
                .execute(conn)?;
        }
        if let Some(password) = &update.password {
            let password_hash: String = hash_password(password)?;
            diesel::update(employees::table.find(employee_id.value()))
                .set(employees::password_hash.eq(password_hash))
                .execute(conn)?;
        }
        if let Some(pattern) = update.shift_pattern {
            diesel::update(employees::table.find(employee_id.value()))
                .set(employees::shift_pattern.eq(pattern.map(|p| p.as_str())))
                .execute(conn)?;
        }
        if let Some(site) = &update.site {
            diesel::update(employees::table.find(employee_id.value()))
                .set(employees::site.eq(site.as_deref()))
                .execute(conn)?;
        }
        if let Some(day_night) = update.day_night {
            diesel::update(employees::table.find(employee_id.value()))
                .set(employees::day_night.eq(day_night.map(|d| d.as_str())))
                .execute(conn)?;
        }
        if let Some(role) = update.role {
            diesel::update(employees::table.find(employee_id.value()))
                .set(employees::role.eq(role.as_str()))
                .execute(conn)?;
        }

        info!(employee_id = %employee_id, "Updated employee");

        get_employee(conn, employee_id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Employee {employee_id}")))
    })
}

/// Deletes an employee. Their assignments are removed by the cascade.
///
/// # Errors
///
/// Returns `NotFound` if the employee does not exist.
pub fn delete_employee(
    conn: &mut SqliteConnection,
    employee_id: &EmployeeId,
) -> Result<(), PersistenceError> {
    let rows_affected: usize =
        diesel::delete(employees::table.find(employee_id.value())).execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!("Employee {employee_id}")));
    }

    info!(employee_id = %employee_id, "Deleted employee");
    Ok(())
}
