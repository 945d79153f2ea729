// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard::{AssignmentTable, Roster};
use shiftboard_domain::{EmployeeId, ShiftAssignment};
use time::Date;

use crate::data_models::ShiftAssignmentRow;
use crate::diesel_schema::shift_assignments;
use crate::error::PersistenceError;

/// Lists one employee's assignments in date order.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_assignments(
    conn: &mut SqliteConnection,
    employee_id: &EmployeeId,
) -> Result<Vec<ShiftAssignment>, PersistenceError> {
    let rows: Vec<ShiftAssignmentRow> = shift_assignments::table
        .filter(shift_assignments::employee_id.eq(employee_id.value()))
        .order(shift_assignments::date.asc())
        .select(ShiftAssignmentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ShiftAssignment::try_from).collect()
}

/// Lists every employee's assignment on one date.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_assignments_on(
    conn: &mut SqliteConnection,
    date: Date,
) -> Result<Vec<ShiftAssignment>, PersistenceError> {
    let rows: Vec<ShiftAssignmentRow> = shift_assignments::table
        .filter(shift_assignments::date.eq(date.to_string()))
        .order(shift_assignments::employee_id.asc())
        .select(ShiftAssignmentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ShiftAssignment::try_from).collect()
}

/// Loads the partitions of the given employees into a roster.
///
/// Every listed employee gets a partition, empty if they have no rows.
///
/// # Errors
///
/// Returns an error if a query fails or a row is corrupt.
pub fn load_roster(
    conn: &mut SqliteConnection,
    employees: &[EmployeeId],
) -> Result<Roster, PersistenceError> {
    let mut roster: Roster = Roster::new();
    for employee_id in employees {
        let table: AssignmentTable = list_assignments(conn, employee_id)?.into_iter().collect();
        roster.insert_table(employee_id.clone(), table);
    }
    Ok(roster)
}
