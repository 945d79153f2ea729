// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard_domain::{LeaveType, LeaveTypeCatalog};

use crate::data_models::LeaveTypeRow;
use crate::diesel_schema::leave_types;
use crate::error::PersistenceError;

/// Lists leave types in catalog (insertion) order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_leave_types(conn: &mut SqliteConnection) -> Result<Vec<LeaveType>, PersistenceError> {
    let rows: Vec<LeaveTypeRow> = leave_types::table
        .order(leave_types::leave_id.asc())
        .select(LeaveTypeRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(LeaveType::from).collect())
}

/// Loads the catalog used by the scheduling rules.
///
/// # Errors
///
/// Returns an error if the query fails, or a reconstruction error if the
/// stored names are not unique.
pub fn load_catalog(conn: &mut SqliteConnection) -> Result<LeaveTypeCatalog, PersistenceError> {
    let entries: Vec<LeaveType> = list_leave_types(conn)?;
    LeaveTypeCatalog::new(entries)
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

/// Retrieves one leave type.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the leave type is not found.
pub fn get_leave_type(
    conn: &mut SqliteConnection,
    leave_id: i64,
) -> Result<Option<LeaveType>, PersistenceError> {
    Ok(leave_types::table
        .find(leave_id)
        .select(LeaveTypeRow::as_select())
        .first(conn)
        .optional()?
        .map(LeaveType::from))
}
