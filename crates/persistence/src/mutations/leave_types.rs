// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard_domain::{DEFAULT_LEAVE_COLOR, LeaveType};
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::LeaveTypeUpdate;
use crate::diesel_schema::leave_types;
use crate::error::PersistenceError;
use crate::queries::leave_types::get_leave_type;

/// Appends a leave type to the catalog.
///
/// A missing color defaults to `DEFAULT_LEAVE_COLOR`.
///
/// # Errors
///
/// Returns `UniqueViolation` if the name is taken.
pub fn create_leave_type(
    conn: &mut SqliteConnection,
    leave_type: &LeaveType,
) -> Result<LeaveType, PersistenceError> {
    let color: &str = leave_type.color.as_deref().unwrap_or(DEFAULT_LEAVE_COLOR);

    diesel::insert_into(leave_types::table)
        .values((
            leave_types::name.eq(&leave_type.name),
            leave_types::is_not_workday.eq(i32::from(leave_type.is_not_workday)),
            leave_types::color.eq(color),
        ))
        .execute(conn)?;

    let leave_id: i64 = get_last_insert_rowid(conn)?;

    info!(leave_id, name = %leave_type.name, "Created leave type");

    Ok(LeaveType::with_id(
        leave_id,
        &leave_type.name,
        leave_type.is_not_workday,
        Some(color.to_string()),
    ))
}

/// Applies a partial update to a leave type.
///
/// Existing assignments keep the old name; they are not rewritten.
///
/// # Errors
///
/// Returns `NotFound` if the leave type does not exist, or
/// `UniqueViolation` if the new name is taken.
pub fn update_leave_type(
    conn: &mut SqliteConnection,
    leave_id: i64,
    update: &LeaveTypeUpdate,
) -> Result<LeaveType, PersistenceError> {
    conn.transaction(|conn| {
        if get_leave_type(conn, leave_id)?.is_none() {
            return Err(PersistenceError::NotFound(format!("Leave type {leave_id}")));
        }

        if let Some(name) = &update.name {
            diesel::update(leave_types::table.find(leave_id))
                .set(leave_types::name.eq(name))
                .execute(conn)?;
        }
        if let Some(flag) = update.is_not_workday {
            diesel::update(leave_types::table.find(leave_id))
                .set(leave_types::is_not_workday.eq(i32::from(flag)))
                .execute(conn)?;
        }
        if let Some(color) = &update.color {
            diesel::update(leave_types::table.find(leave_id))
                .set(leave_types::color.eq(color))
                .execute(conn)?;
        }

        info!(leave_id, "Updated leave type");

        get_leave_type(conn, leave_id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Leave type {leave_id}")))
    })
}

/// Removes a leave type from the catalog.
///
/// # Errors
///
/// Returns `NotFound` if the leave type does not exist.
pub fn delete_leave_type(
    conn: &mut SqliteConnection,
    leave_id: i64,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(leave_types::table.find(leave_id)).execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!("Leave type {leave_id}")));
    }

    info!(leave_id, "Deleted leave type");
    Ok(())
}
