// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard::{Command, Roster, SlotWrite, TransitionResult, apply};
use shiftboard_domain::EmployeeId;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::data_models::{ShiftAssignmentRow, format_timestamp};
use crate::diesel_schema::{employees, shift_assignments};
use crate::error::PersistenceError;
use crate::queries::assignments::load_roster;

/// Applies an assignment command in a single transaction.
///
/// The partitions the command touches are loaded, `guard` inspects the
/// proposed transition, and then every slot write is performed. If any
/// step fails the transaction rolls back and no write is visible.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `command` - The command to apply
/// * `now` - The timestamp recorded on changed rows
/// * `guard` - Called with the connection, the current roster and the
///   transition before anything is written; an error aborts the command
///
/// # Errors
///
/// Returns `NotFound` if an involved employee does not exist, `Rejected`
/// if the command or the guard is refused, or a database error.
pub fn apply_command<G>(
    conn: &mut SqliteConnection,
    command: Command,
    now: OffsetDateTime,
    guard: G,
) -> Result<TransitionResult, PersistenceError>
where
    G: FnOnce(&mut SqliteConnection, &Roster, &TransitionResult) -> Result<(), PersistenceError>,
{
    let command_name: &'static str = command.name();

    let result: TransitionResult = conn.transaction(|conn| {
        let involved: Vec<EmployeeId> = command.employees();
        for employee_id in &involved {
            ensure_employee_exists(conn, employee_id)?;
        }

        let roster: Roster = load_roster(conn, &involved)?;
        let result: TransitionResult = apply(&roster, command, now)?;

        guard(conn, &roster, &result)?;

        for write in &result.writes {
            perform_write(conn, write)?;
        }

        Ok::<_, PersistenceError>(result)
    })?;

    info!(
        command = command_name,
        writes = result.writes.len(),
        "Applied assignment command"
    );

    Ok(result)
}

fn ensure_employee_exists(
    conn: &mut SqliteConnection,
    employee_id: &EmployeeId,
) -> Result<(), PersistenceError> {
    let count: i64 = employees::table
        .filter(employees::employee_id.eq(employee_id.value()))
        .count()
        .get_result(conn)?;

    if count == 0 {
        return Err(PersistenceError::NotFound(format!("Employee {employee_id}")));
    }
    Ok(())
}

fn perform_write(conn: &mut SqliteConnection, write: &SlotWrite) -> Result<(), PersistenceError> {
    match write {
        SlotWrite::Upsert(assignment) => {
            let row: ShiftAssignmentRow = ShiftAssignmentRow::from_domain(assignment)?;
            diesel::insert_into(shift_assignments::table)
                .values(&row)
                .on_conflict((shift_assignments::employee_id, shift_assignments::date))
                .do_update()
                .set((
                    shift_assignments::shift_type.eq(&row.shift_type),
                    shift_assignments::updated_at.eq(&row.updated_at),
                ))
                .execute(conn)?;
            debug!(
                employee_id = %assignment.employee_id,
                date = %assignment.date,
                shift_type = %assignment.shift_type,
                "Upserted assignment"
            );
        }
        SlotWrite::Delete(key) => {
            let rows_affected: usize = diesel::delete(
                shift_assignments::table
                    .filter(shift_assignments::employee_id.eq(key.employee_id.value()))
                    .filter(shift_assignments::date.eq(key.date.to_string())),
            )
            .execute(conn)?;
            if rows_affected == 0 {
                return Err(PersistenceError::NotFound(format!(
                    "Assignment {} on {}",
                    key.employee_id, key.date
                )));
            }
            debug!(employee_id = %key.employee_id, date = %key.date, "Deleted assignment");
        }
        SlotWrite::Relocate { from, assignment } => {
            let rows_affected: usize = diesel::update(
                shift_assignments::table
                    .filter(shift_assignments::employee_id.eq(from.employee_id.value()))
                    .filter(shift_assignments::date.eq(from.date.to_string())),
            )
            .set((
                shift_assignments::employee_id.eq(assignment.employee_id.value()),
                shift_assignments::date.eq(assignment.date.to_string()),
                shift_assignments::updated_at.eq(format_timestamp(assignment.updated_at)?),
            ))
            .execute(conn)?;
            if rows_affected == 0 {
                return Err(PersistenceError::NotFound(format!(
                    "Assignment {} on {}",
                    from.employee_id, from.date
                )));
            }
            debug!(
                from_employee_id = %from.employee_id,
                from_date = %from.date,
                to_employee_id = %assignment.employee_id,
                to_date = %assignment.date,
                "Relocated assignment"
            );
        }
    }
    Ok(())
}
