// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{MutationOutcome, Roster, SlotWrite, TransitionResult};
use shiftboard_domain::{
    DomainError, EmployeeId, ShiftAssignment, SlotKey, validate_shift_type,
};
use time::{Date, OffsetDateTime};

/// Applies a command to a roster, producing a new roster and the writes
/// that realise it.
///
/// This function is pure: the input roster is not modified and every
/// write is computed before the result is returned, so a failing command
/// produces no writes at all.
///
/// # Arguments
///
/// * `roster` - The current roster (immutable). It must contain the
///   partitions of every employee in `command.employees()`.
/// * `command` - The command to apply
/// * `now` - The timestamp recorded on created or changed rows
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new roster, writes and outcome
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A set command carries an empty shift type
/// - A clear or move/swap addresses an empty source slot
pub fn apply(
    roster: &Roster,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SetAssignment {
            employee_id,
            date,
            shift_type,
        } => set_assignment(roster, employee_id, date, &shift_type, now),
        Command::ClearAssignment { employee_id, date } => {
            clear_assignment(roster, SlotKey::new(employee_id, date))
        }
        Command::MoveOrSwap {
            employee_id,
            from_date,
            to_employee_id,
            to_date,
        } => move_or_swap(
            roster,
            SlotKey::new(employee_id, from_date),
            SlotKey::new(to_employee_id, to_date),
            now,
        ),
    }
}

fn set_assignment(
    roster: &Roster,
    employee_id: EmployeeId,
    date: Date,
    shift_type: &str,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    validate_shift_type(shift_type)?;

    let key: SlotKey = SlotKey::new(employee_id.clone(), date);
    let (assignment, created) = roster.get(&key).map_or_else(
        || (ShiftAssignment::new(employee_id, date, shift_type, now), true),
        |existing| {
            let mut updated: ShiftAssignment = existing.clone();
            shift_type.clone_into(&mut updated.shift_type);
            updated.updated_at = now;
            (updated, false)
        },
    );

    let mut new_roster: Roster = roster.clone();
    new_roster.put(assignment.clone());

    let outcome: MutationOutcome = if created {
        MutationOutcome::Created(assignment.clone())
    } else {
        MutationOutcome::Updated(assignment.clone())
    };

    Ok(TransitionResult {
        new_roster,
        writes: vec![SlotWrite::Upsert(assignment)],
        outcome,
    })
}

fn clear_assignment(roster: &Roster, key: SlotKey) -> Result<TransitionResult, CoreError> {
    let mut new_roster: Roster = roster.clone();
    let removed: ShiftAssignment = new_roster
        .remove(&key)
        .ok_or_else(|| not_found(&key))?;

    Ok(TransitionResult {
        new_roster,
        writes: vec![SlotWrite::Delete(key)],
        outcome: MutationOutcome::Cleared(removed),
    })
}

fn move_or_swap(
    roster: &Roster,
    source_key: SlotKey,
    target_key: SlotKey,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let source: &ShiftAssignment = roster.get(&source_key).ok_or_else(|| not_found(&source_key))?;

    if source_key == target_key {
        return Ok(TransitionResult {
            new_roster: roster.clone(),
            writes: Vec::new(),
            outcome: MutationOutcome::Unchanged,
        });
    }

    let mut new_roster: Roster = roster.clone();

    if let Some(target) = roster.get(&target_key) {
        // Values are exchanged; both rows keep their keys.
        let mut new_target: ShiftAssignment = target.clone();
        new_target.shift_type.clone_from(&source.shift_type);
        new_target.updated_at = now;

        let mut new_source: ShiftAssignment = source.clone();
        new_source.shift_type.clone_from(&target.shift_type);
        new_source.updated_at = now;

        new_roster.put(new_target.clone());
        new_roster.put(new_source.clone());

        return Ok(TransitionResult {
            new_roster,
            writes: vec![
                SlotWrite::Upsert(new_target.clone()),
                SlotWrite::Upsert(new_source.clone()),
            ],
            outcome: MutationOutcome::Swapped {
                source: new_source,
                target: new_target,
            },
        });
    }

    let mut moved: ShiftAssignment = source.clone();
    moved.employee_id = target_key.employee_id;
    moved.date = target_key.date;
    moved.updated_at = now;

    new_roster.remove(&source_key);
    new_roster.put(moved.clone());

    Ok(TransitionResult {
        new_roster,
        writes: vec![SlotWrite::Relocate {
            from: source_key.clone(),
            assignment: moved.clone(),
        }],
        outcome: MutationOutcome::Moved {
            from: source_key,
            assignment: moved,
        },
    })
}

fn not_found(key: &SlotKey) -> CoreError {
    CoreError::DomainViolation(DomainError::AssignmentNotFound {
        employee_id: key.employee_id.to_string(),
        date: key.date,
    })
}
