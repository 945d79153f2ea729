// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftboard_domain::EmployeeId;
use time::Date;

/// A command represents user intent against the assignment store as data only.
///
/// Commands are the only way to request assignment changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write a shift type into a slot, overwriting any existing value.
    SetAssignment {
        /// The employee owning the slot.
        employee_id: EmployeeId,
        /// The slot date.
        date: Date,
        /// A leave type name or raw shift code.
        shift_type: String,
    },
    /// Remove the assignment in a slot.
    ClearAssignment {
        /// The employee owning the slot.
        employee_id: EmployeeId,
        /// The slot date.
        date: Date,
    },
    /// Move an assignment to an empty slot, or exchange values with an
    /// occupied one.
    MoveOrSwap {
        /// The employee owning the source slot.
        employee_id: EmployeeId,
        /// The source slot date.
        from_date: Date,
        /// The employee owning the target slot.
        to_employee_id: EmployeeId,
        /// The target slot date.
        to_date: Date,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetAssignment { .. } => "SetAssignment",
            Self::ClearAssignment { .. } => "ClearAssignment",
            Self::MoveOrSwap { .. } => "MoveOrSwap",
        }
    }

    /// Returns the employees whose partitions the command touches,
    /// sorted and without duplicates.
    ///
    /// Partition locks must be taken in this order.
    #[must_use]
    pub fn employees(&self) -> Vec<EmployeeId> {
        let mut ids: Vec<EmployeeId> = match self {
            Self::SetAssignment { employee_id, .. } | Self::ClearAssignment { employee_id, .. } => {
                vec![employee_id.clone()]
            }
            Self::MoveOrSwap {
                employee_id,
                to_employee_id,
                ..
            } => vec![employee_id.clone(), to_employee_id.clone()],
        };
        ids.sort();
        ids.dedup();
        ids
    }
}
