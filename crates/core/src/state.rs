// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftboard_domain::{EmployeeId, ShiftAssignment, SlotKey};
use std::collections::BTreeMap;
use time::Date;

/// One employee's assignments, keyed by date.
///
/// Invariant: at most one assignment per date, and every assignment
/// belongs to the same employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentTable {
    assignments: BTreeMap<Date, ShiftAssignment>,
}

impl AssignmentTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assignments: BTreeMap::new(),
        }
    }

    /// Returns the assignment on `date`, if any.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<&ShiftAssignment> {
        self.assignments.get(&date)
    }

    /// Inserts or replaces the assignment for its date.
    pub fn put(&mut self, assignment: ShiftAssignment) {
        self.assignments.insert(assignment.date, assignment);
    }

    /// Removes and returns the assignment on `date`.
    pub fn remove(&mut self, date: Date) -> Option<ShiftAssignment> {
        self.assignments.remove(&date)
    }

    /// Iterates assignments in date order.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftAssignment> {
        self.assignments.values()
    }

    /// Returns the number of assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl FromIterator<ShiftAssignment> for AssignmentTable {
    fn from_iter<I: IntoIterator<Item = ShiftAssignment>>(iter: I) -> Self {
        let mut table: Self = Self::new();
        for assignment in iter {
            table.put(assignment);
        }
        table
    }
}

/// The assignment store partitioned by employee.
///
/// Each employee's assignments live in an independent table. A roster may
/// hold only the partitions a command touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    tables: BTreeMap<EmployeeId, AssignmentTable>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Builds a roster from a flat list of assignments.
    #[must_use]
    pub fn from_assignments<I: IntoIterator<Item = ShiftAssignment>>(assignments: I) -> Self {
        let mut roster: Self = Self::new();
        for assignment in assignments {
            roster.put(assignment);
        }
        roster
    }

    /// Returns the partition of an employee, if present.
    #[must_use]
    pub fn table(&self, employee_id: &EmployeeId) -> Option<&AssignmentTable> {
        self.tables.get(employee_id)
    }

    /// Replaces the partition of an employee.
    pub fn insert_table(&mut self, employee_id: EmployeeId, table: AssignmentTable) {
        self.tables.insert(employee_id, table);
    }

    /// Returns the assignment in a slot, if any.
    #[must_use]
    pub fn get(&self, key: &SlotKey) -> Option<&ShiftAssignment> {
        self.tables
            .get(&key.employee_id)
            .and_then(|table| table.get(key.date))
    }

    /// Inserts or replaces an assignment in its owner's partition.
    pub fn put(&mut self, assignment: ShiftAssignment) {
        self.tables
            .entry(assignment.employee_id.clone())
            .or_default()
            .put(assignment);
    }

    /// Removes and returns the assignment in a slot.
    pub fn remove(&mut self, key: &SlotKey) -> Option<ShiftAssignment> {
        self.tables
            .get_mut(&key.employee_id)
            .and_then(|table| table.remove(key.date))
    }

    /// Iterates one employee's assignments in date order.
    pub fn assignments_for<'a>(
        &'a self,
        employee_id: &EmployeeId,
    ) -> impl Iterator<Item = &'a ShiftAssignment> + use<'a> {
        self.tables
            .get(employee_id)
            .into_iter()
            .flat_map(AssignmentTable::iter)
    }

    /// Iterates the employees that have a partition.
    pub fn employees(&self) -> impl Iterator<Item = &EmployeeId> {
        self.tables.keys()
    }
}

/// A single write the store must perform to realise a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotWrite {
    /// Insert the assignment, or overwrite the row at its key.
    Upsert(ShiftAssignment),
    /// Delete the row at the key.
    Delete(SlotKey),
    /// Re-key the row at `from` to the assignment's key.
    Relocate {
        /// The key the row currently has.
        from: SlotKey,
        /// The row as it must read after re-keying.
        assignment: ShiftAssignment,
    },
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// An empty slot was filled.
    Created(ShiftAssignment),
    /// An occupied slot was overwritten.
    Updated(ShiftAssignment),
    /// An occupied slot was emptied.
    Cleared(ShiftAssignment),
    /// An assignment was moved to an empty slot.
    Moved {
        /// The slot that is now empty.
        from: SlotKey,
        /// The assignment at its new slot.
        assignment: ShiftAssignment,
    },
    /// Two occupied slots exchanged values.
    Swapped {
        /// The source slot after the exchange.
        source: ShiftAssignment,
        /// The target slot after the exchange.
        target: ShiftAssignment,
    },
    /// Source and target were the same slot.
    Unchanged,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: `writes` lists every store write the transition
/// needs, computed before any of them is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The roster after the transition.
    pub new_roster: Roster,
    /// The writes that bring a store from the old roster to `new_roster`.
    pub writes: Vec<SlotWrite>,
    /// What happened.
    pub outcome: MutationOutcome,
}
