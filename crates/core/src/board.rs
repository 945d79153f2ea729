// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process assignment store with one lock per employee partition.
//!
//! Commands touching different employees run concurrently. A command
//! touching two employees takes both partition locks in sorted employee
//! order, so two commands can never wait on each other in a cycle.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{AssignmentTable, Roster, TransitionResult};
use shiftboard_domain::EmployeeId;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use time::OffsetDateTime;

type Partition = Arc<Mutex<AssignmentTable>>;

/// A concurrently usable roster.
#[derive(Debug, Default)]
pub struct AssignmentBoard {
    partitions: RwLock<BTreeMap<EmployeeId, Partition>>,
}

impl AssignmentBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board holding the partitions of `roster`.
    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        let partitions: BTreeMap<EmployeeId, Partition> = roster
            .employees()
            .map(|id| {
                let table: AssignmentTable = roster.table(id).cloned().unwrap_or_default();
                (id.clone(), Arc::new(Mutex::new(table)))
            })
            .collect();
        Self {
            partitions: RwLock::new(partitions),
        }
    }

    /// Executes a command under the locks of every partition it touches.
    ///
    /// The partitions are updated only when the command succeeds.
    ///
    /// # Errors
    ///
    /// Returns the command's `CoreError`, or `CoreError::Internal` if a
    /// lock is poisoned.
    pub fn execute(
        &self,
        command: Command,
        now: OffsetDateTime,
    ) -> Result<TransitionResult, CoreError> {
        let employees: Vec<EmployeeId> = command.employees();
        let partitions: Vec<Partition> = employees
            .iter()
            .map(|id| self.partition(id))
            .collect::<Result<_, _>>()?;

        let mut guards: Vec<MutexGuard<'_, AssignmentTable>> =
            Vec::with_capacity(partitions.len());
        for partition in &partitions {
            guards.push(lock(partition)?);
        }

        let mut roster: Roster = Roster::new();
        for (id, guard) in employees.iter().zip(&guards) {
            roster.insert_table(id.clone(), (**guard).clone());
        }

        let result: TransitionResult = apply(&roster, command, now)?;

        for (id, guard) in employees.iter().zip(guards.iter_mut()) {
            **guard = result.new_roster.table(id).cloned().unwrap_or_default();
        }

        Ok(result)
    }

    /// Returns a copy of one employee's partition.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if a lock is poisoned.
    pub fn table(&self, employee_id: &EmployeeId) -> Result<AssignmentTable, CoreError> {
        let partitions = self
            .partitions
            .read()
            .map_err(|_| poisoned("partition index"))?;
        match partitions.get(employee_id) {
            Some(partition) => Ok(lock(partition)?.clone()),
            None => Ok(AssignmentTable::new()),
        }
    }

    /// Returns a copy of every partition.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if a lock is poisoned.
    pub fn roster(&self) -> Result<Roster, CoreError> {
        let partitions = self
            .partitions
            .read()
            .map_err(|_| poisoned("partition index"))?;
        let mut roster: Roster = Roster::new();
        for (id, partition) in partitions.iter() {
            roster.insert_table(id.clone(), lock(partition)?.clone());
        }
        Ok(roster)
    }

    fn partition(&self, employee_id: &EmployeeId) -> Result<Partition, CoreError> {
        {
            let partitions = self
                .partitions
                .read()
                .map_err(|_| poisoned("partition index"))?;
            if let Some(partition) = partitions.get(employee_id) {
                return Ok(Arc::clone(partition));
            }
        }

        let mut partitions = self
            .partitions
            .write()
            .map_err(|_| poisoned("partition index"))?;
        Ok(Arc::clone(partitions.entry(employee_id.clone()).or_default()))
    }
}

fn lock(partition: &Partition) -> Result<MutexGuard<'_, AssignmentTable>, CoreError> {
    partition.lock().map_err(|_| poisoned("assignment partition"))
}

fn poisoned(what: &str) -> CoreError {
    CoreError::Internal(format!("{what} lock poisoned"))
}
