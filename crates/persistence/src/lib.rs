// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Shiftboard.
//!
//! This crate stores the employee directory, calendar tags, the leave type
//! catalog and shift assignments in `SQLite` via Diesel.
//!
//! ## Storage Model
//!
//! - One row per employee, keyed by employee number
//! - One row per tagged calendar date
//! - One row per catalog entry; catalog order is `leave_id` order
//! - One row per filled assignment slot, keyed by `(employee_id, date)`
//!
//! Each employee's assignments form a logical partition of the
//! `shift_assignments` table. Deleting an employee cascades to that
//! partition, so foreign key enforcement is verified at startup.
//!
//! ## Atomicity
//!
//! Assignment commands are evaluated by the `shiftboard` core against the
//! partitions they touch and the resulting writes are applied inside one
//! transaction. A swap is therefore never half-visible.
//!
//! ## Testing
//!
//! Tests use `Persistence::new_in_memory()`, which gives every caller an
//! isolated shared-cache in-memory database.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use shiftboard::{Command, Roster, TransitionResult};
use shiftboard_domain::{
    CalendarTag, CalendarTagUpdate, CalendarTags, Employee, EmployeeId, LeaveType,
    LeaveTypeCatalog, RotationDay, ShiftAssignment,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Date, OffsetDateTime};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{EmployeeUpdate, LeaveTypeUpdate, NewEmployee};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Employees
    // ========================================================================

    /// Lists every employee ordered by employee number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is corrupt.
    pub fn list_employees(&mut self) -> Result<Vec<Employee>, PersistenceError> {
        queries::employees::list_employees(&mut self.conn)
    }

    /// Retrieves one employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is corrupt.
    pub fn get_employee(
        &mut self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::get_employee(&mut self.conn, employee_id)
    }

    /// Checks an employee's password.
    ///
    /// Returns the employee when the password matches and `None` otherwise,
    /// including for unknown employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or hash comparison fails.
    pub fn verify_credentials(
        &mut self,
        employee_id: &EmployeeId,
        password: &str,
    ) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::verify_credentials(&mut self.conn, employee_id, password)
    }

    /// Creates an employee.
    ///
    /// # Errors
    ///
    /// Returns `UniqueViolation` if the employee number is taken.
    pub fn create_employee(&mut self, employee: &NewEmployee) -> Result<Employee, PersistenceError> {
        mutations::employees::create_employee(&mut self.conn, employee, OffsetDateTime::now_utc())
    }

    /// Applies a partial update to an employee.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the employee does not exist.
    pub fn update_employee(
        &mut self,
        employee_id: &EmployeeId,
        update: &EmployeeUpdate,
    ) -> Result<Employee, PersistenceError> {
        mutations::employees::update_employee(&mut self.conn, employee_id, update)
    }

    /// Deletes an employee and their assignments.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the employee does not exist.
    pub fn delete_employee(&mut self, employee_id: &EmployeeId) -> Result<(), PersistenceError> {
        mutations::employees::delete_employee(&mut self.conn, employee_id)
    }

    // ========================================================================
    // Calendar
    // ========================================================================

    /// Loads every calendar tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is corrupt.
    pub fn load_calendar_tags(&mut self) -> Result<CalendarTags, PersistenceError> {
        queries::calendar::load_calendar_tags(&mut self.conn)
    }

    /// Retrieves the tag of one date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is corrupt.
    pub fn get_calendar_tag(&mut self, date: Date) -> Result<Option<CalendarTag>, PersistenceError> {
        queries::calendar::get_calendar_tag(&mut self.conn, date)
    }

    /// Partially updates the tag of one date, creating it if needed.
    ///
    /// Returns the stored tag and whether it was created.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` if the date is tagged and the update is empty.
    pub fn set_calendar_tag(
        &mut self,
        date: Date,
        update: &CalendarTagUpdate,
    ) -> Result<(CalendarTag, bool), PersistenceError> {
        mutations::calendar::set_calendar_tag(&mut self.conn, date, update, OffsetDateTime::now_utc())
    }

    /// Replaces the tags of every listed date atomically.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` for an empty list, or a database error.
    pub fn batch_set_calendar_tags(
        &mut self,
        tags: &[CalendarTag],
    ) -> Result<usize, PersistenceError> {
        mutations::calendar::batch_set_calendar_tags(&mut self.conn, tags, OffsetDateTime::now_utc())
    }

    /// Writes a generated rotation, keeping holiday flags.
    ///
    /// # Errors
    ///
    /// Returns an error if a write fails; nothing is written in that case.
    pub fn apply_rotation(&mut self, days: &[RotationDay]) -> Result<usize, PersistenceError> {
        mutations::calendar::apply_rotation(&mut self.conn, days, OffsetDateTime::now_utc())
    }

    /// Deletes the tag of one date.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the date is not tagged.
    pub fn delete_calendar_tag(&mut self, date: Date) -> Result<(), PersistenceError> {
        mutations::calendar::delete_calendar_tag(&mut self.conn, date)
    }

    // ========================================================================
    // Leave Types
    // ========================================================================

    /// Lists the catalog in `leave_id` order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_leave_types(&mut self) -> Result<Vec<LeaveType>, PersistenceError> {
        queries::leave_types::list_leave_types(&mut self.conn)
    }

    /// Loads the catalog indexed by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or stored names collide.
    pub fn load_catalog(&mut self) -> Result<LeaveTypeCatalog, PersistenceError> {
        queries::leave_types::load_catalog(&mut self.conn)
    }

    /// Retrieves one leave type.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_leave_type(&mut self, leave_id: i64) -> Result<Option<LeaveType>, PersistenceError> {
        queries::leave_types::get_leave_type(&mut self.conn, leave_id)
    }

    /// Appends a leave type to the catalog.
    ///
    /// # Errors
    ///
    /// Returns `UniqueViolation` if the name is taken.
    pub fn create_leave_type(&mut self, leave_type: &LeaveType) -> Result<LeaveType, PersistenceError> {
        mutations::leave_types::create_leave_type(&mut self.conn, leave_type)
    }

    /// Applies a partial update to a leave type.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the leave type does not exist, or
    /// `UniqueViolation` if the new name is taken.
    pub fn update_leave_type(
        &mut self,
        leave_id: i64,
        update: &LeaveTypeUpdate,
    ) -> Result<LeaveType, PersistenceError> {
        mutations::leave_types::update_leave_type(&mut self.conn, leave_id, update)
    }

    /// Deletes a leave type.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the leave type does not exist.
    pub fn delete_leave_type(&mut self, leave_id: i64) -> Result<(), PersistenceError> {
        mutations::leave_types::delete_leave_type(&mut self.conn, leave_id)
    }

    // ========================================================================
    // Assignments
    // ========================================================================

    /// Lists one employee's assignments ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is corrupt.
    pub fn list_assignments(
        &mut self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<ShiftAssignment>, PersistenceError> {
        queries::assignments::list_assignments(&mut self.conn, employee_id)
    }

    /// Lists every assignment on one date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is corrupt.
    pub fn list_assignments_on(
        &mut self,
        date: Date,
    ) -> Result<Vec<ShiftAssignment>, PersistenceError> {
        queries::assignments::list_assignments_on(&mut self.conn, date)
    }

    /// Loads the partitions of the listed employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is corrupt.
    pub fn load_roster(&mut self, employees: &[EmployeeId]) -> Result<Roster, PersistenceError> {
        queries::assignments::load_roster(&mut self.conn, employees)
    }

    /// Applies an assignment command atomically.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown employees, `Rejected` if the command
    /// is refused, or a database error. Nothing is written on error.
    pub fn apply_command(&mut self, command: Command) -> Result<TransitionResult, PersistenceError> {
        self.apply_command_guarded(command, |_, _, _| Ok(()))
    }

    /// Applies an assignment command atomically after `guard` accepts it.
    ///
    /// `guard` runs inside the transaction with the connection, the roster
    /// of the involved employees and the proposed transition.
    ///
    /// # Errors
    ///
    /// As `apply_command`, plus any error returned by `guard`.
    pub fn apply_command_guarded<G>(
        &mut self,
        command: Command,
        guard: G,
    ) -> Result<TransitionResult, PersistenceError>
    where
        G: FnOnce(
            &mut TransactionReader<'_>,
            &Roster,
            &TransitionResult,
        ) -> Result<(), PersistenceError>,
    {
        mutations::assignments::apply_command(
            &mut self.conn,
            command,
            OffsetDateTime::now_utc(),
            |conn, roster, result| guard(&mut TransactionReader { conn }, roster, result),
        )
    }
}

/// Read access to the database from inside an assignment transaction.
pub struct TransactionReader<'c> {
    conn: &'c mut SqliteConnection,
}

impl TransactionReader<'_> {
    /// Retrieves one employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is corrupt.
    pub fn get_employee(
        &mut self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::get_employee(self.conn, employee_id)
    }

    /// Loads every calendar tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is corrupt.
    pub fn load_calendar_tags(&mut self) -> Result<CalendarTags, PersistenceError> {
        queries::calendar::load_calendar_tags(self.conn)
    }

    /// Loads the catalog indexed by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or stored names collide.
    pub fn load_catalog(&mut self) -> Result<LeaveTypeCatalog, PersistenceError> {
        queries::leave_types::load_catalog(self.conn)
    }
}
