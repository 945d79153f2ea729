// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No assignment exists for the `(employee_id, date)` slot.
    AssignmentNotFound {
        /// The employee whose slot was addressed.
        employee_id: String,
        /// The date of the slot.
        date: Date,
    },
    /// The employee does not exist in the directory.
    EmployeeNotFound(String),
    /// The leave type does not exist in the catalog.
    LeaveTypeNotFound(String),
    /// No calendar tag exists for the date.
    CalendarTagNotFound(Date),
    /// The weekly working-hours cap would be exceeded.
    HoursExceeded {
        /// The employee the week was computed for.
        employee_id: String,
        /// The Monday the week starts on.
        week_start: Date,
        /// The computed total for the week.
        total_hours: u32,
        /// The cap that was exceeded.
        cap: u32,
    },
    /// Input was malformed or a required field was missing.
    ValidationFailed {
        /// The offending field.
        field: &'static str,
        /// A human-readable description of the problem.
        message: String,
    },
    /// Two catalog entries share a name.
    DuplicateLeaveTypeName(String),
    /// A shift pattern code was not recognised.
    InvalidShiftPattern(String),
    /// A day/night cohort code was not recognised.
    InvalidDayNight(String),
    /// A role was not recognised.
    InvalidRole(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A date range ends before it starts.
    InvalidDateRange {
        /// The first day of the range.
        start: Date,
        /// The last day of the range.
        end: Date,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssignmentNotFound { employee_id, date } => {
                write!(
                    f,
                    "No shift assignment for employee '{employee_id}' on {date}"
                )
            }
            Self::EmployeeNotFound(id) => write!(f, "Employee '{id}' not found"),
            Self::LeaveTypeNotFound(what) => write!(f, "Leave type {what} not found"),
            Self::CalendarTagNotFound(date) => write!(f, "No calendar tag for {date}"),
            Self::HoursExceeded {
                employee_id,
                week_start,
                total_hours,
                cap,
            } => {
                write!(
                    f,
                    "Weekly working hours for employee '{employee_id}' in the week of {week_start} \
                     would be {total_hours}, exceeding the cap of {cap}"
                )
            }
            Self::ValidationFailed { field, message } => {
                write!(f, "Invalid {field}: {message}")
            }
            Self::DuplicateLeaveTypeName(name) => {
                write!(f, "Leave type name '{name}' appears more than once")
            }
            Self::InvalidShiftPattern(code) => {
                write!(
                    f,
                    "Invalid shift pattern '{code}'. Must be one of A, B, DA, NA, DB, NB"
                )
            }
            Self::InvalidDayNight(code) => {
                write!(f, "Invalid day/night cohort '{code}'. Must be D or N")
            }
            Self::InvalidRole(role) => {
                write!(f, "Invalid role '{role}'. Must be admin or user")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Date range ends ({end}) before it starts ({start})")
            }
        }
    }
}

impl std::error::Error for DomainError {}
