// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Default display color for leave types created without one.
pub const DEFAULT_LEAVE_COLOR: &str = "#ff9800";

/// An employee's base rotation group.
///
/// The calendar tags each date with the pattern that is "on" that day;
/// an employee works the days tagged with their own pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftPattern {
    /// Rotation group A.
    A,
    /// Rotation group B.
    B,
}

impl ShiftPattern {
    /// Converts this pattern to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Returns the other rotation group.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl FromStr for ShiftPattern {
    type Err = DomainError;

    /// Parses a pattern code.
    ///
    /// Cohort-qualified codes collapse onto their rotation group:
    /// `DA`/`NA` are group A, `DB`/`NB` are group B.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" | "DA" | "NA" => Ok(Self::A),
            "B" | "DB" | "NB" => Ok(Self::B),
            _ => Err(DomainError::InvalidShiftPattern(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day or night cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayNight {
    /// Day shift cohort.
    Day,
    /// Night shift cohort.
    Night,
}

impl DayNight {
    /// Converts this cohort to its single-letter code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "D",
            Self::Night => "N",
        }
    }
}

impl FromStr for DayNight {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "D" => Ok(Self::Day),
            "N" => Ok(Self::Night),
            _ => Err(DomainError::InvalidDayNight(s.to_string())),
        }
    }
}

impl std::fmt::Display for DayNight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Directory role of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Administers personnel, leave types and calendar patterns.
    Admin,
    /// Regular employee.
    #[default]
    User,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents an employee identifier (the employee number).
///
/// Employee identifiers are the natural key of the directory and of every
/// assignment partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId {
    value: String,
}

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` if the identifier is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationFailed {
                field: "employee_id",
                message: String::from("Employee ID cannot be empty"),
            });
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An employee as seen by the scheduling rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee number.
    pub employee_id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Base rotation group, if one has been set.
    pub shift_pattern: Option<ShiftPattern>,
    /// Site the employee is attached to.
    pub site: Option<String>,
    /// Day/night cohort.
    pub day_night: Option<DayNight>,
    /// Directory role.
    pub role: Role,
}

impl Employee {
    /// Creates a new `Employee` with no site or cohort.
    #[must_use]
    pub fn new(employee_id: EmployeeId, name: &str, shift_pattern: Option<ShiftPattern>) -> Self {
        Self {
            employee_id,
            name: name.to_string(),
            shift_pattern,
            site: None,
            day_night: None,
            role: Role::User,
        }
    }
}

/// A per-date annotation: holiday flag and the pattern that is on duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTag {
    /// The tagged date.
    pub date: Date,
    /// Whether the date is a holiday.
    pub is_holiday: bool,
    /// The rotation group on duty that day.
    pub shift_pattern: Option<ShiftPattern>,
}

impl CalendarTag {
    /// Creates a new `CalendarTag`.
    #[must_use]
    pub const fn new(date: Date, is_holiday: bool, shift_pattern: Option<ShiftPattern>) -> Self {
        Self {
            date,
            is_holiday,
            shift_pattern,
        }
    }
}

/// A leave or overtime category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    /// The canonical numeric identifier.
    /// `None` indicates the leave type has not been persisted yet.
    pub leave_id: Option<i64>,
    /// Unique display name; assignments reference leave types by name.
    pub name: String,
    /// `true` for activity on a day the employee is not scheduled
    /// (overtime); `false` for an absence from a scheduled workday.
    pub is_not_workday: bool,
    /// Display color.
    pub color: Option<String>,
}

impl LeaveType {
    /// Creates a new, unpersisted `LeaveType`.
    #[must_use]
    pub fn new(name: &str, is_not_workday: bool) -> Self {
        Self {
            leave_id: None,
            name: name.to_string(),
            is_not_workday,
            color: None,
        }
    }

    /// Creates a `LeaveType` with an existing persisted ID.
    #[must_use]
    pub fn with_id(leave_id: i64, name: &str, is_not_workday: bool, color: Option<String>) -> Self {
        Self {
            leave_id: Some(leave_id),
            name: name.to_string(),
            is_not_workday,
            color,
        }
    }
}

/// The key of an assignment slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    /// The employee owning the slot.
    pub employee_id: EmployeeId,
    /// The date of the slot.
    pub date: Date,
}

impl SlotKey {
    /// Creates a new `SlotKey`.
    #[must_use]
    pub const fn new(employee_id: EmployeeId, date: Date) -> Self {
        Self { employee_id, date }
    }
}

/// The leave type (or raw shift code) recorded for one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// The employee.
    pub employee_id: EmployeeId,
    /// The assigned date.
    pub date: Date,
    /// A leave type name or a raw shift code.
    pub shift_type: String,
    /// When the slot was first filled.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the slot value last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl ShiftAssignment {
    /// Creates a new assignment whose creation and update times are `now`.
    #[must_use]
    pub fn new(employee_id: EmployeeId, date: Date, shift_type: &str, now: OffsetDateTime) -> Self {
        Self {
            employee_id,
            date,
            shift_type: shift_type.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the slot key of this assignment.
    #[must_use]
    pub fn key(&self) -> SlotKey {
        SlotKey::new(self.employee_id.clone(), self.date)
    }
}
