// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use shiftboard_domain::{
    CalendarTag, DayNight, Employee, EmployeeId, LeaveType, Role, ShiftAssignment, ShiftPattern,
    parse_date,
};
use std::str::FromStr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::{calendar_tags, employees, leave_types, shift_assignments};
use crate::error::PersistenceError;

/// Input for creating an employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// The employee number.
    pub employee_id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Plain-text password; only its bcrypt hash is stored.
    pub password: String,
    /// Base rotation group.
    pub shift_pattern: Option<ShiftPattern>,
    /// Site.
    pub site: Option<String>,
    /// Day/night cohort.
    pub day_night: Option<DayNight>,
    /// Directory role.
    pub role: Role,
}

/// A partial update of an employee. `None` leaves a field unchanged;
/// `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New plain-text password.
    pub password: Option<String>,
    /// New base rotation group.
    pub shift_pattern: Option<Option<ShiftPattern>>,
    /// New site.
    pub site: Option<Option<String>>,
    /// New day/night cohort.
    pub day_night: Option<Option<DayNight>>,
    /// New role.
    pub role: Option<Role>,
}

impl EmployeeUpdate {
    /// Returns whether the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.password.is_none()
            && self.shift_pattern.is_none()
            && self.site.is_none()
            && self.day_night.is_none()
            && self.role.is_none()
    }
}

/// A partial update of a leave type.
#[derive(Debug, Clone, Default)]
pub struct LeaveTypeUpdate {
    /// New name.
    pub name: Option<String>,
    /// New overtime flag.
    pub is_not_workday: Option<bool>,
    /// New display color.
    pub color: Option<String>,
}

impl LeaveTypeUpdate {
    /// Returns whether the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_not_workday.is_none() && self.color.is_none()
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeRow {
    pub employee_id: String,
    pub name: String,
    pub password_hash: String,
    pub shift_pattern: Option<String>,
    pub site: Option<String>,
    pub day_night: Option<String>,
    pub role: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = PersistenceError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_id: EmployeeId::new(&row.employee_id).map_err(reconstruction)?,
            name: row.name,
            shift_pattern: row
                .shift_pattern
                .as_deref()
                .map(ShiftPattern::from_str)
                .transpose()
                .map_err(reconstruction)?,
            site: row.site,
            day_night: row
                .day_night
                .as_deref()
                .map(DayNight::from_str)
                .transpose()
                .map_err(reconstruction)?,
            role: Role::from_str(&row.role).map_err(reconstruction)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = calendar_tags, primary_key(date))]
#[diesel(treat_none_as_null = true)]
pub(crate) struct CalendarTagRow {
    pub date: String,
    pub is_holiday: i32,
    pub shift_pattern: Option<String>,
    pub updated_at: String,
}

impl CalendarTagRow {
    pub fn from_domain(tag: &CalendarTag, now: OffsetDateTime) -> Result<Self, PersistenceError> {
        Ok(Self {
            date: tag.date.to_string(),
            is_holiday: i32::from(tag.is_holiday),
            shift_pattern: tag.shift_pattern.map(|p| p.as_str().to_string()),
            updated_at: format_timestamp(now)?,
        })
    }
}

impl TryFrom<CalendarTagRow> for CalendarTag {
    type Error = PersistenceError;

    fn try_from(row: CalendarTagRow) -> Result<Self, Self::Error> {
        Ok(Self::new(
            parse_date(&row.date).map_err(reconstruction)?,
            row.is_holiday != 0,
            row.shift_pattern
                .as_deref()
                .map(ShiftPattern::from_str)
                .transpose()
                .map_err(reconstruction)?,
        ))
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = leave_types)]
pub(crate) struct LeaveTypeRow {
    pub leave_id: i64,
    pub name: String,
    pub is_not_workday: i32,
    pub color: Option<String>,
}

impl From<LeaveTypeRow> for LeaveType {
    fn from(row: LeaveTypeRow) -> Self {
        Self::with_id(row.leave_id, &row.name, row.is_not_workday != 0, row.color)
    }
}

#[derive(Queryable, Selectable, Insertable)]
#[diesel(table_name = shift_assignments)]
pub(crate) struct ShiftAssignmentRow {
    pub employee_id: String,
    pub date: String,
    pub shift_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ShiftAssignmentRow {
    pub fn from_domain(assignment: &ShiftAssignment) -> Result<Self, PersistenceError> {
        Ok(Self {
            employee_id: assignment.employee_id.value().to_string(),
            date: assignment.date.to_string(),
            shift_type: assignment.shift_type.clone(),
            created_at: format_timestamp(assignment.created_at)?,
            updated_at: format_timestamp(assignment.updated_at)?,
        })
    }
}

impl TryFrom<ShiftAssignmentRow> for ShiftAssignment {
    type Error = PersistenceError;

    fn try_from(row: ShiftAssignmentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_id: EmployeeId::new(&row.employee_id).map_err(reconstruction)?,
            date: parse_date(&row.date).map_err(reconstruction)?,
            shift_type: row.shift_type,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

/// Formats a timestamp as RFC 3339 for storage.
///
/// # Errors
///
/// Returns an error if the timestamp is outside the RFC 3339 range.
pub(crate) fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}

fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map_err(|e| PersistenceError::ReconstructionError(format!("timestamp '{value}': {e}")))
}

fn reconstruction(err: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::ReconstructionError(err.to_string())
}
