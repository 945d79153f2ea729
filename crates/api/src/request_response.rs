// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates travel as `YYYY-MM-DD` strings and timestamps as RFC 3339 strings.

use serde::{Deserialize, Deserializer, Serialize};
use shiftboard_domain::{
    CalendarTag, DailyLeaveOverview, DayHours, DayHoursSource, Employee, LeaveType,
    LeaveTypeHeadcount, ShiftAssignment, WeeklyHoursReport, format_date,
};
use time::format_description::well_known::Rfc3339;

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ============================================================================
// Employees
// ============================================================================

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The employee number.
    pub employee_id: String,
    /// The password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated employee.
    pub user: EmployeeInfo,
}

/// An employee as exposed by the API. The password hash is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// The employee number.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Base rotation group (`A` or `B`).
    pub shift_pattern: Option<String>,
    /// Site.
    pub site: Option<String>,
    /// Day/night cohort (`D` or `N`).
    pub day_night: Option<String>,
    /// `admin` or `user`.
    pub role: String,
}

impl From<&Employee> for EmployeeInfo {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.value().to_string(),
            name: employee.name.clone(),
            shift_pattern: employee.shift_pattern.map(|p| p.as_str().to_string()),
            site: employee.site.clone(),
            day_night: employee.day_night.map(|d| d.as_str().to_string()),
            role: employee.role.as_str().to_string(),
        }
    }
}

/// API response listing employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersResponse {
    /// Employees ordered by employee number.
    pub users: Vec<EmployeeInfo>,
}

/// API request to create an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// The employee number.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Initial password.
    pub password: String,
    /// Base rotation group; `DA`/`NA`/`DB`/`NB` are accepted.
    #[serde(default)]
    pub shift_pattern: Option<String>,
    /// Site.
    #[serde(default)]
    pub site: Option<String>,
    /// Day/night cohort.
    #[serde(default)]
    pub day_night: Option<String>,
    /// Role; defaults to `user`.
    #[serde(default)]
    pub role: Option<String>,
}

/// API request to update an employee.
///
/// Absent fields are left unchanged; an explicit `null` clears a nullable
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New password.
    #[serde(default)]
    pub password: Option<String>,
    /// New base rotation group.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub shift_pattern: Option<Option<String>>,
    /// New site.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub site: Option<Option<String>>,
    /// New day/night cohort.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub day_night: Option<Option<String>>,
    /// New role.
    #[serde(default)]
    pub role: Option<String>,
}

// ============================================================================
// Calendar
// ============================================================================

/// A calendar tag as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTagInfo {
    /// The date.
    pub date: String,
    /// Whether the date is a holiday.
    pub is_holiday: bool,
    /// The pattern on duty.
    pub shift_pattern: Option<String>,
}

impl From<&CalendarTag> for CalendarTagInfo {
    fn from(tag: &CalendarTag) -> Self {
        Self {
            date: format_date(tag.date),
            is_holiday: tag.is_holiday,
            shift_pattern: tag.shift_pattern.map(|p| p.as_str().to_string()),
        }
    }
}

/// API response listing calendar tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCalendarTagsResponse {
    /// Tags in date order.
    pub tags: Vec<CalendarTagInfo>,
}

/// API request to partially update one date's tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCalendarTagRequest {
    /// New holiday flag.
    #[serde(default)]
    pub is_holiday: Option<bool>,
    /// New pattern; `null` clears it.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub shift_pattern: Option<Option<String>>,
}

/// API response for a calendar tag write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCalendarTagResponse {
    /// The stored tag.
    pub tag: CalendarTagInfo,
    /// Whether the tag was newly created.
    pub created: bool,
}

/// One entry of a batch calendar write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTagInput {
    /// The date.
    pub date: String,
    /// Holiday flag.
    #[serde(default)]
    pub is_holiday: bool,
    /// Pattern on duty.
    #[serde(default)]
    pub shift_pattern: Option<String>,
}

/// API request to replace the tags of several dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCalendarTagsRequest {
    /// The tags to write.
    pub tags: Vec<CalendarTagInput>,
}

/// API request to generate a two-on-two-off rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationRequest {
    /// First day of the rotation.
    pub start_date: String,
    /// Pattern on duty for the first two days.
    pub start_pattern: String,
    /// Last day; defaults to 31 December of the start year.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// API response for a batch or rotation write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWriteResponse {
    /// Number of dates written.
    pub written: usize,
    /// First date written.
    pub start_date: Option<String>,
    /// Last date written.
    pub end_date: Option<String>,
}

// ============================================================================
// Leave Types
// ============================================================================

/// A leave type as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeInfo {
    /// Identifier.
    pub leave_id: Option<i64>,
    /// Unique name.
    pub name: String,
    /// `true` for overtime-style entries.
    pub is_not_workday: bool,
    /// Display color.
    pub color: Option<String>,
}

impl From<&LeaveType> for LeaveTypeInfo {
    fn from(leave_type: &LeaveType) -> Self {
        Self {
            leave_id: leave_type.leave_id,
            name: leave_type.name.clone(),
            is_not_workday: leave_type.is_not_workday,
            color: leave_type.color.clone(),
        }
    }
}

/// API response listing leave types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLeaveTypesResponse {
    /// Entries in catalog order.
    pub leave_types: Vec<LeaveTypeInfo>,
}

/// API request to create a leave type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLeaveTypeRequest {
    /// Unique name.
    pub name: String,
    /// `true` for overtime-style entries.
    #[serde(default)]
    pub is_not_workday: bool,
    /// Display color.
    #[serde(default)]
    pub color: Option<String>,
}

/// API request to update a leave type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLeaveTypeRequest {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New overtime flag.
    #[serde(default)]
    pub is_not_workday: Option<bool>,
    /// New display color.
    #[serde(default)]
    pub color: Option<String>,
}

/// API response for the eligibility query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleLeaveTypesResponse {
    /// The employee.
    pub employee_id: String,
    /// The date.
    pub date: String,
    /// `unconstrained`, `scheduled` or `rest`.
    pub day_kind: String,
    /// Selectable entries in catalog order.
    pub leave_types: Vec<LeaveTypeInfo>,
}

// ============================================================================
// Assignments
// ============================================================================

/// An assignment as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentInfo {
    /// The employee.
    pub employee_id: String,
    /// The date.
    pub date: String,
    /// Leave type name or shift code.
    pub shift_type: String,
    /// When the slot was first filled.
    pub created_at: String,
    /// When the value last changed.
    pub updated_at: String,
}

impl From<&ShiftAssignment> for AssignmentInfo {
    fn from(assignment: &ShiftAssignment) -> Self {
        Self {
            employee_id: assignment.employee_id.value().to_string(),
            date: format_date(assignment.date),
            shift_type: assignment.shift_type.clone(),
            created_at: assignment
                .created_at
                .format(&Rfc3339)
                .unwrap_or_default(),
            updated_at: assignment
                .updated_at
                .format(&Rfc3339)
                .unwrap_or_default(),
        }
    }
}

/// API response listing one employee's assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAssignmentsResponse {
    /// The employee.
    pub employee_id: String,
    /// Assignments in date order.
    pub assignments: Vec<AssignmentInfo>,
}

/// API request to set one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAssignmentRequest {
    /// Leave type name or shift code.
    pub shift_type: String,
}

/// API request to move or swap an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAssignmentRequest {
    /// Source date (the source employee is in the path).
    pub from_date: String,
    /// Target employee.
    pub to_employee_id: String,
    /// Target date.
    pub to_date: String,
}

/// API response for an assignment write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentMutationResponse {
    /// `created`, `updated`, `cleared`, `moved`, `swapped` or `unchanged`.
    pub outcome: String,
    /// The slots holding a value after the write.
    pub assignments: Vec<AssignmentInfo>,
    /// A success message.
    pub message: String,
}

/// API request for the weekly hours pre-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHoursRequest {
    /// The candidate date.
    pub date: String,
    /// The candidate shift type.
    pub shift_type: String,
}

/// One day of a weekly hours report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHoursInfo {
    /// The date.
    pub date: String,
    /// Hours credited.
    pub hours: u32,
    /// `overtime`, `absence`, `scheduled` or `off`.
    pub source: String,
    /// The assignment value, when the day has one.
    pub shift_type: Option<String>,
}

impl From<&DayHours> for DayHoursInfo {
    fn from(day: &DayHours) -> Self {
        let (source, shift_type): (&str, Option<String>) = match &day.source {
            DayHoursSource::Overtime { shift_type } => ("overtime", Some(shift_type.clone())),
            DayHoursSource::Absence { shift_type } => ("absence", Some(shift_type.clone())),
            DayHoursSource::ScheduledShift => ("scheduled", None),
            DayHoursSource::Off => ("off", None),
        };
        Self {
            date: format_date(day.date),
            hours: day.hours,
            source: source.to_string(),
            shift_type,
        }
    }
}

/// API response for the weekly hours pre-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHoursResponse {
    /// The employee.
    pub employee_id: String,
    /// The Monday of the week.
    pub week_start: String,
    /// Monday through Sunday.
    pub days: Vec<DayHoursInfo>,
    /// Total hours with the candidate applied.
    pub total_hours: u32,
    /// The weekly cap.
    pub cap: u32,
}

impl From<&WeeklyHoursReport> for WeeklyHoursResponse {
    fn from(report: &WeeklyHoursReport) -> Self {
        Self {
            employee_id: report.employee_id.value().to_string(),
            week_start: format_date(report.week_start),
            days: report.days.iter().map(DayHoursInfo::from).collect(),
            total_hours: report.total_hours,
            cap: report.cap,
        }
    }
}

// ============================================================================
// Overview
// ============================================================================

/// Employees recorded under one leave type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeHeadcountInfo {
    /// The catalog entry.
    pub leave_type: LeaveTypeInfo,
    /// Number of employees.
    pub count: usize,
    /// `(employee_id, name)` pairs in directory order.
    pub employees: Vec<OverviewEmployeeInfo>,
}

/// An employee listed in the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewEmployeeInfo {
    /// The employee number.
    pub employee_id: String,
    /// Display name.
    pub name: String,
}

impl From<&LeaveTypeHeadcount> for LeaveTypeHeadcountInfo {
    fn from(headcount: &LeaveTypeHeadcount) -> Self {
        Self {
            leave_type: LeaveTypeInfo::from(&headcount.leave_type),
            count: headcount.count(),
            employees: headcount
                .employees
                .iter()
                .map(|e| OverviewEmployeeInfo {
                    employee_id: e.employee_id.value().to_string(),
                    name: e.name.clone(),
                })
                .collect(),
        }
    }
}

/// API response for the daily leave overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOverviewResponse {
    /// The date.
    pub date: String,
    /// The cohort filter applied, if any.
    pub day_night: Option<String>,
    /// Absence entries.
    pub absences: Vec<LeaveTypeHeadcountInfo>,
    /// Overtime entries.
    pub overtime: Vec<LeaveTypeHeadcountInfo>,
}

impl From<&DailyLeaveOverview> for DailyOverviewResponse {
    fn from(overview: &DailyLeaveOverview) -> Self {
        Self {
            date: format_date(overview.date),
            day_night: overview.cohort.map(|c| c.as_str().to_string()),
            absences: overview
                .absences
                .iter()
                .map(LeaveTypeHeadcountInfo::from)
                .collect(),
            overtime: overview
                .overtime
                .iter()
                .map(LeaveTypeHeadcountInfo::from)
                .collect(),
        }
    }
}

/// API response for a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// A success message.
    pub message: String,
}
