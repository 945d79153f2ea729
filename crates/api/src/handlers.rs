// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::str::FromStr;

use shiftboard::{Command, CoreError, MutationOutcome, TransitionResult};
use shiftboard_domain::{
    CalendarTag, CalendarTagUpdate, CalendarTags, DEFAULT_SHIFT_PATTERN, DailyLeaveOverview,
    DayKind, DayNight, DomainError, Employee, EmployeeId, LeaveType, LeaveTypeCatalog,
    RotationDay, Role, ShiftAssignment, ShiftPattern, SlotKey, WeeklyHoursPolicy,
    WeeklyHoursReport, classify_day, daily_leave_overview, eligible_leave_types, end_of_year,
    generate_rotation, parse_date, validate_color, validate_employee_fields,
    validate_employee_id_unique, validate_leave_type_fields, validate_leave_type_name_unique,
    validate_password, validate_shift_type, validate_weekly_hours,
};
use shiftboard_persistence::{
    EmployeeUpdate, LeaveTypeUpdate, NewEmployee, Persistence, PersistenceError,
    TransactionReader,
};
use time::Date;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::request_response::{
    AssignmentInfo, AssignmentMutationResponse, BatchCalendarTagsRequest, CalendarTagInfo,
    CalendarWriteResponse, CreateLeaveTypeRequest, CreateUserRequest, DailyOverviewResponse,
    DeleteResponse, EligibleLeaveTypesResponse, EmployeeInfo, LeaveTypeInfo,
    ListAssignmentsResponse, ListCalendarTagsResponse, ListLeaveTypesResponse, ListUsersResponse,
    LoginRequest, LoginResponse, MoveAssignmentRequest, RotationRequest, SetAssignmentRequest,
    SetCalendarTagRequest, SetCalendarTagResponse, UpdateLeaveTypeRequest, UpdateUserRequest,
    WeeklyHoursRequest, WeeklyHoursResponse,
};

/// How assignment writes are checked against the weekly hours cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentPolicy {
    /// Reject writes that push the affected week over the cap.
    ///
    /// When set, `set_assignment` checks the written slot and
    /// `move_assignment` checks the target slot.
    pub enforce_weekly_hours: bool,
    /// The hours model.
    pub weekly: WeeklyHoursPolicy,
}

fn parse_employee_id(value: &str) -> Result<EmployeeId, ApiError> {
    Ok(EmployeeId::new(value)?)
}

fn parse_optional<T>(value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    Ok(value
        .filter(|v| !v.trim().is_empty())
        .map(|v| T::from_str(v.trim()))
        .transpose()?)
}

fn require_employee(
    persistence: &mut Persistence,
    employee_id: &EmployeeId,
) -> Result<Employee, ApiError> {
    persistence
        .get_employee(employee_id)?
        .ok_or_else(|| DomainError::EmployeeNotFound(employee_id.to_string()).into())
}

fn require_leave_type(persistence: &mut Persistence, leave_id: i64) -> Result<LeaveType, ApiError> {
    persistence
        .get_leave_type(leave_id)?
        .ok_or_else(|| DomainError::LeaveTypeNotFound(leave_id.to_string()).into())
}

// ============================================================================
// Employees
// ============================================================================

/// Verifies an employee's credentials.
///
/// # Errors
///
/// Returns `InvalidInput` if either field is empty, or
/// `AuthenticationFailed` if the employee is unknown or the password is
/// wrong. The two cases are indistinguishable to the caller.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(&request.employee_id)?;
    validate_password(&request.password)?;

    let Some(employee) = persistence.verify_credentials(&employee_id, &request.password)? else {
        warn!(employee_id = %employee_id, "Rejected login");
        return Err(ApiError::AuthenticationFailed {
            reason: String::from("Invalid employee ID or password"),
        });
    };

    Ok(LoginResponse {
        user: EmployeeInfo::from(&employee),
    })
}

/// Lists every employee.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn list_users(persistence: &mut Persistence) -> Result<ListUsersResponse, ApiError> {
    let employees: Vec<Employee> = persistence.list_employees()?;
    Ok(ListUsersResponse {
        users: employees.iter().map(EmployeeInfo::from).collect(),
    })
}

/// Retrieves one employee.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the employee does not exist.
pub fn get_user(persistence: &mut Persistence, employee_id: &str) -> Result<EmployeeInfo, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(employee_id)?;
    let employee: Employee = require_employee(persistence, &employee_id)?;
    Ok(EmployeeInfo::from(&employee))
}

/// Creates an employee.
///
/// # Errors
///
/// Returns `InvalidInput` if a required field is missing, a code is not
/// recognised or the employee number is already taken.
pub fn create_user(
    persistence: &mut Persistence,
    request: &CreateUserRequest,
) -> Result<EmployeeInfo, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(&request.employee_id)?;
    let shift_pattern: Option<ShiftPattern> = parse_optional(request.shift_pattern.as_deref())?;
    let day_night: Option<DayNight> = parse_optional(request.day_night.as_deref())?;
    let role: Role = parse_optional(request.role.as_deref())?.unwrap_or_default();

    let candidate: Employee = Employee::new(employee_id.clone(), request.name.trim(), shift_pattern);
    validate_employee_fields(&candidate)?;
    validate_password(&request.password)?;
    validate_employee_id_unique(&employee_id, &persistence.list_employees()?)?;

    let created: Employee = persistence.create_employee(&NewEmployee {
        employee_id,
        name: candidate.name,
        password: request.password.clone(),
        shift_pattern,
        site: request.site.clone().filter(|s| !s.trim().is_empty()),
        day_night,
        role,
    })?;

    Ok(EmployeeInfo::from(&created))
}

/// Applies a partial update to an employee.
///
/// # Errors
///
/// Returns `InvalidInput` if the request changes nothing or carries an
/// invalid value, or `ResourceNotFound` if the employee does not exist.
pub fn update_user(
    persistence: &mut Persistence,
    employee_id: &str,
    request: &UpdateUserRequest,
) -> Result<EmployeeInfo, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(employee_id)?;

    let update: EmployeeUpdate = EmployeeUpdate {
        name: request.name.as_ref().map(|n| n.trim().to_string()),
        password: request.password.clone(),
        shift_pattern: request
            .shift_pattern
            .as_ref()
            .map(|p| parse_optional(p.as_deref()))
            .transpose()?,
        site: request.site.clone(),
        day_night: request
            .day_night
            .as_ref()
            .map(|d| parse_optional(d.as_deref()))
            .transpose()?,
        role: request.role.as_deref().map(Role::from_str).transpose()?,
    };

    if update.is_empty() {
        return Err(DomainError::ValidationFailed {
            field: "update",
            message: String::from("No fields to update"),
        }
        .into());
    }
    if let Some(name) = &update.name {
        validate_employee_fields(&Employee::new(employee_id.clone(), name, None))?;
    }
    if let Some(password) = &update.password {
        validate_password(password)?;
    }

    require_employee(persistence, &employee_id)?;
    let updated: Employee = persistence.update_employee(&employee_id, &update)?;
    Ok(EmployeeInfo::from(&updated))
}

/// Deletes an employee together with their assignments.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the employee does not exist.
pub fn delete_user(persistence: &mut Persistence, employee_id: &str) -> Result<DeleteResponse, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(employee_id)?;
    require_employee(persistence, &employee_id)?;
    persistence.delete_employee(&employee_id)?;

    Ok(DeleteResponse {
        message: format!("Deleted employee {employee_id}"),
    })
}

// ============================================================================
// Calendar
// ============================================================================

/// Lists every calendar tag.
///
/// # Errors
///
/// Returns an error if the tags cannot be read.
pub fn list_calendar_tags(persistence: &mut Persistence) -> Result<ListCalendarTagsResponse, ApiError> {
    let tags: CalendarTags = persistence.load_calendar_tags()?;
    Ok(ListCalendarTagsResponse {
        tags: tags.iter().map(CalendarTagInfo::from).collect(),
    })
}

/// Retrieves the tag of one date.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed date, or `ResourceNotFound` if
/// the date is not tagged.
pub fn get_calendar_tag(persistence: &mut Persistence, date: &str) -> Result<CalendarTagInfo, ApiError> {
    let date: Date = parse_date(date)?;
    let tag: CalendarTag = persistence
        .get_calendar_tag(date)?
        .ok_or(DomainError::CalendarTagNotFound(date))?;
    Ok(CalendarTagInfo::from(&tag))
}

/// Partially updates one date's tag, creating it when absent.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed date or pattern, or when an
/// existing tag is updated with no fields.
pub fn set_calendar_tag(
    persistence: &mut Persistence,
    date: &str,
    request: &SetCalendarTagRequest,
) -> Result<SetCalendarTagResponse, ApiError> {
    let date: Date = parse_date(date)?;
    let update: CalendarTagUpdate = CalendarTagUpdate {
        is_holiday: request.is_holiday,
        shift_pattern: request
            .shift_pattern
            .as_ref()
            .map(|p| parse_optional(p.as_deref()))
            .transpose()?,
    };

    let (tag, created): (CalendarTag, bool) = persistence.set_calendar_tag(date, &update)?;

    Ok(SetCalendarTagResponse {
        tag: CalendarTagInfo::from(&tag),
        created,
    })
}

/// Replaces the tags of every listed date in one transaction.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty list or a malformed entry; nothing
/// is written in that case.
pub fn batch_set_calendar_tags(
    persistence: &mut Persistence,
    request: &BatchCalendarTagsRequest,
) -> Result<CalendarWriteResponse, ApiError> {
    let tags: Vec<CalendarTag> = request
        .tags
        .iter()
        .map(|input| -> Result<CalendarTag, ApiError> {
            Ok(CalendarTag::new(
                parse_date(&input.date)?,
                input.is_holiday,
                parse_optional(input.shift_pattern.as_deref())?,
            ))
        })
        .collect::<Result<_, _>>()?;

    let written: usize = persistence.batch_set_calendar_tags(&tags)?;

    Ok(CalendarWriteResponse {
        written,
        start_date: tags.iter().map(|t| t.date).min().map(|d| d.to_string()),
        end_date: tags.iter().map(|t| t.date).max().map(|d| d.to_string()),
    })
}

/// Generates and stores a two-on-two-off rotation.
///
/// The end date defaults to 31 December of the start year. Holiday flags
/// already on the calendar are kept.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed dates, an unknown pattern or an
/// end date before the start date.
pub fn apply_rotation(
    persistence: &mut Persistence,
    request: &RotationRequest,
) -> Result<CalendarWriteResponse, ApiError> {
    let start: Date = parse_date(&request.start_date)?;
    let start_pattern: ShiftPattern = ShiftPattern::from_str(request.start_pattern.trim())?;
    let end: Date = match request.end_date.as_deref() {
        Some(value) => parse_date(value)?,
        None => end_of_year(start)?,
    };

    let days: Vec<RotationDay> = generate_rotation(start, start_pattern, end)?;
    let written: usize = persistence.apply_rotation(&days)?;

    Ok(CalendarWriteResponse {
        written,
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
    })
}

/// Deletes the tag of one date.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the date is not tagged.
pub fn delete_calendar_tag(persistence: &mut Persistence, date: &str) -> Result<DeleteResponse, ApiError> {
    let date: Date = parse_date(date)?;
    persistence
        .delete_calendar_tag(date)
        .map_err(|e| match e {
            PersistenceError::NotFound(_) => ApiError::from(DomainError::CalendarTagNotFound(date)),
            other => ApiError::from(other),
        })?;

    Ok(DeleteResponse {
        message: format!("Deleted calendar tag {date}"),
    })
}

// ============================================================================
// Leave Types
// ============================================================================

/// Lists the catalog in catalog order.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read.
pub fn list_leave_types(persistence: &mut Persistence) -> Result<ListLeaveTypesResponse, ApiError> {
    let leave_types: Vec<LeaveType> = persistence.list_leave_types()?;
    Ok(ListLeaveTypesResponse {
        leave_types: leave_types.iter().map(LeaveTypeInfo::from).collect(),
    })
}

/// Retrieves one leave type.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the leave type does not exist.
pub fn get_leave_type(persistence: &mut Persistence, leave_id: i64) -> Result<LeaveTypeInfo, ApiError> {
    let leave_type: LeaveType = require_leave_type(persistence, leave_id)?;
    Ok(LeaveTypeInfo::from(&leave_type))
}

/// Appends a leave type to the catalog.
///
/// # Errors
///
/// Returns `InvalidInput` for a missing name or malformed color, or
/// `DomainRuleViolation` if the name is taken.
pub fn create_leave_type(
    persistence: &mut Persistence,
    request: &CreateLeaveTypeRequest,
) -> Result<LeaveTypeInfo, ApiError> {
    let candidate: LeaveType = LeaveType {
        leave_id: None,
        name: request.name.trim().to_string(),
        is_not_workday: request.is_not_workday,
        color: request.color.clone().filter(|c| !c.trim().is_empty()),
    };
    validate_leave_type_fields(&candidate)?;
    validate_leave_type_name_unique(&candidate.name, None, &persistence.list_leave_types()?)?;

    let created: LeaveType = persistence.create_leave_type(&candidate)?;
    Ok(LeaveTypeInfo::from(&created))
}

/// Applies a partial update to a leave type.
///
/// Renaming does not rewrite assignments that hold the old name.
///
/// # Errors
///
/// Returns `InvalidInput` if the request changes nothing or carries an
/// invalid value, `ResourceNotFound` if the leave type does not exist, or
/// `DomainRuleViolation` if the new name is taken.
pub fn update_leave_type(
    persistence: &mut Persistence,
    leave_id: i64,
    request: &UpdateLeaveTypeRequest,
) -> Result<LeaveTypeInfo, ApiError> {
    let update: LeaveTypeUpdate = LeaveTypeUpdate {
        name: request.name.as_ref().map(|n| n.trim().to_string()),
        is_not_workday: request.is_not_workday,
        color: request.color.clone(),
    };
    if update.is_empty() {
        return Err(DomainError::ValidationFailed {
            field: "update",
            message: String::from("No fields to update"),
        }
        .into());
    }

    let existing: LeaveType = require_leave_type(persistence, leave_id)?;
    if let Some(name) = &update.name {
        validate_leave_type_fields(&LeaveType::with_id(
            leave_id,
            name,
            existing.is_not_workday,
            None,
        ))?;
        validate_leave_type_name_unique(name, Some(leave_id), &persistence.list_leave_types()?)?;
    }
    if let Some(color) = &update.color {
        validate_color(color)?;
    }

    let updated: LeaveType = persistence.update_leave_type(leave_id, &update)?;
    Ok(LeaveTypeInfo::from(&updated))
}

/// Deletes a leave type.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the leave type does not exist.
pub fn delete_leave_type(persistence: &mut Persistence, leave_id: i64) -> Result<DeleteResponse, ApiError> {
    let leave_type: LeaveType = require_leave_type(persistence, leave_id)?;
    persistence.delete_leave_type(leave_id)?;

    Ok(DeleteResponse {
        message: format!("Deleted leave type '{}'", leave_type.name),
    })
}

/// Lists the leave types selectable for an employee on a date.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed date, or `ResourceNotFound` if
/// the employee does not exist.
pub fn get_eligible_leave_types(
    persistence: &mut Persistence,
    employee_id: &str,
    date: &str,
) -> Result<EligibleLeaveTypesResponse, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(employee_id)?;
    let date: Date = parse_date(date)?;
    let employee: Employee = require_employee(persistence, &employee_id)?;
    let tags: CalendarTags = persistence.load_calendar_tags()?;
    let catalog: LeaveTypeCatalog = persistence.load_catalog()?;

    let day_kind: DayKind = classify_day(
        employee.shift_pattern.unwrap_or(DEFAULT_SHIFT_PATTERN),
        tags.get(date),
    );
    let eligible: Vec<&LeaveType> =
        eligible_leave_types(employee.shift_pattern, date, &tags, &catalog);

    Ok(EligibleLeaveTypesResponse {
        employee_id: employee_id.to_string(),
        date: date.to_string(),
        day_kind: match day_kind {
            DayKind::Unconstrained => "unconstrained",
            DayKind::Scheduled => "scheduled",
            DayKind::Rest => "rest",
        }
        .to_string(),
        leave_types: eligible.into_iter().map(LeaveTypeInfo::from).collect(),
    })
}

// ============================================================================
// Assignments
// ============================================================================

/// Lists one employee's assignments.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the employee does not exist.
pub fn list_assignments(
    persistence: &mut Persistence,
    employee_id: &str,
) -> Result<ListAssignmentsResponse, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(employee_id)?;
    require_employee(persistence, &employee_id)?;
    let assignments: Vec<ShiftAssignment> = persistence.list_assignments(&employee_id)?;

    Ok(ListAssignmentsResponse {
        employee_id: employee_id.to_string(),
        assignments: assignments.iter().map(AssignmentInfo::from).collect(),
    })
}

/// Writes a shift type into one slot, overwriting any existing value.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed date or empty shift type,
/// `ResourceNotFound` if the employee does not exist, or
/// `DomainRuleViolation` if weekly hours are enforced and the week would
/// exceed the cap.
pub fn set_assignment(
    persistence: &mut Persistence,
    policy: &AssignmentPolicy,
    employee_id: &str,
    date: &str,
    request: &SetAssignmentRequest,
) -> Result<AssignmentMutationResponse, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(employee_id)?;
    let date: Date = parse_date(date)?;
    validate_shift_type(&request.shift_type)?;

    let guarded: SlotKey = SlotKey::new(employee_id.clone(), date);
    let command: Command = Command::SetAssignment {
        employee_id,
        date,
        shift_type: request.shift_type.trim().to_string(),
    };

    execute(persistence, policy, command, &[guarded])
}

/// Empties one slot.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the employee does not exist or the slot
/// is already empty.
pub fn clear_assignment(
    persistence: &mut Persistence,
    employee_id: &str,
    date: &str,
) -> Result<AssignmentMutationResponse, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(employee_id)?;
    let date: Date = parse_date(date)?;

    let result: TransitionResult =
        persistence.apply_command(Command::ClearAssignment { employee_id, date })?;
    Ok(mutation_response(&result.outcome))
}

/// Moves an assignment to an empty slot or swaps it with an occupied one.
///
/// # Errors
///
/// Returns `ResourceNotFound` if either employee does not exist or the
/// source slot is empty, `InvalidInput` for malformed input, or
/// `DomainRuleViolation` if weekly hours are enforced and either
/// written slot's week would exceed the cap.
pub fn move_assignment(
    persistence: &mut Persistence,
    policy: &AssignmentPolicy,
    employee_id: &str,
    request: &MoveAssignmentRequest,
) -> Result<AssignmentMutationResponse, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(employee_id)?;
    let from_date: Date = parse_date(&request.from_date)?;
    let to_employee_id: EmployeeId = parse_employee_id(&request.to_employee_id)?;
    let to_date: Date = parse_date(&request.to_date)?;

    // A swap writes both slots, so both weeks are checked.
    let guarded: [SlotKey; 2] = [
        SlotKey::new(employee_id.clone(), from_date),
        SlotKey::new(to_employee_id.clone(), to_date),
    ];
    let command: Command = Command::MoveOrSwap {
        employee_id,
        from_date,
        to_employee_id,
        to_date,
    };

    execute(persistence, policy, command, &guarded)
}

/// Computes an employee's week with a candidate assignment applied and
/// rejects it if the cap would be exceeded. Nothing is written.
///
/// # Errors
///
/// Returns `DomainRuleViolation` when the week exceeds the cap,
/// `ResourceNotFound` if the employee does not exist, or `InvalidInput`
/// for malformed input.
pub fn check_weekly_hours(
    persistence: &mut Persistence,
    policy: &AssignmentPolicy,
    employee_id: &str,
    request: &WeeklyHoursRequest,
) -> Result<WeeklyHoursResponse, ApiError> {
    let employee_id: EmployeeId = parse_employee_id(employee_id)?;
    let date: Date = parse_date(&request.date)?;
    validate_shift_type(&request.shift_type)?;

    let employee: Employee = require_employee(persistence, &employee_id)?;
    let existing: Vec<ShiftAssignment> = persistence.list_assignments(&employee_id)?;
    let tags: CalendarTags = persistence.load_calendar_tags()?;
    let catalog: LeaveTypeCatalog = persistence.load_catalog()?;

    let report: WeeklyHoursReport = validate_weekly_hours(
        &employee,
        date,
        request.shift_type.trim(),
        &existing,
        &tags,
        &catalog,
        &policy.weekly,
    )?;
    debug!(
        employee_id = %employee_id,
        week_start = %report.week_start,
        total_hours = report.total_hours,
        "Weekly hours within cap"
    );

    Ok(WeeklyHoursResponse::from(&report))
}

/// Builds the daily leave overview.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed date or cohort.
pub fn get_daily_overview(
    persistence: &mut Persistence,
    date: &str,
    day_night: Option<&str>,
) -> Result<DailyOverviewResponse, ApiError> {
    let date: Date = parse_date(date)?;
    let cohort: Option<DayNight> = parse_optional(day_night)?;

    let assignments: Vec<ShiftAssignment> = persistence.list_assignments_on(date)?;
    let employees: Vec<Employee> = persistence.list_employees()?;
    let catalog: LeaveTypeCatalog = persistence.load_catalog()?;

    let overview: DailyLeaveOverview =
        daily_leave_overview(date, &assignments, &employees, &catalog, cohort);
    Ok(DailyOverviewResponse::from(&overview))
}

fn execute(
    persistence: &mut Persistence,
    policy: &AssignmentPolicy,
    command: Command,
    guarded: &[SlotKey],
) -> Result<AssignmentMutationResponse, ApiError> {
    let result: TransitionResult = if policy.enforce_weekly_hours {
        persistence.apply_command_guarded(command, |reader, _, result| {
            enforce_weekly_hours(reader, result, guarded, &policy.weekly)
        })?
    } else {
        persistence.apply_command(command)?
    };

    Ok(mutation_response(&result.outcome))
}

fn enforce_weekly_hours(
    reader: &mut TransactionReader<'_>,
    result: &TransitionResult,
    slots: &[SlotKey],
    policy: &WeeklyHoursPolicy,
) -> Result<(), PersistenceError> {
    let occupied: Vec<(&SlotKey, &ShiftAssignment)> = slots
        .iter()
        .filter_map(|slot| result.new_roster.get(slot).map(|a| (slot, a)))
        .collect();
    if occupied.is_empty() {
        return Ok(());
    }

    let tags: CalendarTags = reader.load_calendar_tags()?;
    let catalog: LeaveTypeCatalog = reader.load_catalog()?;

    for (slot, assignment) in occupied {
        let employee: Employee = reader
            .get_employee(&slot.employee_id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Employee {}", slot.employee_id)))?;

        validate_weekly_hours(
            &employee,
            slot.date,
            &assignment.shift_type,
            result.new_roster.assignments_for(&slot.employee_id),
            &tags,
            &catalog,
            policy,
        )
        .map_err(CoreError::from)?;
    }

    Ok(())
}

fn mutation_response(outcome: &MutationOutcome) -> AssignmentMutationResponse {
    let (name, assignments, message): (&str, Vec<&ShiftAssignment>, &str) = match outcome {
        MutationOutcome::Created(a) => ("created", vec![a], "Assignment created"),
        MutationOutcome::Updated(a) => ("updated", vec![a], "Assignment updated"),
        MutationOutcome::Cleared(_) => ("cleared", Vec::new(), "Assignment cleared"),
        MutationOutcome::Moved { assignment, .. } => {
            ("moved", vec![assignment], "Assignment moved")
        }
        MutationOutcome::Swapped { source, target } => {
            ("swapped", vec![source, target], "Assignments swapped")
        }
        MutationOutcome::Unchanged => ("unchanged", Vec::new(), "Source and target are the same slot"),
    };

    AssignmentMutationResponse {
        outcome: name.to_string(),
        assignments: assignments.into_iter().map(AssignmentInfo::from).collect(),
        message: message.to_string(),
    }
}
