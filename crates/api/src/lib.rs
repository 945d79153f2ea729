// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for Shiftboard.
//!
//! Handlers take string inputs as they arrive from a transport, parse and
//! validate them into domain values, call into persistence and return
//! response DTOs. Every failure is reported as an `ApiError`.

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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error, translate_persistence_error};
pub use handlers::{
    AssignmentPolicy, apply_rotation, batch_set_calendar_tags, check_weekly_hours,
    clear_assignment, create_leave_type, create_user, delete_calendar_tag, delete_leave_type,
    delete_user, get_calendar_tag, get_daily_overview, get_eligible_leave_types, get_leave_type,
    get_user, list_assignments, list_calendar_tags, list_leave_types, list_users, login,
    move_assignment, set_assignment, set_calendar_tag, update_leave_type, update_user,
};
pub use request_response::{
    AssignmentInfo, AssignmentMutationResponse, BatchCalendarTagsRequest, CalendarTagInfo,
    CalendarTagInput, CalendarWriteResponse, CreateLeaveTypeRequest, CreateUserRequest,
    DailyOverviewResponse, DayHoursInfo, DeleteResponse, EligibleLeaveTypesResponse,
    EmployeeInfo, LeaveTypeHeadcountInfo, LeaveTypeInfo, ListAssignmentsResponse,
    ListCalendarTagsResponse, ListLeaveTypesResponse, ListUsersResponse, LoginRequest,
    LoginResponse, MoveAssignmentRequest, OverviewEmployeeInfo, RotationRequest,
    SetAssignmentRequest, SetCalendarTagRequest, SetCalendarTagResponse, UpdateLeaveTypeRequest,
    UpdateUserRequest, WeeklyHoursRequest, WeeklyHoursResponse,
};
