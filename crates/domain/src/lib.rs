// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod calendar;
mod catalog;
mod eligibility;
mod error;
mod overview;
mod rotation;
mod types;
mod validation;
mod weekly_hours;

#[cfg(test)]
mod tests;

pub use calendar::{
    CalendarTagUpdate, CalendarTags, DayKind, classify_day, format_date, parse_date, week_dates,
    week_start,
};
pub use catalog::LeaveTypeCatalog;
pub use eligibility::{DEFAULT_SHIFT_PATTERN, eligible_leave_types};
pub use error::DomainError;
pub use overview::{DailyLeaveOverview, LeaveTypeHeadcount, OverviewEmployee, daily_leave_overview};
pub use rotation::{ROTATION_RUN_LENGTH, RotationDay, end_of_year, generate_rotation};

// Re-export public types
pub use types::{
    CalendarTag, DEFAULT_LEAVE_COLOR, DayNight, Employee, EmployeeId, LeaveType, Role,
    ShiftAssignment, ShiftPattern, SlotKey,
};
pub use validation::{
    validate_color, validate_employee_fields, validate_employee_id_unique,
    validate_leave_type_fields, validate_leave_type_name_unique, validate_password,
    validate_shift_type,
};
pub use weekly_hours::{
    DEFAULT_DAILY_SHIFT_HOURS, DEFAULT_WEEKLY_HOURS_CAP, DayHours, DayHoursSource,
    WeeklyHoursPolicy, WeeklyHoursReport, compute_weekly_hours, validate_weekly_hours,
};
