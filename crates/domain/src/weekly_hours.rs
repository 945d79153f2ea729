// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly working-hours computation and the weekly cap guard.
//!
//! The week is the Monday-start ISO week containing the candidate date.
//! The candidate assignment is overlaid on the employee's existing
//! assignments so the result reflects the state after the write, without
//! touching any store.

use crate::calendar::{CalendarTags, DayKind, classify_day, week_dates};
use crate::catalog::LeaveTypeCatalog;
use crate::error::DomainError;
use crate::types::{Employee, EmployeeId, ShiftAssignment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// Hours credited per worked day.
pub const DEFAULT_DAILY_SHIFT_HOURS: u32 = 10;

/// Maximum weekly hours.
pub const DEFAULT_WEEKLY_HOURS_CAP: u32 = 50;

/// Parameters of the weekly hours rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHoursPolicy {
    /// Hours credited for each day counted as worked.
    pub daily_hours: u32,
    /// The total a week may reach without being rejected.
    pub weekly_cap: u32,
}

impl WeeklyHoursPolicy {
    /// Creates a new policy.
    #[must_use]
    pub const fn new(daily_hours: u32, weekly_cap: u32) -> Self {
        Self {
            daily_hours,
            weekly_cap,
        }
    }
}

impl Default for WeeklyHoursPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_SHIFT_HOURS, DEFAULT_WEEKLY_HOURS_CAP)
    }
}

/// Why a day contributed (or did not contribute) hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayHoursSource {
    /// An assignment naming an overtime-style leave type.
    Overtime {
        /// The assignment's shift type.
        shift_type: String,
    },
    /// An assignment that is an absence or a raw shift code.
    Absence {
        /// The assignment's shift type.
        shift_type: String,
    },
    /// No assignment; the employee's pattern is on duty and it is not a holiday.
    ScheduledShift,
    /// No assignment and no scheduled shift.
    Off,
}

/// Hours for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// The date.
    pub date: Date,
    /// Hours credited.
    pub hours: u32,
    /// What the hours are derived from.
    pub source: DayHoursSource,
}

/// The computed working hours of one employee's week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHoursReport {
    /// The employee.
    pub employee_id: EmployeeId,
    /// The Monday of the week.
    pub week_start: Date,
    /// Monday through Sunday.
    pub days: Vec<DayHours>,
    /// Sum of `days`.
    pub total_hours: u32,
    /// The cap the week is measured against.
    pub cap: u32,
}

impl WeeklyHoursReport {
    /// Returns whether the total is over the cap.
    #[must_use]
    pub const fn exceeds_cap(&self) -> bool {
        self.total_hours > self.cap
    }
}

/// Computes the working hours of the week containing `candidate_date`
/// as if `candidate_shift_type` had been written there.
///
/// An assignment contributes the daily hours only when its shift type
/// resolves to an overtime-style leave type. A day without an assignment
/// contributes the daily hours when it is tagged with the employee's own
/// pattern and is not a holiday. An employee with no pattern has no
/// scheduled days.
///
/// # Arguments
///
/// * `employee` - The employee whose week is computed
/// * `candidate_date` - The date being written
/// * `candidate_shift_type` - The value being written
/// * `existing` - The employee's current assignments; entries outside the
///   week or belonging to other employees are ignored
/// * `tags` - The calendar tags
/// * `catalog` - The leave type catalog
/// * `policy` - Daily hours and weekly cap
///
/// # Errors
///
/// Returns `DateArithmeticOverflow` if the week cannot be enumerated.
pub fn compute_weekly_hours<'a, I>(
    employee: &Employee,
    candidate_date: Date,
    candidate_shift_type: &str,
    existing: I,
    tags: &CalendarTags,
    catalog: &LeaveTypeCatalog,
    policy: &WeeklyHoursPolicy,
) -> Result<WeeklyHoursReport, DomainError>
where
    I: IntoIterator<Item = &'a ShiftAssignment>,
{
    let dates: [Date; 7] = week_dates(candidate_date)?;
    let week_start: Date = dates[0];
    let week_end: Date = dates[6];

    let mut overlay: BTreeMap<Date, &str> = existing
        .into_iter()
        .filter(|a| a.employee_id == employee.employee_id)
        .filter(|a| a.date >= week_start && a.date <= week_end)
        .map(|a| (a.date, a.shift_type.as_str()))
        .collect();
    overlay.insert(candidate_date, candidate_shift_type);

    let mut days: Vec<DayHours> = Vec::with_capacity(dates.len());
    for date in dates {
        let day: DayHours = match overlay.get(&date) {
            Some(shift_type) if catalog.is_overtime(shift_type) => DayHours {
                date,
                hours: policy.daily_hours,
                source: DayHoursSource::Overtime {
                    shift_type: (*shift_type).to_string(),
                },
            },
            Some(shift_type) => DayHours {
                date,
                hours: 0,
                source: DayHoursSource::Absence {
                    shift_type: (*shift_type).to_string(),
                },
            },
            None if is_scheduled_workday(employee, date, tags) => DayHours {
                date,
                hours: policy.daily_hours,
                source: DayHoursSource::ScheduledShift,
            },
            None => DayHours {
                date,
                hours: 0,
                source: DayHoursSource::Off,
            },
        };
        days.push(day);
    }

    let total_hours: u32 = days.iter().map(|d| d.hours).sum();

    Ok(WeeklyHoursReport {
        employee_id: employee.employee_id.clone(),
        week_start,
        days,
        total_hours,
        cap: policy.weekly_cap,
    })
}

/// Rejects a candidate assignment that would push its week over the cap.
///
/// # Errors
///
/// Returns `HoursExceeded` carrying the computed total when it is greater
/// than the policy cap, or `DateArithmeticOverflow` if the week cannot be
/// enumerated.
pub fn validate_weekly_hours<'a, I>(
    employee: &Employee,
    candidate_date: Date,
    candidate_shift_type: &str,
    existing: I,
    tags: &CalendarTags,
    catalog: &LeaveTypeCatalog,
    policy: &WeeklyHoursPolicy,
) -> Result<WeeklyHoursReport, DomainError>
where
    I: IntoIterator<Item = &'a ShiftAssignment>,
{
    let report: WeeklyHoursReport = compute_weekly_hours(
        employee,
        candidate_date,
        candidate_shift_type,
        existing,
        tags,
        catalog,
        policy,
    )?;

    if report.exceeds_cap() {
        return Err(DomainError::HoursExceeded {
            employee_id: report.employee_id.to_string(),
            week_start: report.week_start,
            total_hours: report.total_hours,
            cap: report.cap,
        });
    }

    Ok(report)
}

fn is_scheduled_workday(employee: &Employee, date: Date, tags: &CalendarTags) -> bool {
    let Some(pattern) = employee.shift_pattern else {
        return false;
    };
    let tag = tags.get(date);
    classify_day(pattern, tag) == DayKind::Scheduled && !tag.is_some_and(|t| t.is_holiday)
}
