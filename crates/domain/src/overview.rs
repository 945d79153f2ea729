// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::LeaveTypeCatalog;
use crate::types::{DayNight, Employee, EmployeeId, LeaveType, ShiftAssignment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::Date;

/// An employee listed under a leave type in the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewEmployee {
    /// The employee number.
    pub employee_id: EmployeeId,
    /// Display name.
    pub name: String,
}

/// The employees recorded under one leave type on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeHeadcount {
    /// The catalog entry.
    pub leave_type: LeaveType,
    /// Employees in directory order.
    pub employees: Vec<OverviewEmployee>,
}

impl LeaveTypeHeadcount {
    /// Number of employees recorded under this leave type.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.employees.len()
    }
}

/// Who is on which leave type on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLeaveOverview {
    /// The date.
    pub date: Date,
    /// Cohort restriction applied, if any.
    pub cohort: Option<DayNight>,
    /// Absence entries (`is_not_workday == false`) in catalog order.
    pub absences: Vec<LeaveTypeHeadcount>,
    /// Overtime entries (`is_not_workday == true`) in catalog order.
    pub overtime: Vec<LeaveTypeHeadcount>,
}

/// Builds the daily leave overview.
///
/// Assignments on other dates, assignments of employees outside the
/// directory or outside `cohort`, and assignments holding raw shift codes
/// are ignored. Every catalog entry is listed, including empty ones.
///
/// # Arguments
///
/// * `date` - The date to summarise
/// * `assignments` - Candidate assignments
/// * `employees` - The employee directory
/// * `catalog` - The leave type catalog
/// * `cohort` - Optional day/night restriction
#[must_use]
pub fn daily_leave_overview<'a, I>(
    date: Date,
    assignments: I,
    employees: &[Employee],
    catalog: &LeaveTypeCatalog,
    cohort: Option<DayNight>,
) -> DailyLeaveOverview
where
    I: IntoIterator<Item = &'a ShiftAssignment>,
{
    let shift_types: HashMap<&EmployeeId, &str> = assignments
        .into_iter()
        .filter(|a| a.date == date)
        .map(|a| (&a.employee_id, a.shift_type.as_str()))
        .collect();

    let cohort_members: Vec<&Employee> = employees
        .iter()
        .filter(|e| cohort.is_none() || e.day_night == cohort)
        .collect();

    let mut absences: Vec<LeaveTypeHeadcount> = Vec::new();
    let mut overtime: Vec<LeaveTypeHeadcount> = Vec::new();

    for leave_type in catalog.iter() {
        let listed: Vec<OverviewEmployee> = cohort_members
            .iter()
            .filter(|e| shift_types.get(&e.employee_id) == Some(&leave_type.name.as_str()))
            .map(|e| OverviewEmployee {
                employee_id: e.employee_id.clone(),
                name: e.name.clone(),
            })
            .collect();

        let headcount: LeaveTypeHeadcount = LeaveTypeHeadcount {
            leave_type: leave_type.clone(),
            employees: listed,
        };

        if leave_type.is_not_workday {
            overtime.push(headcount);
        } else {
            absences.push(headcount);
        }
    }

    DailyLeaveOverview {
        date,
        cohort,
        absences,
        overtime,
    }
}
