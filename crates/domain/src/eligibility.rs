// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave type eligibility.
//!
//! On a day the employee's own pattern is on duty only absence types may
//! be recorded; on a rest day only overtime-style types may be recorded.
//! Untagged days are unconstrained.

use crate::calendar::{CalendarTags, DayKind, classify_day};
use crate::catalog::LeaveTypeCatalog;
use crate::types::{LeaveType, ShiftPattern};
use time::Date;

/// Pattern assumed for employees who have not been given one.
pub const DEFAULT_SHIFT_PATTERN: ShiftPattern = ShiftPattern::A;

/// Computes the leave types selectable for an employee on a date.
///
/// # Arguments
///
/// * `employee_pattern` - The employee's base pattern (`None` is treated as `A`)
/// * `date` - The date being edited
/// * `tags` - The calendar tags
/// * `catalog` - The leave type catalog
///
/// # Returns
///
/// The selectable entries in catalog order:
/// - the full catalog when the date has no tag or the tag has no pattern
/// - only absence types (`is_not_workday == false`) on a scheduled day
/// - only overtime types (`is_not_workday == true`) on a rest day
#[must_use]
pub fn eligible_leave_types<'a>(
    employee_pattern: Option<ShiftPattern>,
    date: Date,
    tags: &CalendarTags,
    catalog: &'a LeaveTypeCatalog,
) -> Vec<&'a LeaveType> {
    let pattern: ShiftPattern = employee_pattern.unwrap_or(DEFAULT_SHIFT_PATTERN);

    match classify_day(pattern, tags.get(date)) {
        DayKind::Unconstrained => catalog.iter().collect(),
        DayKind::Scheduled => catalog.absence_types().collect(),
        DayKind::Rest => catalog.overtime_types().collect(),
    }
}
