// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CalendarTag, ShiftPattern};
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Number of consecutive days a pattern stays on duty before flipping.
pub const ROTATION_RUN_LENGTH: usize = 2;

/// One generated day of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationDay {
    /// The date.
    pub date: Date,
    /// The pattern on duty.
    pub shift_pattern: ShiftPattern,
}

impl RotationDay {
    /// Applies this day to an existing tag, keeping its holiday flag.
    ///
    /// A date without a tag becomes a non-holiday tag.
    #[must_use]
    pub fn apply_to(&self, existing: Option<&CalendarTag>) -> CalendarTag {
        let is_holiday: bool = existing.is_some_and(|t| t.is_holiday);
        CalendarTag::new(self.date, is_holiday, Some(self.shift_pattern))
    }
}

/// Generates a two-on-two-off rotation from `start` through `end` inclusive.
///
/// The first two days carry `start_pattern`, the next two the opposite
/// pattern, and so on.
///
/// # Errors
///
/// Returns `InvalidDateRange` if `end` is before `start`.
pub fn generate_rotation(
    start: Date,
    start_pattern: ShiftPattern,
    end: Date,
) -> Result<Vec<RotationDay>, DomainError> {
    if end < start {
        return Err(DomainError::InvalidDateRange { start, end });
    }

    let mut days: Vec<RotationDay> = Vec::new();
    let mut pattern: ShiftPattern = start_pattern;
    let mut run: usize = 0;
    let mut current: Option<Date> = Some(start);

    while let Some(date) = current.filter(|d| *d <= end) {
        days.push(RotationDay {
            date,
            shift_pattern: pattern,
        });
        run += 1;
        if run == ROTATION_RUN_LENGTH {
            pattern = pattern.opposite();
            run = 0;
        }
        current = date.next_day();
    }

    Ok(days)
}

/// Returns 31 December of the year containing `date`.
///
/// # Errors
///
/// Returns `DateArithmeticOverflow` if the date cannot be constructed.
pub fn end_of_year(date: Date) -> Result<Date, DomainError> {
    Date::from_calendar_date(date.year(), Month::December, 31).map_err(|e| {
        DomainError::DateArithmeticOverflow {
            operation: format!("computing the end of year {}: {e}", date.year()),
        }
    })
}
