// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar dates, ISO weeks and the calendar tag lookup.
//!
//! Dates are plain calendar dates (`YYYY-MM-DD`) with no time-zone
//! component. They are constructed directly from their string form so
//! week boundaries never shift by a day.

use crate::error::DomainError;
use crate::types::{CalendarTag, ShiftPattern};
use std::collections::BTreeMap;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

/// The `YYYY-MM-DD` date format.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// # Errors
///
/// Returns `DateParseError` if the string is not a valid calendar date,
/// including when it carries surrounding whitespace.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// Returns the Monday of the ISO week containing `date`.
///
/// # Errors
///
/// Returns `DateArithmeticOverflow` at the edge of the representable range.
pub fn week_start(date: Date) -> Result<Date, DomainError> {
    let offset: i64 = i64::from(date.weekday().number_days_from_monday());
    date.checked_sub(Duration::days(offset))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("computing the week start of {date}"),
        })
}

/// Enumerates the seven dates (Monday through Sunday) of the ISO week
/// containing `date`.
///
/// # Errors
///
/// Returns `DateArithmeticOverflow` at the edge of the representable range.
pub fn week_dates(date: Date) -> Result<[Date; 7], DomainError> {
    let monday: Date = week_start(date)?;
    let mut dates: [Date; 7] = [monday; 7];
    for (offset, slot) in (0_i64..).zip(dates.iter_mut()) {
        *slot = monday.checked_add(Duration::days(offset)).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: format!("enumerating the week of {monday}"),
            }
        })?;
    }
    Ok(dates)
}

/// How a date relates to an employee's rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// The date carries no pattern, so nothing can be inferred.
    Unconstrained,
    /// The employee's own pattern is on duty.
    Scheduled,
    /// The other pattern is on duty; the employee is off.
    Rest,
}

/// Classifies a date for an employee pattern against the date's tag.
#[must_use]
pub fn classify_day(employee_pattern: ShiftPattern, tag: Option<&CalendarTag>) -> DayKind {
    match tag.and_then(|t| t.shift_pattern) {
        None => DayKind::Unconstrained,
        Some(pattern) if pattern == employee_pattern => DayKind::Scheduled,
        Some(_) => DayKind::Rest,
    }
}

/// The calendar tags, keyed by date.
///
/// At most one tag exists per date; inserting a tag for a date that is
/// already tagged replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarTags {
    tags: BTreeMap<Date, CalendarTag>,
}

impl CalendarTags {
    /// Creates an empty tag set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tags: BTreeMap::new(),
        }
    }

    /// Returns the tag for `date`, if any.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<&CalendarTag> {
        self.tags.get(&date)
    }

    /// Inserts or replaces the tag for its date.
    pub fn upsert(&mut self, tag: CalendarTag) {
        self.tags.insert(tag.date, tag);
    }

    /// Iterates the tags in date order.
    pub fn iter(&self) -> impl Iterator<Item = &CalendarTag> {
        self.tags.values()
    }

    /// Returns the number of tagged dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns whether no date is tagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// A partial update of one date's calendar tag.
///
/// `shift_pattern: Some(None)` clears the pattern; `None` leaves it alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarTagUpdate {
    /// New holiday flag, if changing.
    pub is_holiday: Option<bool>,
    /// New pattern, if changing.
    pub shift_pattern: Option<Option<ShiftPattern>>,
}

impl CalendarTagUpdate {
    /// Returns whether the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_holiday.is_none() && self.shift_pattern.is_none()
    }

    /// Applies the update to the tag currently stored for `date`.
    ///
    /// A missing tag is created with `is_holiday = false` and no pattern
    /// for every field the update leaves out.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` if the tag exists and the update is empty.
    pub fn apply(
        &self,
        date: Date,
        existing: Option<&CalendarTag>,
    ) -> Result<CalendarTag, DomainError> {
        match existing {
            Some(_) if self.is_empty() => Err(DomainError::ValidationFailed {
                field: "calendar_tag",
                message: String::from("No fields to update"),
            }),
            Some(tag) => Ok(CalendarTag::new(
                date,
                self.is_holiday.unwrap_or(tag.is_holiday),
                self.shift_pattern.unwrap_or(tag.shift_pattern),
            )),
            None => Ok(CalendarTag::new(
                date,
                self.is_holiday.unwrap_or(false),
                self.shift_pattern.flatten(),
            )),
        }
    }
}

impl FromIterator<CalendarTag> for CalendarTags {
    fn from_iter<I: IntoIterator<Item = CalendarTag>>(iter: I) -> Self {
        let mut tags: Self = Self::new();
        for tag in iter {
            tags.upsert(tag);
        }
        tags
    }
}
