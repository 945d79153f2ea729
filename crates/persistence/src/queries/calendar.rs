// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard_domain::{CalendarTag, CalendarTags};
use time::Date;

use crate::data_models::CalendarTagRow;
use crate::diesel_schema::calendar_tags;
use crate::error::PersistenceError;

/// Loads every calendar tag.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn load_calendar_tags(conn: &mut SqliteConnection) -> Result<CalendarTags, PersistenceError> {
    let rows: Vec<CalendarTagRow> = calendar_tags::table
        .order(calendar_tags::date.asc())
        .select(CalendarTagRow::as_select())
        .load(conn)?;

    rows.into_iter().map(CalendarTag::try_from).collect()
}

/// Retrieves the tag for one date.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the date is untagged.
pub fn get_calendar_tag(
    conn: &mut SqliteConnection,
    date: Date,
) -> Result<Option<CalendarTag>, PersistenceError> {
    calendar_tags::table
        .find(date.to_string())
        .select(CalendarTagRow::as_select())
        .first(conn)
        .optional()?
        .map(CalendarTag::try_from)
        .transpose()
}
