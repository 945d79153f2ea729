// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard::CoreError;
use shiftboard_domain::{CalendarTag, CalendarTagUpdate, DomainError, RotationDay};
use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use crate::data_models::CalendarTagRow;
use crate::diesel_schema::calendar_tags;
use crate::error::PersistenceError;
use crate::queries::calendar::get_calendar_tag;

fn upsert_tag(
    conn: &mut SqliteConnection,
    tag: &CalendarTag,
    now: OffsetDateTime,
) -> Result<(), PersistenceError> {
    let row: CalendarTagRow = CalendarTagRow::from_domain(tag, now)?;

    diesel::insert_into(calendar_tags::table)
        .values(&row)
        .on_conflict(calendar_tags::date)
        .do_update()
        .set(&row)
        .execute(conn)?;

    debug!(date = %tag.date, "Upserted calendar tag");
    Ok(())
}

/// Partially updates the tag of one date, creating it if needed.
///
/// # Returns
///
/// The stored tag and whether it was newly created.
///
/// # Errors
///
/// Returns `Rejected` wrapping `ValidationFailed` if the date is already
/// tagged and the update is empty.
pub fn set_calendar_tag(
    conn: &mut SqliteConnection,
    date: Date,
    update: &CalendarTagUpdate,
    now: OffsetDateTime,
) -> Result<(CalendarTag, bool), PersistenceError> {
    conn.transaction(|conn| {
        let existing: Option<CalendarTag> = get_calendar_tag(conn, date)?;
        let tag: CalendarTag = update
            .apply(date, existing.as_ref())
            .map_err(CoreError::from)?;

        upsert_tag(conn, &tag, now)?;
        Ok((tag, existing.is_none()))
    })
}

/// Replaces the tags of every listed date in one transaction.
///
/// # Errors
///
/// Returns `Rejected` wrapping `ValidationFailed` for an empty list, or a
/// database error; on error nothing is written.
pub fn batch_set_calendar_tags(
    conn: &mut SqliteConnection,
    tags: &[CalendarTag],
    now: OffsetDateTime,
) -> Result<usize, PersistenceError> {
    if tags.is_empty() {
        return Err(CoreError::from(DomainError::ValidationFailed {
            field: "tags",
            message: String::from("At least one tag is required"),
        })
        .into());
    }

    conn.transaction(|conn| {
        for tag in tags {
            upsert_tag(conn, tag, now)?;
        }
        info!(count = tags.len(), "Batch wrote calendar tags");
        Ok(tags.len())
    })
}

/// Writes a generated rotation, keeping each date's holiday flag.
///
/// # Errors
///
/// Returns an error if a write fails; on error nothing is written.
pub fn apply_rotation(
    conn: &mut SqliteConnection,
    days: &[RotationDay],
    now: OffsetDateTime,
) -> Result<usize, PersistenceError> {
    conn.transaction(|conn| {
        for day in days {
            let existing: Option<CalendarTag> = get_calendar_tag(conn, day.date)?;
            upsert_tag(conn, &day.apply_to(existing.as_ref()), now)?;
        }
        info!(
            count = days.len(),
            first = ?days.first().map(|d| d.date),
            last = ?days.last().map(|d| d.date),
            "Applied rotation"
        );
        Ok(days.len())
    })
}

/// Deletes the tag of one date.
///
/// # Errors
///
/// Returns `NotFound` if the date is not tagged.
pub fn delete_calendar_tag(conn: &mut SqliteConnection, date: Date) -> Result<(), PersistenceError> {
    let rows_affected: usize =
        diesel::delete(calendar_tags::table.find(date.to_string())).execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!("Calendar tag {date}")));
    }

    info!(date = %date, "Deleted calendar tag");
    Ok(())
}
