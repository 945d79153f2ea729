// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Roster;
use shiftboard_domain::{EmployeeId, ShiftAssignment, SlotKey, parse_date};
use time::macros::datetime;
use time::{Date, OffsetDateTime};

pub fn created_at() -> OffsetDateTime {
    datetime!(2024-06-01 08:00 UTC)
}

pub fn later() -> OffsetDateTime {
    datetime!(2024-06-02 09:30 UTC)
}

pub fn employee(id: &str) -> EmployeeId {
    EmployeeId::new(id).unwrap()
}

pub fn date(value: &str) -> Date {
    parse_date(value).unwrap()
}

pub fn slot(id: &str, day: &str) -> SlotKey {
    SlotKey::new(employee(id), date(day))
}

pub fn create_test_assignment(id: &str, day: &str, shift_type: &str) -> ShiftAssignment {
    ShiftAssignment::new(employee(id), date(day), shift_type, created_at())
}

/// E1 has annual leave on the 10th and overtime on the 11th; E2 has sick
/// leave on the 10th.
pub fn create_test_roster() -> Roster {
    Roster::from_assignments(vec![
        create_test_assignment("E1", "2024-06-10", "annual"),
        create_test_assignment("E1", "2024-06-11", "overtime"),
        create_test_assignment("E2", "2024-06-10", "sick"),
    ])
}
