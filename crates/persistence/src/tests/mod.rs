// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use shiftboard_domain::{DayNight, EmployeeId, LeaveType, Role, ShiftPattern, parse_date};
use time::Date;

use crate::{NewEmployee, Persistence};

pub const TEST_PASSWORD: &str = "correct horse";

pub fn employee_id(value: &str) -> EmployeeId {
    EmployeeId::new(value).unwrap()
}

pub fn date(value: &str) -> Date {
    parse_date(value).unwrap()
}

pub fn create_test_new_employee(id: &str, pattern: Option<ShiftPattern>) -> NewEmployee {
    NewEmployee {
        employee_id: employee_id(id),
        name: format!("Employee {id}"),
        password: TEST_PASSWORD.to_string(),
        shift_pattern: pattern,
        site: Some(String::from("North")),
        day_night: Some(DayNight::Day),
        role: Role::User,
    }
}

/// A database with employees E1 (pattern A) and E2 (pattern B) and the
/// leave types annual, sick and overtime.
pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    persistence
        .create_employee(&create_test_new_employee("E1", Some(ShiftPattern::A)))
        .unwrap();
    persistence
        .create_employee(&create_test_new_employee("E2", Some(ShiftPattern::B)))
        .unwrap();

    for (name, is_not_workday) in [("annual", false), ("sick", false), ("overtime", true)] {
        persistence
            .create_leave_type(&LeaveType::new(name, is_not_workday))
            .unwrap();
    }

    persistence
}
