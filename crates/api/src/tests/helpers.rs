// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use shiftboard_persistence::Persistence;

use crate::{
    AssignmentPolicy, BatchCalendarTagsRequest, CalendarTagInput, CreateLeaveTypeRequest,
    CreateUserRequest, batch_set_calendar_tags, create_leave_type, create_user,
};

pub const TEST_PASSWORD: &str = "hunter2";

pub fn create_test_user_request(employee_id: &str, shift_pattern: Option<&str>) -> CreateUserRequest {
    CreateUserRequest {
        employee_id: employee_id.to_string(),
        name: format!("Employee {employee_id}"),
        password: TEST_PASSWORD.to_string(),
        shift_pattern: shift_pattern.map(str::to_string),
        site: Some(String::from("North")),
        day_night: Some(String::from("D")),
        role: None,
    }
}

/// Employees E1 (pattern A, day cohort) and E2 (pattern B, night cohort);
/// leave types annual, sick and overtime.
pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    create_user(&mut persistence, &create_test_user_request("E1", Some("A"))).unwrap();
    let mut night: CreateUserRequest = create_test_user_request("E2", Some("NB"));
    night.day_night = Some(String::from("N"));
    create_user(&mut persistence, &night).unwrap();

    for (name, is_not_workday) in [("annual", false), ("sick", false), ("overtime", true)] {
        create_leave_type(
            &mut persistence,
            &CreateLeaveTypeRequest {
                name: name.to_string(),
                is_not_workday,
                color: None,
            },
        )
        .unwrap();
    }

    persistence
}

/// Tags Monday 2024-06-10 through Friday 2024-06-14 with pattern A.
pub fn tag_working_week(persistence: &mut Persistence) {
    let tags: Vec<CalendarTagInput> = (10..=14)
        .map(|day| CalendarTagInput {
            date: format!("2024-06-{day}"),
            is_holiday: false,
            shift_pattern: Some(String::from("A")),
        })
        .collect();
    batch_set_calendar_tags(persistence, &BatchCalendarTagsRequest { tags }).unwrap();
}

pub fn enforcing_policy() -> AssignmentPolicy {
    AssignmentPolicy {
        enforce_weekly_hours: true,
        ..AssignmentPolicy::default()
    }
}
