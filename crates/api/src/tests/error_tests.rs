// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for error translation at the API boundary.

use shiftboard::CoreError;
use shiftboard_domain::DomainError;
use shiftboard_persistence::PersistenceError;
use time::macros::date;

use crate::{ApiError, translate_domain_error, translate_persistence_error};

#[test]
fn test_hours_exceeded_is_rule_violation() {
    let err: DomainError = DomainError::HoursExceeded {
        employee_id: String::from("E1"),
        week_start: date!(2024 - 06 - 10),
        total_hours: 60,
        cap: 50,
    };

    let api_err: ApiError = translate_domain_error(err);

    assert!(matches!(
        api_err,
        ApiError::DomainRuleViolation { rule, .. } if rule == "weekly_hours_cap"
    ));
}

#[test]
fn test_assignment_not_found_is_not_found() {
    let err: DomainError = DomainError::AssignmentNotFound {
        employee_id: String::from("E1"),
        date: date!(2024 - 06 - 10),
    };

    assert!(matches!(
        translate_domain_error(err),
        ApiError::ResourceNotFound { .. }
    ));
}

#[test]
fn test_rejection_through_persistence_keeps_domain_meaning() {
    let err: PersistenceError =
        PersistenceError::Rejected(CoreError::DomainViolation(DomainError::InvalidRole(
            String::from("owner"),
        )));

    let api_err: ApiError = translate_persistence_error(err);

    assert!(matches!(
        api_err,
        ApiError::InvalidInput { field, .. } if field == "role"
    ));
}

#[test]
fn test_storage_failures_are_internal() {
    let err: PersistenceError = PersistenceError::QueryFailed(String::from("disk I/O error"));

    let api_err: ApiError = translate_persistence_error(err);

    assert!(matches!(api_err, ApiError::Internal { .. }));
    assert!(api_err.to_string().contains("disk I/O error"));
}
