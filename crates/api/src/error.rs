// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shiftboard::CoreError;
use shiftboard_domain::DomainError;
use shiftboard_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::AssignmentNotFound { employee_id, date } => ApiError::ResourceNotFound {
            resource_type: String::from("Shift assignment"),
            message: format!("No assignment for employee '{employee_id}' on {date}"),
        },
        DomainError::EmployeeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee '{id}' does not exist"),
        },
        DomainError::LeaveTypeNotFound(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Leave type"),
            message: format!("Leave type '{name}' does not exist"),
        },
        DomainError::CalendarTagNotFound(date) => ApiError::ResourceNotFound {
            resource_type: String::from("Calendar tag"),
            message: format!("No calendar tag for {date}"),
        },
        err @ DomainError::HoursExceeded { .. } => ApiError::DomainRuleViolation {
            rule: String::from("weekly_hours_cap"),
            message: err.to_string(),
        },
        DomainError::ValidationFailed { field, message } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        DomainError::DuplicateLeaveTypeName(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_leave_type_name"),
            message: format!("Leave type '{name}' already exists"),
        },
        DomainError::InvalidShiftPattern(value) => ApiError::InvalidInput {
            field: String::from("shift_pattern"),
            message: format!("'{value}' is not a shift pattern"),
        },
        DomainError::InvalidDayNight(value) => ApiError::InvalidInput {
            field: String::from("day_night"),
            message: format!("'{value}' is not a day/night cohort"),
        },
        DomainError::InvalidRole(value) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("'{value}' is not a role"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::InvalidDateRange { start, end } => ApiError::InvalidInput {
            field: String::from("end_date"),
            message: format!("End date {end} is before start date {start}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Rejections carry domain errors and are translated as such; lookups that
/// found nothing become `ResourceNotFound`; unique constraint failures are
/// rule violations. Everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::Rejected(core_err) => translate_core_error(core_err),
        PersistenceError::NotFound(what) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: what,
        },
        PersistenceError::UniqueViolation(msg) => ApiError::DomainRuleViolation {
            rule: String::from("unique"),
            message: msg,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}
