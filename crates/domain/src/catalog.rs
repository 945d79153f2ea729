// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The leave type catalog.
//!
//! Assignments reference leave types by name, and both the eligibility
//! resolver and the weekly hours validator resolve those names. The catalog
//! keeps entries in insertion order and indexes them by name so every
//! consumer shares one lookup.

use crate::error::DomainError;
use crate::types::LeaveType;
use std::collections::HashMap;

/// An ordered, name-indexed set of leave types.
///
/// Invariant: names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveTypeCatalog {
    entries: Vec<LeaveType>,
    by_name: HashMap<String, usize>,
}

impl LeaveTypeCatalog {
    /// Builds a catalog from entries in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLeaveTypeName` if two entries share a name.
    pub fn new(entries: Vec<LeaveType>) -> Result<Self, DomainError> {
        let mut by_name: HashMap<String, usize> = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.name.clone(), index).is_some() {
                return Err(DomainError::DuplicateLeaveTypeName(entry.name.clone()));
            }
        }
        Ok(Self { entries, by_name })
    }

    /// Resolves a shift type string to a catalog entry.
    ///
    /// Returns `None` for raw shift codes that are not leave types.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&LeaveType> {
        self.by_name
            .get(name)
            .and_then(|&index| self.entries.get(index))
    }

    /// Returns whether `name` is a catalog entry marked as non-workday
    /// (overtime-style) activity.
    #[must_use]
    pub fn is_overtime(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|lt| lt.is_not_workday)
    }

    /// Iterates entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &LeaveType> {
        self.entries.iter()
    }

    /// Workday-absence entries (`is_not_workday == false`) in catalog order.
    pub fn absence_types(&self) -> impl Iterator<Item = &LeaveType> {
        self.entries.iter().filter(|lt| !lt.is_not_workday)
    }

    /// Overtime-style entries (`is_not_workday == true`) in catalog order.
    pub fn overtime_types(&self) -> impl Iterator<Item = &LeaveType> {
        self.entries.iter().filter(|lt| lt.is_not_workday)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
