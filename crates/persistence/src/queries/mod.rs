// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `employees`: directory lookups and credential checks
//! - `calendar`: calendar tags
//! - `leave_types`: the leave type catalog
//! - `assignments`: shift assignments and roster loading

pub mod assignments;
pub mod calendar;
pub mod employees;
pub mod leave_types;
