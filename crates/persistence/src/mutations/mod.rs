// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `employees`: directory writes (passwords are bcrypt-hashed here)
//! - `calendar`: calendar tag upserts, batch writes and rotations
//! - `leave_types`: catalog writes
//! - `assignments`: applying assignment commands inside one transaction

pub mod assignments;
pub mod calendar;
pub mod employees;
pub mod leave_types;
