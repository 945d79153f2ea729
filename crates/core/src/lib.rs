// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift assignment state transitions for Shiftboard.
//!
//! `apply` is pure: it takes a `Roster` and a `Command` and returns the new
//! roster together with the slot writes a store must perform. The
//! `AssignmentBoard` applies commands in process under per-employee locks.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod board;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use board::AssignmentBoard;
pub use command::Command;
pub use error::CoreError;
pub use state::{AssignmentTable, MutationOutcome, Roster, SlotWrite, TransitionResult};

