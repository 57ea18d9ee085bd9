//! Domain records for the roster engine.
//!
//! # Responsibility
//! - Define the canonical student record and its draft/patch shapes.
//! - Define the account records managed by the session layer.
//!
//! # Invariants
//! - Student ids are unique, positive, and never reassigned.
//! - `gpa` stays within [0.0, 4.0] and carries at most two decimals.

pub mod student;
pub mod user;
