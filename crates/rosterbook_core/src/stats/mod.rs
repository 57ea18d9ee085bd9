//! Aggregate statistics over the full roster.
//!
//! # Responsibility
//! - Compute the global overview and the per-course breakdown.
//! - Keep both computations pure and recomputed per call.
//!
//! # Invariants
//! - Inputs are always the full roster, never a filtered view.
//! - Empty inputs yield an explicit no-data result, never a division by
//!   zero.

mod courses;
mod overview;

pub use courses::{by_course, CourseBreakdown};
pub use overview::{overview, RosterOverview, TOP_PERFORMER_GPA};
