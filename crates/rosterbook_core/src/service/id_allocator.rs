//! Strictly increasing student-id allocation.
//!
//! # Invariants
//! - The counter is always greater than every id issued this session.
//! - Ids are never reused, even after deletions.

use crate::model::student::StudentId;

/// Issues sequential student ids.
///
/// No upper bound check; at one admission per second the i64 space outlasts
/// the hardware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: StudentId,
}

impl IdAllocator {
    /// Resumes allocation from a persisted counter value.
    pub fn starting_at(next: StudentId) -> Self {
        Self { next }
    }

    /// Returns the next id and advances the counter.
    pub fn next_id(&mut self) -> StudentId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) would return.
    pub fn peek(&self) -> StudentId {
        self.next
    }
}
