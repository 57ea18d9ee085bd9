//! Roster store use-case service.
//!
//! # Responsibility
//! - Own the canonical in-memory roster and the id allocator.
//! - Apply mutations as functional updates, then persist the result.
//!
//! # Invariants
//! - Write paths validate before persistence.
//! - The in-memory roster only changes after its replacement was saved, so
//!   a storage failure leaves visible state untouched.
//! - Mutations targeting a missing id are no-ops, never errors.

use crate::model::student::{
    seed_next_id, seed_roster, Student, StudentDraft, StudentId, StudentPatch,
    StudentValidationError,
};
use crate::repo::kv::{KeyValueStore, RepoError};
use crate::repo::state::{load_state, save_next_id, save_students};
use crate::service::id_allocator::IdAllocator;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RosterResult<T> = Result<T, RosterError>;

/// Error for roster store operations.
#[derive(Debug)]
pub enum RosterError {
    Validation(StudentValidationError),
    Repo(RepoError),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<StudentValidationError> for RosterError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for RosterError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// The authoritative roster and its mutation operations.
///
/// Derived views (query pipeline, aggregation) are pure functions over
/// [`students`](Self::students); they never hold their own copies.
pub struct RosterService<K: KeyValueStore> {
    kv: K,
    students: Vec<Student>,
    allocator: IdAllocator,
}

impl<K: KeyValueStore> RosterService<K> {
    /// Loads persisted state (or seed defaults) and wraps it in a service.
    pub fn open(kv: K) -> RosterResult<Self> {
        let state = load_state(&kv)?;
        Ok(Self {
            allocator: IdAllocator::starting_at(state.next_id),
            students: state.students,
            kv,
        })
    }

    /// Current roster snapshot, in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The id the next added student will receive.
    pub fn next_id(&self) -> StudentId {
        self.allocator.peek()
    }

    /// Creates a record from a draft, assigning the next id and appending
    /// after all existing records.
    pub fn add(&mut self, draft: StudentDraft) -> RosterResult<Student> {
        draft.validate()?;

        let id = self.allocator.next_id();
        let student = draft.into_student(id);

        let mut next = self.students.clone();
        next.push(student.clone());
        self.commit(next)?;
        save_next_id(&self.kv, self.allocator.peek())?;

        info!("event=roster_add module=service status=ok id={id}");
        Ok(student)
    }

    /// Removes the record with the given id. Returns whether a record was
    /// removed; a missing id leaves the roster unchanged.
    pub fn delete(&mut self, id: StudentId) -> RosterResult<bool> {
        if !self.contains(id) {
            return Ok(false);
        }

        let next = self
            .students
            .iter()
            .filter(|student| student.id != id)
            .cloned()
            .collect();
        self.commit(next)?;

        info!("event=roster_delete module=service status=ok id={id}");
        Ok(true)
    }

    /// Flips the attendance flag on the matching record, leaving every
    /// other field and record untouched.
    pub fn toggle_attendance(&mut self, id: StudentId) -> RosterResult<bool> {
        if !self.contains(id) {
            return Ok(false);
        }

        let next = self
            .students
            .iter()
            .map(|student| {
                if student.id == id {
                    Student {
                        is_present: !student.is_present,
                        ..student.clone()
                    }
                } else {
                    student.clone()
                }
            })
            .collect();
        self.commit(next)?;

        Ok(true)
    }

    /// Applies a partial update to the matching record; `id` and fields the
    /// patch does not carry are preserved.
    pub fn edit(&mut self, id: StudentId, patch: &StudentPatch) -> RosterResult<bool> {
        patch.validate()?;

        if !self.contains(id) {
            return Ok(false);
        }

        let next = self
            .students
            .iter()
            .map(|student| {
                if student.id == id {
                    patch.apply_to(student)
                } else {
                    student.clone()
                }
            })
            .collect();
        self.commit(next)?;

        Ok(true)
    }

    /// Replaces the roster with the fixed seed set and resets the id
    /// counter. Destructive; the confirmation gesture belongs to callers.
    pub fn reset_to_seed(&mut self) -> RosterResult<()> {
        self.commit(seed_roster())?;
        self.allocator = IdAllocator::starting_at(seed_next_id());
        save_next_id(&self.kv, self.allocator.peek())?;

        info!("event=roster_reset module=service status=ok");
        Ok(())
    }

    fn contains(&self, id: StudentId) -> bool {
        self.students.iter().any(|student| student.id == id)
    }

    /// Persists the replacement roster, then swaps it in.
    fn commit(&mut self, next: Vec<Student>) -> RosterResult<()> {
        save_students(&self.kv, &next)?;
        self.students = next;
        Ok(())
    }
}
