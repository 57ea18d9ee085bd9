//! Persistence adapter for roster state.
//!
//! # Responsibility
//! - Map the `students` and `nextStudentId` keys to domain state and back.
//! - Substitute seed defaults for absent or corrupt values, independently
//!   per key, so a corrupt counter does not discard a valid roster.
//!
//! # Invariants
//! - Deserialization failures are logged and swallowed, never propagated.
//! - Saves overwrite the whole value for their key and are idempotent.

use crate::model::student::{seed_next_id, seed_roster, Student, StudentId};
use crate::repo::kv::{KeyValueStore, RepoError, RepoResult};
use log::warn;

/// Key holding the serialized roster array.
pub const KEY_STUDENTS: &str = "students";
/// Key holding the serialized next-id counter.
pub const KEY_NEXT_ID: &str = "nextStudentId";

/// Roster state as loaded from (or about to be written to) the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterState {
    pub students: Vec<Student>,
    pub next_id: StudentId,
}

/// Loads roster state, falling back to seed defaults per key.
pub fn load_state<K: KeyValueStore>(kv: &K) -> RepoResult<RosterState> {
    let students = match kv.get(KEY_STUDENTS)? {
        Some(raw) => match serde_json::from_str::<Vec<Student>>(&raw) {
            Ok(students) => students,
            Err(err) => {
                warn!(
                    "event=state_load module=repo status=fallback key={KEY_STUDENTS} error={err}"
                );
                seed_roster()
            }
        },
        None => seed_roster(),
    };

    let next_id = match kv.get(KEY_NEXT_ID)? {
        Some(raw) => match serde_json::from_str::<StudentId>(&raw) {
            Ok(next_id) => next_id,
            Err(err) => {
                warn!("event=state_load module=repo status=fallback key={KEY_NEXT_ID} error={err}");
                seed_next_id()
            }
        },
        None => seed_next_id(),
    };

    Ok(RosterState { students, next_id })
}

/// Writes the full roster under its key.
pub fn save_students<K: KeyValueStore>(kv: &K, students: &[Student]) -> RepoResult<()> {
    let raw = serde_json::to_string(students).map_err(RepoError::Serialize)?;
    kv.set(KEY_STUDENTS, &raw)
}

/// Writes the next-id counter under its key.
pub fn save_next_id<K: KeyValueStore>(kv: &K, next_id: StudentId) -> RepoResult<()> {
    let raw = serde_json::to_string(&next_id).map_err(RepoError::Serialize)?;
    kv.set(KEY_NEXT_ID, &raw)
}
