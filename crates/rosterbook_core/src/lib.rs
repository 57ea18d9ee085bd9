//! Core roster engine for Rosterbook.
//! This crate is the single source of truth for roster business invariants.

pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod stats;
pub mod storage;

pub use config::{RosterConfig, DEFAULT_COURSES};
pub use export::csv::{roster_to_csv, CSV_FILE_NAME, CSV_HEADER};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{
    round_gpa, seed_next_id, seed_roster, Student, StudentDraft, StudentId, StudentPatch,
    StudentValidationError,
};
pub use model::user::{SessionUser, UserRecord};
pub use query::pipeline::{run_query, unique_courses, FilterOption, RosterQuery, SortKey};
pub use repo::kv::{KeyValueStore, RepoError, RepoResult, SqliteKeyValueStore};
pub use repo::state::{load_state, save_next_id, save_students, RosterState};
pub use service::prefs_service::{load_theme, save_theme, Theme};
pub use service::roster_service::{RosterError, RosterResult, RosterService};
pub use service::session_service::{AuthError, AuthResult, SessionService};
pub use stats::{by_course, overview, CourseBreakdown, RosterOverview, TOP_PERFORMER_GPA};
pub use storage::{open_store, open_store_in_memory, StorageError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
