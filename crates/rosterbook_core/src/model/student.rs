//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical student record plus the draft/patch shapes used by
//!   the roster store's write paths.
//! - Provide the fixed seed roster used on first run and explicit reset.
//!
//! # Invariants
//! - `id` is immutable after creation and unique within a roster.
//! - `gpa` is within [0.0, 4.0] and rounded to two decimals on every write.
//! - `name` is stored trimmed and non-empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a student record.
///
/// Sequential integers issued by the id allocator, kept as a type alias to
/// make semantic intent explicit in signatures.
pub type StudentId = i64;

/// Canonical student record.
///
/// Serialized field names match the persisted wire layout, so rosters written
/// by earlier installs deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Allocator-issued id, never reused within a session.
    pub id: StudentId,
    /// Display name, trimmed of surrounding whitespace.
    pub name: String,
    /// Course label from the configured catalog.
    pub course: String,
    /// Grade point average in [0.0, 4.0], two decimals.
    pub gpa: f64,
    /// Attendance flag, serialized as `isPresent` on the wire.
    #[serde(rename = "isPresent")]
    pub is_present: bool,
}

/// Candidate student payload lacking an id, submitted for creation.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub course: String,
    pub gpa: f64,
    pub is_present: bool,
}

impl StudentDraft {
    /// Creates a draft with the default attendance flag (present).
    pub fn new(name: impl Into<String>, course: impl Into<String>, gpa: f64) -> Self {
        Self {
            name: name.into(),
            course: course.into(),
            gpa,
            is_present: true,
        }
    }

    /// Checks the invariants the store defends: non-blank name, gpa range.
    ///
    /// Catalog membership is the form edge's concern and is not checked here.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if self.name.trim().is_empty() {
            return Err(StudentValidationError::BlankName);
        }
        validate_gpa(self.gpa)?;
        Ok(())
    }

    /// Converts this draft into a record under the given id, trimming the
    /// name and rounding the gpa on the way.
    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name.trim().to_string(),
            course: self.course,
            gpa: round_gpa(self.gpa),
            is_present: self.is_present,
        }
    }
}

/// Partial field update applied to an existing record by id.
///
/// `None` fields are left untouched. The id and attendance flag are never
/// part of a patch; attendance has its own toggle operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub course: Option<String>,
    pub gpa: Option<f64>,
}

impl StudentPatch {
    /// Checks the same invariants as [`StudentDraft::validate`], but only
    /// for the fields the patch actually carries.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(StudentValidationError::BlankName);
            }
        }
        if let Some(gpa) = self.gpa {
            validate_gpa(gpa)?;
        }
        Ok(())
    }

    /// Applies the patch to a record, preserving id and unspecified fields.
    pub fn apply_to(&self, student: &Student) -> Student {
        Student {
            id: student.id,
            name: self
                .name
                .as_ref()
                .map(|name| name.trim().to_string())
                .unwrap_or_else(|| student.name.clone()),
            course: self
                .course
                .clone()
                .unwrap_or_else(|| student.course.clone()),
            gpa: self.gpa.map(round_gpa).unwrap_or(student.gpa),
            is_present: student.is_present,
        }
    }
}

/// Validation failures for store write paths.
#[derive(Debug, Clone, PartialEq)]
pub enum StudentValidationError {
    BlankName,
    GpaOutOfRange(f64),
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "student name must not be blank"),
            Self::GpaOutOfRange(gpa) => {
                write!(f, "gpa {gpa} is outside the valid range 0.0..=4.0")
            }
        }
    }
}

impl Error for StudentValidationError {}

fn validate_gpa(gpa: f64) -> Result<(), StudentValidationError> {
    if !(0.0..=4.0).contains(&gpa) || gpa.is_nan() {
        return Err(StudentValidationError::GpaOutOfRange(gpa));
    }
    Ok(())
}

/// Rounds a gpa to two decimal places, the precision stored on every write.
pub fn round_gpa(gpa: f64) -> f64 {
    (gpa * 100.0).round() / 100.0
}

/// The fixed default roster used on first run or explicit reset.
pub fn seed_roster() -> Vec<Student> {
    fn student(id: StudentId, name: &str, course: &str, gpa: f64, is_present: bool) -> Student {
        Student {
            id,
            name: name.to_string(),
            course: course.to_string(),
            gpa,
            is_present,
        }
    }

    vec![
        student(1, "Alice Johnson", "BSC.CSIT", 3.8, true),
        student(2, "Bob Smith", "BIT", 3.1, false),
        student(3, "Clara Lee", "BSC.CSIT", 3.5, true),
        student(4, "David Kim", "Computer Engineering", 3.7, true),
        student(5, "Emily Chen", "BCA", 2.6, false),
        student(6, "Frank Patel", "Computer Engineering", 3.9, true),
    ]
}

/// First id to allocate on a fresh or reset roster.
pub fn seed_next_id() -> StudentId {
    seed_roster().len() as StudentId + 1
}
