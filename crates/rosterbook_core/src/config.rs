//! Engine configuration.
//!
//! All ambient state the engine touches is carried explicitly in one struct
//! handed in by the collaborator; there is no hidden global configuration.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Course labels offered when no catalog is configured.
pub const DEFAULT_COURSES: [&str; 4] = ["BSC.CSIT", "BIT", "BCA", "Computer Engineering"];

/// Runtime configuration for a roster engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterConfig {
    /// Location of the SQLite key/value store.
    pub db_path: PathBuf,
    /// Directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    /// Course catalog the form edge validates against. The catalog extends
    /// by configuration, never by record.
    pub courses: Vec<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("data/rosterbook.sqlite"),
            log_dir: None,
            log_level: default_log_level().to_string(),
            courses: DEFAULT_COURSES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl RosterConfig {
    /// Whether the catalog contains the given course label.
    pub fn has_course(&self, course: &str) -> bool {
        self.courses.iter().any(|known| known == course)
    }
}
