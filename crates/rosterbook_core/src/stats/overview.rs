//! Global roster statistics.

use crate::model::student::Student;

/// Minimum gpa counting as a top performer.
pub const TOP_PERFORMER_GPA: f64 = 3.6;

/// Whole-roster summary numbers.
///
/// Fields stay numeric; the `*_display` helpers produce the rounded labels
/// the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterOverview {
    pub total: usize,
    pub average_gpa: f64,
    /// Percent of present students, rounded to the nearest integer.
    pub attendance_rate: u32,
    /// Students with `gpa >= TOP_PERFORMER_GPA`.
    pub top_performers: usize,
    pub highest_gpa: f64,
    pub lowest_gpa: f64,
}

impl RosterOverview {
    /// Average gpa with two decimals, e.g. `3.45`.
    pub fn average_gpa_display(&self) -> String {
        format!("{:.2}", self.average_gpa)
    }

    /// Highest gpa with one decimal, e.g. `3.8`.
    pub fn highest_gpa_display(&self) -> String {
        format!("{:.1}", self.highest_gpa)
    }

    /// Lowest gpa with one decimal.
    pub fn lowest_gpa_display(&self) -> String {
        format!("{:.1}", self.lowest_gpa)
    }
}

/// Computes the global overview; `None` on an empty roster.
pub fn overview(roster: &[Student]) -> Option<RosterOverview> {
    if roster.is_empty() {
        return None;
    }

    let total = roster.len();
    let gpa_sum: f64 = roster.iter().map(|student| student.gpa).sum();
    let present = roster.iter().filter(|student| student.is_present).count();
    let top_performers = roster
        .iter()
        .filter(|student| student.gpa >= TOP_PERFORMER_GPA)
        .count();
    let highest_gpa = roster
        .iter()
        .map(|student| student.gpa)
        .fold(f64::NEG_INFINITY, f64::max);
    let lowest_gpa = roster
        .iter()
        .map(|student| student.gpa)
        .fold(f64::INFINITY, f64::min);

    Some(RosterOverview {
        total,
        average_gpa: gpa_sum / total as f64,
        attendance_rate: ((present as f64 / total as f64) * 100.0).round() as u32,
        top_performers,
        highest_gpa,
        lowest_gpa,
    })
}
