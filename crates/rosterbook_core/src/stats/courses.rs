//! Per-course roster statistics.

use crate::model::student::Student;

/// Summary numbers for one course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseBreakdown {
    pub course: String,
    pub count: usize,
    pub average_gpa: f64,
    /// Percent of present students in this course, rounded.
    pub attendance_rate: u32,
}

impl CourseBreakdown {
    /// Average gpa with two decimals, e.g. `3.50`.
    pub fn average_gpa_display(&self) -> String {
        format!("{:.2}", self.average_gpa)
    }
}

/// Computes one breakdown per distinct course, ordered by descending
/// student count; ties keep first-appearance order. Empty roster yields an
/// empty list.
pub fn by_course(roster: &[Student]) -> Vec<CourseBreakdown> {
    struct Accumulator {
        course: String,
        count: usize,
        gpa_sum: f64,
        present: usize,
    }

    // Rosters stay small, so a linear scan per record beats a map here and
    // preserves first-appearance order for free.
    let mut accumulators: Vec<Accumulator> = Vec::new();
    for student in roster {
        let index = match accumulators
            .iter()
            .position(|acc| acc.course == student.course)
        {
            Some(index) => index,
            None => {
                accumulators.push(Accumulator {
                    course: student.course.clone(),
                    count: 0,
                    gpa_sum: 0.0,
                    present: 0,
                });
                accumulators.len() - 1
            }
        };
        let entry = &mut accumulators[index];
        entry.count += 1;
        entry.gpa_sum += student.gpa;
        if student.is_present {
            entry.present += 1;
        }
    }

    let mut breakdown: Vec<CourseBreakdown> = accumulators
        .into_iter()
        .map(|acc| CourseBreakdown {
            course: acc.course,
            average_gpa: acc.gpa_sum / acc.count as f64,
            attendance_rate: ((acc.present as f64 / acc.count as f64) * 100.0).round() as u32,
            count: acc.count,
        })
        .collect();

    breakdown.sort_by(|a, b| b.count.cmp(&a.count));
    breakdown
}
