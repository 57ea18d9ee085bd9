//! CSV rendering of an ordered roster view.
//!
//! # Responsibility
//! - Produce the tabular text artifact; delivery (file, clipboard) belongs
//!   to collaborators.
//!
//! # Invariants
//! - Header line and column order are a fixed external contract.
//! - Name and course are double-quoted with embedded quotes doubled; gpa is
//!   a bare number; attendance is the literal `Present`/`Absent`.

use crate::model::student::Student;

/// Fixed header line of the export artifact.
pub const CSV_HEADER: &str = "Name,Course,GPA,Attendance";

/// Fixed file name collaborators deliver the artifact under.
pub const CSV_FILE_NAME: &str = "students.csv";

/// Renders the given ordered view as CSV text, header first, lines joined
/// by `\n` with no trailing newline.
pub fn roster_to_csv(rows: &[Student]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for student in rows {
        let attendance = if student.is_present {
            "Present"
        } else {
            "Absent"
        };
        lines.push(format!(
            "\"{}\",\"{}\",{},{}",
            quote(&student.name),
            quote(&student.course),
            student.gpa,
            attendance
        ));
    }

    lines.join("\n")
}

/// Doubles embedded quotes so quoted fields survive values containing `"`.
fn quote(raw: &str) -> String {
    raw.replace('"', "\"\"")
}
