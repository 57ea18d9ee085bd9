use rosterbook_core::{roster_to_csv, seed_roster, Student, CSV_FILE_NAME, CSV_HEADER};

fn student(id: i64, name: &str, course: &str, gpa: f64, is_present: bool) -> Student {
    Student {
        id,
        name: name.to_string(),
        course: course.to_string(),
        gpa,
        is_present,
    }
}

#[test]
fn header_comes_first_and_is_stable() {
    assert_eq!(CSV_HEADER, "Name,Course,GPA,Attendance");
    assert_eq!(CSV_FILE_NAME, "students.csv");

    let csv = roster_to_csv(&seed_roster());
    assert_eq!(csv.lines().next(), Some(CSV_HEADER));
}

#[test]
fn rows_quote_name_and_course_and_spell_out_attendance() {
    let rows = vec![
        student(1, "Alice Johnson", "BSC.CSIT", 3.8, true),
        student(2, "Bob Smith", "BIT", 3.1, false),
    ];

    let csv = roster_to_csv(&rows);
    let lines: Vec<_> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "\"Alice Johnson\",\"BSC.CSIT\",3.8,Present");
    assert_eq!(lines[2], "\"Bob Smith\",\"BIT\",3.1,Absent");
}

#[test]
fn integral_gpa_renders_without_trailing_zeros() {
    let rows = vec![student(1, "Whole", "BIT", 4.0, true)];

    let csv = roster_to_csv(&rows);
    assert!(csv.ends_with("\"Whole\",\"BIT\",4,Present"));
}

#[test]
fn embedded_quotes_are_doubled() {
    let rows = vec![student(1, "Dana \"Dee\" Cruz", "BIT", 3.0, true)];

    let csv = roster_to_csv(&rows);
    assert!(csv.contains("\"Dana \"\"Dee\"\" Cruz\",\"BIT\",3,Present"));
}

#[test]
fn empty_view_is_just_the_header_without_trailing_newline() {
    let csv = roster_to_csv(&[]);
    assert_eq!(csv, CSV_HEADER);
}

#[test]
fn export_preserves_the_order_of_the_given_view() {
    let rows = vec![
        student(2, "Second", "BIT", 3.1, false),
        student(1, "First", "BCA", 3.8, true),
    ];

    let csv = roster_to_csv(&rows);
    let lines: Vec<_> = csv.lines().collect();
    assert!(lines[1].starts_with("\"Second\""));
    assert!(lines[2].starts_with("\"First\""));
}
