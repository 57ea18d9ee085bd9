use rosterbook_core::{by_course, overview, seed_roster, Student, TOP_PERFORMER_GPA};

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
fn empty_roster_yields_no_overview_and_no_breakdown() {
    assert_eq!(overview(&[]), None);
    assert!(by_course(&[]).is_empty());
}

#[test]
fn overview_of_two_students_matches_expected_numbers() {
    let roster = vec![
        student(1, "A", "BIT", 3.8, true),
        student(2, "B", "BIT", 3.1, false),
    ];

    let stats = overview(&roster).unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.average_gpa_display(), "3.45");
    assert_eq!(stats.attendance_rate, 50);
    assert_eq!(stats.top_performers, 1);
    assert_eq!(stats.highest_gpa_display(), "3.8");
    assert_eq!(stats.lowest_gpa_display(), "3.1");
}

#[test]
fn top_performer_threshold_is_inclusive() {
    let roster = vec![
        student(1, "A", "BIT", TOP_PERFORMER_GPA, true),
        student(2, "B", "BIT", 3.59, true),
    ];

    let stats = overview(&roster).unwrap();
    assert_eq!(stats.top_performers, 1);
}

#[test]
fn overview_of_seed_roster() {
    let stats = overview(&seed_roster()).unwrap();

    assert_eq!(stats.total, 6);
    // (3.8 + 3.1 + 3.5 + 3.7 + 2.6 + 3.9) / 6 = 3.4333...
    assert_eq!(stats.average_gpa_display(), "3.43");
    // 4 of 6 present = 66.66... -> 67
    assert_eq!(stats.attendance_rate, 67);
    assert_eq!(stats.top_performers, 3);
    assert_eq!(stats.highest_gpa_display(), "3.9");
    assert_eq!(stats.lowest_gpa_display(), "2.6");
}

#[test]
fn course_breakdown_matches_expected_numbers_and_ordering() {
    let roster = vec![
        student(1, "A", "BIT", 3.0, true),
        student(2, "B", "BIT", 4.0, false),
        student(3, "C", "BCA", 2.0, false),
    ];

    let breakdown = by_course(&roster);
    assert_eq!(breakdown.len(), 2);

    assert_eq!(breakdown[0].course, "BIT");
    assert_eq!(breakdown[0].count, 2);
    assert_eq!(breakdown[0].average_gpa_display(), "3.50");
    assert_eq!(breakdown[0].attendance_rate, 50);

    assert_eq!(breakdown[1].course, "BCA");
    assert_eq!(breakdown[1].count, 1);
    assert_eq!(breakdown[1].average_gpa_display(), "2.00");
    assert_eq!(breakdown[1].attendance_rate, 0);
}

#[test]
fn course_breakdown_count_ties_keep_first_appearance_order() {
    let roster = vec![
        student(1, "A", "BCA", 3.0, true),
        student(2, "B", "BIT", 3.0, true),
        student(3, "C", "BCA", 3.0, true),
        student(4, "D", "BIT", 3.0, true),
    ];

    let breakdown = by_course(&roster);
    let courses: Vec<_> = breakdown.iter().map(|c| c.course.as_str()).collect();
    assert_eq!(courses, vec!["BCA", "BIT"]);
}

#[test]
fn breakdown_reads_the_full_roster_not_a_filtered_view() {
    let roster = seed_roster();
    let breakdown = by_course(&roster);

    let total: usize = breakdown.iter().map(|c| c.count).sum();
    assert_eq!(total, roster.len());
    assert_eq!(breakdown[0].course, "BSC.CSIT");
    assert_eq!(breakdown[0].count, 2);
}
