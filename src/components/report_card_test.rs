use super::*;

// =============================================================
// Attendance
// =============================================================

#[test]
fn attendance_pct_rounds_to_nearest_percent() {
    assert_eq!(attendance_pct(31, 40), 78);
    assert_eq!(attendance_pct(1, 3), 33);
    assert_eq!(attendance_pct(2, 3), 67);
    assert_eq!(attendance_pct(40, 40), 100);
}

#[test]
fn attendance_pct_is_zero_when_nobody_registered() {
    assert_eq!(attendance_pct(5, 0), 0);
    assert_eq!(attendance_pct(0, 0), 0);
}

#[test]
fn attendance_class_maps_severity_bands() {
    assert_eq!(attendance_class(0), "progress-bar bg-danger");
    assert_eq!(attendance_class(49), "progress-bar bg-danger");
    assert_eq!(attendance_class(50), "progress-bar bg-warning");
    assert_eq!(attendance_class(74), "progress-bar bg-warning");
    assert_eq!(attendance_class(75), "progress-bar bg-success");
    assert_eq!(attendance_class(100), "progress-bar bg-success");
}

// =============================================================
// Labels
// =============================================================

#[test]
fn week_label_prefixes_bare_numbers() {
    assert_eq!(week_label("6"), "Week 6");
}

#[test]
fn week_label_keeps_existing_week_text() {
    assert_eq!(week_label("Week 6"), "Week 6");
}

#[test]
fn topic_display_falls_back_when_missing_or_empty() {
    assert_eq!(topic_display(Some("REST APIs")), "REST APIs");
    assert_eq!(topic_display(Some("")), "Not specified");
    assert_eq!(topic_display(None), "Not specified");
}

#[test]
fn date_display_takes_date_part_of_iso_timestamp() {
    assert_eq!(date_display("2025-09-01T00:00:00.000Z"), "2025-09-01");
    assert_eq!(date_display("2025-09-01"), "2025-09-01");
    assert_eq!(date_display("n/a"), "n/a");
}

// =============================================================
// Rating input
// =============================================================

#[test]
fn parse_rating_accepts_constrained_input() {
    assert_eq!(parse_rating("5"), Some(5));
    assert_eq!(parse_rating(" 3 "), Some(3));
}

#[test]
fn parse_rating_rejects_garbage() {
    assert_eq!(parse_rating(""), None);
    assert_eq!(parse_rating("five"), None);
}
