use super::*;

fn rating(report_id: i64, student_id: i64, score: i32) -> Rating {
    serde_json::from_value(serde_json::json!({
        "report_id": report_id,
        "student_id": student_id,
        "rating": score,
        "feedback": "ok"
    }))
    .unwrap()
}

#[test]
fn ratings_state_default_is_empty() {
    let state = RatingsState::default();
    assert!(state.items.is_empty());
}

#[test]
fn resync_replaces_previous_collection() {
    let mut state = RatingsState::default();
    state.resync(vec![rating(1, 3, 4)]);
    state.resync(vec![rating(2, 3, 5), rating(7, 3, 5)]);
    assert_eq!(state.items.len(), 2);
    assert!(state.find_for(1, 3).is_none());
}

#[test]
fn find_for_requires_both_report_and_student_match() {
    let mut state = RatingsState::default();
    state.resync(vec![rating(7, 2, 3), rating(7, 3, 5), rating(8, 3, 4)]);
    let mine = state.find_for(7, 3).unwrap();
    assert_eq!(mine.rating, 5);
    assert!(state.find_for(7, 9).is_none());
    assert!(state.find_for(9, 3).is_none());
}

#[test]
fn find_for_returns_first_match() {
    // The backend enforces uniqueness, but the scan is defined to take
    // the first record when it does not.
    let mut state = RatingsState::default();
    state.resync(vec![rating(7, 3, 2), rating(7, 3, 5)]);
    assert_eq!(state.find_for(7, 3).unwrap().rating, 2);
}
