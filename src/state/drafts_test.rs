use super::*;

#[test]
fn get_returns_empty_string_when_no_draft() {
    let drafts = FeedbackDrafts::default();
    assert_eq!(drafts.get(7), "");
}

#[test]
fn set_then_get_round_trips_per_report() {
    let mut drafts = FeedbackDrafts::default();
    drafts.set(7, "great lecture".to_owned());
    drafts.set(8, "too fast".to_owned());
    assert_eq!(drafts.get(7), "great lecture");
    assert_eq!(drafts.get(8), "too fast");
}

#[test]
fn clear_drops_only_that_reports_draft() {
    let mut drafts = FeedbackDrafts::default();
    drafts.set(7, "great lecture".to_owned());
    drafts.set(8, "too fast".to_owned());
    drafts.clear(7);
    assert_eq!(drafts.get(7), "");
    assert_eq!(drafts.get(8), "too fast");
}
