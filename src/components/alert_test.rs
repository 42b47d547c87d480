use super::*;

#[test]
fn success_marker_is_detected() {
    assert!(is_success_message("✅ Login successful!"));
    assert!(!is_success_message("❌ Login failed"));
    assert!(!is_success_message(""));
}

#[test]
fn alert_class_follows_marker() {
    assert_eq!(alert_class("✅ Saved", false), "alert alert-success");
    assert_eq!(alert_class("❌ Failed", false), "alert alert-danger");
}

#[test]
fn info_style_overrides_marker() {
    assert_eq!(alert_class("✅ Saved", true), "alert alert-info");
    assert_eq!(alert_class("❌ Failed", true), "alert alert-info");
}
