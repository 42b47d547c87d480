//! Report card for the student dashboard.
//!
//! DESIGN
//! ======
//! One card per lecture report: course header, week label, attendance
//! bar, a feedback box backed by the shared drafts map, and a rating
//! area that is either the student's existing rating or a 1-5 submission
//! form. The card is purely presentational; all network work happens in
//! the page through the callbacks.

#[cfg(test)]
#[path = "report_card_test.rs"]
mod report_card_test;

use leptos::prelude::*;

use crate::net::types::{Rating, Report};
use crate::state::drafts::FeedbackDrafts;

/// Attendance as a rounded percentage; 0 when nobody is registered.
fn attendance_pct(actual_present: i64, total_registered: i64) -> i64 {
    if total_registered <= 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    {
        ((actual_present as f64 / total_registered as f64) * 100.0).round() as i64
    }
}

/// Progress-bar severity class for an attendance percentage.
fn attendance_class(pct: i64) -> &'static str {
    if pct < 50 {
        "progress-bar bg-danger"
    } else if pct < 75 {
        "progress-bar bg-warning"
    } else {
        "progress-bar bg-success"
    }
}

/// Normalize the free-form week field to a "Week N" label.
fn week_label(raw: &str) -> String {
    if raw.contains("Week") {
        raw.to_owned()
    } else {
        format!("Week {raw}")
    }
}

/// Topic line with the original's placeholder for missing topics.
fn topic_display(topic: Option<&str>) -> String {
    match topic {
        Some(topic) if !topic.is_empty() => topic.to_owned(),
        _ => "Not specified".to_owned(),
    }
}

/// Date part of an ISO 8601 timestamp string.
fn date_display(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

/// Parse the numeric rating input. The input element constrains the
/// range; anything unparseable aborts the submit.
fn parse_rating(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// A single report with its feedback box and rating area.
#[component]
pub fn ReportCard(
    report: Report,
    /// The student's existing rating for this report, if the last fetch
    /// contained one. Present means the form is replaced by a display.
    my_rating: Option<Rating>,
    drafts: RwSignal<FeedbackDrafts>,
    on_submit_rating: Callback<(i64, i32, String)>,
    on_save_feedback: Callback<(i64, Option<String>)>,
) -> impl IntoView {
    let report_id = report.id;
    let topic = report.topic_taught.clone();
    let pct = attendance_pct(report.actual_present, report.total_registered);
    let attendance_label = format!(
        "Attendance: {}/{} ({pct}%)",
        report.actual_present, report.total_registered
    );
    let subtitle = format!("{} | {}", report.course_code, date_display(&report.date_of_lecture));
    let venue_line = report.venue.clone().map(|venue| format!("Venue: {venue}"));

    let save_topic = topic.clone();
    let on_save_click = move |_| {
        on_save_feedback.run((report_id, save_topic.clone()));
    };

    view! {
        <div class="card shadow-sm h-100">
            <div class="card-body">
                <h5 class="card-title">{report.course_name.clone()}</h5>
                <h6 class="card-subtitle mb-2 text-muted">{subtitle}</h6>

                <div class="mb-2">
                    <small class="text-muted">{week_label(&report.week_of_reporting)}</small>
                </div>

                <p class="card-text">
                    <strong>"Lecturer: "</strong>
                    {report.lecturer_name.clone()}
                    <br/>
                    <strong>"Topic: "</strong>
                    {topic_display(topic.as_deref())}
                </p>

                <div class="mb-3">
                    <label class="form-label">{attendance_label}</label>
                    <div class="progress">
                        <div
                            class=attendance_class(pct)
                            role="progressbar"
                            style=format!("width: {pct}%")
                        >
                            {format!("{pct}%")}
                        </div>
                    </div>
                </div>

                <div class="mb-3">
                    <label class="form-label"><strong>"Feedback"</strong></label>
                    <textarea
                        class="form-control mb-2"
                        placeholder="Enter your feedback here..."
                        rows="3"
                        prop:value=move || drafts.get().get(report_id)
                        on:input=move |ev| {
                            drafts.update(|d| d.set(report_id, event_target_value(&ev)));
                        }
                    ></textarea>
                    <button class="btn btn-primary btn-sm" on:click=on_save_click>
                        "Save Feedback"
                    </button>
                </div>

                {match my_rating {
                    Some(rating) => view! {
                        <div class="alert alert-success p-2">
                            <strong>"Your Rating: "</strong>
                            {format!("⭐ {}", rating.rating)}
                            <br/>
                            <em>{rating.feedback.unwrap_or_default()}</em>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <RatingForm report_id=report_id on_submit_rating=on_submit_rating/>
                    }
                    .into_any(),
                }}
            </div>
            <div class="card-footer text-end">
                <small class="text-muted">{venue_line.unwrap_or_default()}</small>
            </div>
        </div>
    }
}

/// 1-5 rating form shown until a matching rating exists.
#[component]
fn RatingForm(report_id: i64, on_submit_rating: Callback<(i64, i32, String)>) -> impl IntoView {
    let rating_value = RwSignal::new("5".to_owned());
    let rating_feedback = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(score) = parse_rating(&rating_value.get()) else {
            return;
        };
        on_submit_rating.run((report_id, score, rating_feedback.get()));
        rating_value.set("5".to_owned());
        rating_feedback.set(String::new());
    };

    view! {
        <form on:submit=on_submit>
            <div class="mb-2">
                <label class="form-label">"Rate Lecture"</label>
                <input
                    type="number"
                    min="1"
                    max="5"
                    class="form-control"
                    required
                    prop:value=move || rating_value.get()
                    on:input=move |ev| rating_value.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-2">
                <textarea
                    placeholder="Enter rating feedback"
                    class="form-control"
                    prop:value=move || rating_feedback.get()
                    on:input=move |ev| rating_feedback.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button class="btn btn-outline-primary btn-sm" type="submit">
                "Submit Rating"
            </button>
        </form>
    }
}
