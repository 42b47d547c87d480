//! Student dashboard: lecture reports with ratings and feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it starts two
//! independent, unordered fetches (reports and the full ratings
//! collection). Each report card derives "my rating" from the ratings
//! collection per render; after a rating write the whole collection is
//! fetched again so the card flips from form to display only once the
//! backend has actually accepted the record.

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::components::report_card::ReportCard;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::{FeedbackSubmission, RatingSubmission};
use crate::state::drafts::FeedbackDrafts;
use crate::state::ratings::RatingsState;
use crate::state::reports::ReportsState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Banner text after a successful rating submit.
pub const RATING_SUCCESS_MESSAGE: &str = "✅ Rating submitted successfully!";
/// Banner text after a successful feedback save.
pub const FEEDBACK_SUCCESS_MESSAGE: &str = "✅ Feedback saved successfully!";
/// Banner text when the mount-time reports fetch fails.
pub const REPORTS_LOAD_FAILED_MESSAGE: &str = "❌ Failed to load reports";
/// Guard text for empty or whitespace-only feedback; no request is sent.
pub const EMPTY_FEEDBACK_MESSAGE: &str = "❌ Please enter some feedback";

/// Reject empty/whitespace feedback before any network call. The text is
/// otherwise sent verbatim, untrimmed.
fn validate_feedback(text: &str) -> Result<String, &'static str> {
    if text.trim().is_empty() {
        return Err(EMPTY_FEEDBACK_MESSAGE);
    }
    Ok(text.to_owned())
}

/// Whether the loaded collection has anything to render; false selects
/// the "No reports found" notice.
fn has_reports(state: &ReportsState) -> bool {
    !state.items.is_empty()
}

fn build_rating_submission(
    report_id: i64,
    rating: i32,
    feedback: String,
    student_id: i64,
) -> RatingSubmission {
    RatingSubmission {
        report_id,
        rating,
        feedback,
        student_id,
    }
}

fn build_feedback_submission(
    report_id: i64,
    feedback: String,
    topic: Option<String>,
    student_id: i64,
) -> FeedbackSubmission {
    FeedbackSubmission {
        report_id,
        feedback,
        topic: topic.unwrap_or_default(),
        student_id,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn rating_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Rejected(message) => format!("❌ Failed: {message}"),
        ApiError::Unreachable => format!("❌ Error: {error}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn feedback_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Rejected(message) => format!("❌ Failed to save feedback: {message}"),
        ApiError::Unreachable => format!("❌ Error saving feedback: {error}"),
    }
}

/// Student dashboard page. Redirects to `/login` once session restore
/// settles without a user.
#[component]
pub fn StudentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let reports = RwSignal::new(ReportsState::loading());
    let ratings = RwSignal::new(RatingsState::default());
    let drafts = RwSignal::new(FeedbackDrafts::default());
    let message = RwSignal::new(String::new());

    // Two independent mount-time fetches. A reports failure is surfaced
    // in the banner; a ratings failure is only logged, leaving the cards
    // unable to show the "already rated" state until the next resync.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_reports().await {
                Ok(items) => reports.set(ReportsState::loaded(items)),
                Err(error) => {
                    reports.set(ReportsState::loaded(Vec::new()));
                    message.set(REPORTS_LOAD_FAILED_MESSAGE.to_owned());
                    log::warn!("reports load failed: {error}");
                }
            }
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_ratings().await {
                Ok(items) => ratings.update(|state| state.resync(items)),
                Err(error) => log::warn!("ratings load failed: {error}"),
            }
        });
    }

    let on_submit_rating = Callback::new(move |(report_id, rating, feedback): (i64, i32, String)| {
        let Some(student_id) = session.get_untracked().student_id() else {
            return;
        };
        let submission = build_rating_submission(report_id, rating, feedback, student_id);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_rating(&submission).await {
                Ok(()) => {
                    message.set(RATING_SUCCESS_MESSAGE.to_owned());
                    // Full resync instead of merging the new record; the
                    // card state must reflect what the backend accepted.
                    match crate::net::api::fetch_ratings().await {
                        Ok(items) => ratings.update(|state| state.resync(items)),
                        Err(error) => log::warn!("ratings resync failed: {error}"),
                    }
                }
                Err(error) => message.set(rating_error_message(&error)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
        }
    });

    let on_save_feedback = Callback::new(move |(report_id, topic): (i64, Option<String>)| {
        let text = match validate_feedback(&drafts.get_untracked().get(report_id)) {
            Ok(text) => text,
            Err(guard) => {
                message.set(guard.to_owned());
                return;
            }
        };
        let Some(student_id) = session.get_untracked().student_id() else {
            return;
        };
        let submission = build_feedback_submission(report_id, text, topic, student_id);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_feedback(&submission).await {
                Ok(()) => {
                    message.set(FEEDBACK_SUCCESS_MESSAGE.to_owned());
                    drafts.update(|state| state.clear(report_id));
                }
                Err(error) => message.set(feedback_error_message(&error)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
        }
    });

    let on_logout = move |_| {
        crate::util::session_store::clear();
        session.set(SessionState::cleared());
    };

    view! {
        <div class="student-page">
            <header class="d-flex justify-content-between align-items-center mb-4">
                <h2>"🎓 Student Dashboard"</h2>
                <span>
                    {move || {
                        session.get().session.map(|s| s.username).unwrap_or_default()
                    }}
                    <button class="btn btn-outline-secondary btn-sm ms-2" on:click=on_logout>
                        "Logout"
                    </button>
                </span>
            </header>

            <Alert message=message info=true/>

            <Show
                when=move || !reports.get().loading
                fallback=|| view! { <p>"Loading reports..."</p> }
            >
                <Show
                    when=move || has_reports(&reports.get())
                    fallback=|| view! { <p>"No reports found"</p> }
                >
                    <div class="row">
                        {move || {
                            let ratings_now = ratings.get();
                            let student_id = session.get().student_id();
                            reports
                                .get()
                                .items
                                .into_iter()
                                .map(|report| {
                                    let mine = student_id.and_then(|sid| {
                                        ratings_now.find_for(report.id, sid).cloned()
                                    });
                                    view! {
                                        <div class="col-md-6 col-lg-4 mb-4">
                                            <ReportCard
                                                report=report
                                                my_rating=mine
                                                drafts=drafts
                                                on_submit_rating=on_submit_rating
                                                on_save_feedback=on_save_feedback
                                            />
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
