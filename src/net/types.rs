//! Wire DTOs for the portal backend REST surface.
//!
//! DESIGN
//! ======
//! Field spellings are pinned with explicit serde renames because the
//! backend is inconsistent: collection reads use snake_case keys while
//! write payloads and the login response use camelCase.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials sent to `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Numeric account identifier.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Role literal assigned at registration (e.g. `"student"`).
    pub role: String,
    /// Bearer token for protected endpoints.
    pub token: String,
    pub username: String,
}

/// Payload for `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Account role selected at registration.
///
/// The wire value is exactly the lowercase literal the backend stores;
/// `label` is only for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Lecturer,
    Prl,
    Pl,
}

impl Role {
    /// All selectable roles, in display order.
    pub const ALL: [Role; 4] = [Role::Student, Role::Lecturer, Role::Prl, Role::Pl];

    /// The literal sent in the registration payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Lecturer => "lecturer",
            Role::Prl => "prl",
            Role::Pl => "pl",
        }
    }

    /// Human-readable label for the role selector.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Lecturer => "Lecturer",
            Role::Prl => "PRL",
            Role::Pl => "PL",
        }
    }

    /// Parse a select-option value back into a role.
    pub fn from_value(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

/// A lecture report as returned by `GET /api/reports`. Read-only here.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Report {
    pub id: i64,
    pub course_name: String,
    pub course_code: String,
    /// ISO 8601 date string; only the date part is displayed.
    pub date_of_lecture: String,
    /// Free-form week label; may or may not already contain "Week".
    pub week_of_reporting: String,
    pub lecturer_name: String,
    #[serde(default)]
    pub topic_taught: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    pub total_registered: i64,
    pub actual_present: i64,
}

/// A stored rating as returned by `GET /api/ratings`.
///
/// The backend enforces at most one per `(report_id, student_id)` pair;
/// the client only hides the form once a matching record appears.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Rating {
    pub report_id: i64,
    pub student_id: i64,
    /// 1-5 score.
    pub rating: i32,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Payload for `POST /api/ratings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RatingSubmission {
    #[serde(rename = "reportId")]
    pub report_id: i64,
    pub rating: i32,
    pub feedback: String,
    #[serde(rename = "studentId")]
    pub student_id: i64,
}

/// Payload for `POST /api/feedback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    #[serde(rename = "reportId")]
    pub report_id: i64,
    pub feedback: String,
    /// Topic of the lecture the feedback refers to; empty when unknown.
    pub topic: String,
    #[serde(rename = "studentId")]
    pub student_id: i64,
}
