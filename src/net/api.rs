//! REST API client for the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unreachable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is fire-once: no retry, no timeout, no backoff. A non-2xx
//! status becomes [`ApiError::Rejected`] carrying the body's `error`
//! field (or a per-endpoint fallback); any failure to obtain or parse a
//! response becomes [`ApiError::Unreachable`]. Both are recovered at the
//! call site and rendered as banner text, never propagated further.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    FeedbackSubmission, LoginRequest, LoginResponse, Rating, RatingSubmission, RegisterRequest,
    Report,
};

/// Base URL used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Fallback rejection text when the login error body has no `error` field.
pub const LOGIN_FAILED_FALLBACK: &str = "❌ Login failed";
/// Fallback rejection text for registration.
pub const REGISTER_FAILED_FALLBACK: &str = "❌ Registration failed";
/// Fallback rejection text for report/rating reads and writes.
pub const UNKNOWN_ERROR_FALLBACK: &str = "Unknown error";

/// A failed backend call, reduced to the two cases the UI distinguishes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
    /// No response was obtained at all (network failure, unparseable body).
    #[error("cannot connect to backend")]
    Unreachable,
}

/// Resolved base URL: build-time `API_BASE_URL` or the localhost fallback.
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract the backend's `error` text from a parsed rejection body,
/// falling back to the endpoint's generic message.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(body: Option<serde_json::Value>, fallback: &str) -> String {
    body.as_ref()
        .and_then(|value| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| fallback.to_owned(), str::to_owned)
}

#[cfg(feature = "hydrate")]
async fn rejected(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    let body = resp.json::<serde_json::Value>().await.ok();
    ApiError::Rejected(rejection_message(body, fallback))
}

/// Attach `Authorization: Bearer <token>` when a token is persisted.
///
/// The token is read fresh from the session store on every call, so a
/// missing or corrupt store degrades to an unauthenticated request.
#[cfg(feature = "hydrate")]
fn with_bearer(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session_store::load_token() {
        Some(token) => request.header("Authorization", &bearer_value(&token)),
        None => request,
    }
}

/// Authenticate via `POST /api/login`.
///
/// # Errors
///
/// [`ApiError::Rejected`] with the server's message on bad credentials,
/// [`ApiError::Unreachable`] when no response is obtained.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/api/login"))
            .json(request)
            .map_err(|_| ApiError::Unreachable)?
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;
        if !resp.ok() {
            return Err(rejected(resp, LOGIN_FAILED_FALLBACK).await);
        }
        resp.json::<LoginResponse>().await.map_err(|_| ApiError::Unreachable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unreachable)
    }
}

/// Create an account via `POST /api/register`. Does not log the user in.
///
/// # Errors
///
/// See [`login`]; same two-case policy.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/api/register"))
            .json(request)
            .map_err(|_| ApiError::Unreachable)?
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;
        if !resp.ok() {
            return Err(rejected(resp, REGISTER_FAILED_FALLBACK).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unreachable)
    }
}

/// Fetch all lecture reports via `GET /api/reports` (bearer-protected).
///
/// # Errors
///
/// See [`login`]; same two-case policy.
pub async fn fetch_reports() -> Result<Vec<Report>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(&endpoint("/api/reports")))
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;
        if !resp.ok() {
            return Err(rejected(resp, UNKNOWN_ERROR_FALLBACK).await);
        }
        resp.json::<Vec<Report>>().await.map_err(|_| ApiError::Unreachable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unreachable)
    }
}

/// Fetch the full ratings collection via `GET /api/ratings`.
///
/// The caller derives "my rating" per report from this collection; after
/// a write the whole collection is fetched again rather than merging the
/// single new record.
///
/// # Errors
///
/// See [`login`]; same two-case policy.
pub async fn fetch_ratings() -> Result<Vec<Rating>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(&endpoint("/api/ratings")))
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;
        if !resp.ok() {
            return Err(rejected(resp, UNKNOWN_ERROR_FALLBACK).await);
        }
        resp.json::<Vec<Rating>>().await.map_err(|_| ApiError::Unreachable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unreachable)
    }
}

/// Submit a rating via `POST /api/ratings`.
///
/// The client has no local duplicate guard; a second submission for the
/// same `(report, student)` pair is sent as-is and the backend's
/// rejection surfaces through [`ApiError::Rejected`].
///
/// # Errors
///
/// See [`login`]; same two-case policy.
pub async fn submit_rating(submission: &RatingSubmission) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(&endpoint("/api/ratings")))
            .json(submission)
            .map_err(|_| ApiError::Unreachable)?
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;
        if !resp.ok() {
            return Err(rejected(resp, UNKNOWN_ERROR_FALLBACK).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err(ApiError::Unreachable)
    }
}

/// Save free-text feedback via `POST /api/feedback`.
///
/// # Errors
///
/// See [`login`]; same two-case policy.
pub async fn save_feedback(submission: &FeedbackSubmission) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(&endpoint("/api/feedback")))
            .json(submission)
            .map_err(|_| ApiError::Unreachable)?
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;
        if !resp.ok() {
            return Err(rejected(resp, UNKNOWN_ERROR_FALLBACK).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err(ApiError::Unreachable)
    }
}
