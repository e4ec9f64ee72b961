//! HTTP access to the activities API.
//!
//! [`ActivityService`] is the seam the controller talks to. [`HttpActivityApi`]
//! is the browser implementation on top of `gloo_net` (fetch). Status and body
//! interpretation lives in plain functions so it can be checked without a browser.

#![allow(async_fn_in_trait)]

use gloo_net::http::{Request, RequestBuilder};
use urlencoding::encode;

use crate::error::{ApiError, Result};
use crate::model::{Catalog, ErrorBody, SignupReceipt};

pub trait ActivityService {
    /// `GET /activities`
    async fn list_activities(&self) -> Result<Catalog>;

    /// `POST /activities/{activity}/signup?email={email}`
    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupReceipt>;

    /// `DELETE /activities/{activity}/signup?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpActivityApi {
    base: String,
}

impl HttpActivityApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn send(req: RequestBuilder) -> Result<(u16, String)> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        log::debug!("{} -> HTTP {} ({} bytes)", resp.url(), status, body.len());
        Ok((status, body))
    }
}

impl ActivityService for HttpActivityApi {
    async fn list_activities(&self) -> Result<Catalog> {
        let (status, body) = Self::send(Request::get(&activities_url(&self.base))).await?;
        parse_catalog(status, &body)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupReceipt> {
        let url = signup_url(&self.base, activity, email);
        let (status, body) = Self::send(Request::post(&url)).await?;
        parse_signup(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        let url = signup_url(&self.base, activity, email);
        let (status, body) = Self::send(Request::delete(&url)).await?;
        parse_removal(status, &body)
    }
}

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base.trim_end_matches('/'))
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        base.trim_end_matches('/'),
        encode(activity),
        encode(email)
    )
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

// An unreadable error body just means "no detail".
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
}

fn reject(status: u16, body: &str) -> ApiError {
    ApiError::rejected(status, error_detail(body))
}

pub fn parse_catalog(status: u16, body: &str) -> Result<Catalog> {
    if !is_success(status) {
        return Err(reject(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

pub fn parse_signup(status: u16, body: &str) -> Result<SignupReceipt> {
    if !is_success(status) {
        return Err(reject(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

/// Any 2xx counts, whatever the body says.
pub fn parse_removal(status: u16, body: &str) -> Result<()> {
    if is_success(status) {
        Ok(())
    } else {
        Err(reject(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_and_encoded() {
        assert_eq!(activities_url(""), "/activities");
        assert_eq!(activities_url("https://api.example/"), "https://api.example/activities");
        assert_eq!(
            signup_url("", "Chess Club", "a+b@x.com"),
            "/activities/Chess%20Club/signup?email=a%2Bb%40x.com"
        );
        assert_eq!(
            signup_url("http://h:8000", "Art/Studio & Co", "x@y.z"),
            "http://h:8000/activities/Art%2FStudio%20%26%20Co/signup?email=x%40y.z"
        );
    }

    #[test]
    fn catalog_parse_handles_status() {
        let ok = parse_catalog(200, r#"{"Chess Club": {"max_participants": 2, "participants": ["a@x.com"]}}"#)
            .unwrap();
        assert_eq!(ok.len(), 1);

        let err = parse_catalog(503, "Service Unavailable").unwrap_err();
        assert_eq!(err, ApiError::rejected(503, None));
    }

    #[test]
    fn catalog_parse_flags_garbage_as_malformed() {
        let err = parse_catalog(200, "<html>oops</html>").unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn signup_success_and_rejection() {
        let receipt = parse_signup(200, r#"{"message": "Signed up!"}"#).unwrap();
        assert_eq!(receipt.message, "Signed up!");

        let err = parse_signup(400, r#"{"detail": "Student is already signed up"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::rejected(400, Some("Student is already signed up".into()))
        );
    }

    #[test]
    fn signup_rejection_with_unreadable_body_has_no_detail() {
        let err = parse_signup(500, "Internal Server Error").unwrap_err();
        assert_eq!(err.user_message("An error occurred", "net"), "An error occurred");
    }

    #[test]
    fn signup_ok_without_message_is_malformed() {
        let err = parse_signup(200, r#"{"status": "ok"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn removal_ignores_success_body() {
        assert!(parse_removal(200, "").is_ok());
        assert!(parse_removal(204, "not json").is_ok());
        assert_eq!(
            parse_removal(404, r#"{"detail": "Activity not found"}"#),
            Err(ApiError::rejected(404, Some("Activity not found".into())))
        );
    }
}
