use serde_json::json;

use enrollview_shared::protocol::HttpMethod;
use enrollview_shared::{AUTH_HEADER, Role};

use super::*;
use crate::error::ApiErrorKind;
use crate::request::MockHttpClient;
use crate::session::MemoryStorage;

const BASE: &str = "http://test/api";

fn test_api() -> (ApiClient<MockHttpClient, MemoryStorage>, MockHttpClient) {
    let http = MockHttpClient::new();
    let store = SessionStore::new(MemoryStorage::new());
    (ApiClient::new(BASE, http.clone(), store), http)
}

fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

// =========================================================
// Login / logout
// =========================================================

#[tokio::test]
async fn login_persists_token_role_and_username_together() {
    let (api, http) = test_api();
    http.mock_response(
        HttpMethod::Post,
        &url("/login"),
        200,
        json!({"access_token": "t1", "role": "student"}),
    );

    let resp = api.login("stu1", "x").await.unwrap();
    assert_eq!(resp.access_token, "t1");

    let session = api.session().get().unwrap();
    assert_eq!(session.token, "t1");
    assert_eq!(session.role, Role::Student);
    assert_eq!(session.username, "stu1");
}

#[tokio::test]
async fn login_sends_no_auth_header_and_posts_credentials() {
    let (api, http) = test_api();
    // A stale token in storage must not leak onto the login request.
    api.session().set("stale", Role::Student, "old");
    http.mock_response(
        HttpMethod::Post,
        &url("/login"),
        200,
        json!({"access_token": "t2", "role": "student"}),
    );

    api.login("stu1", "x").await.unwrap();

    let requests = http.requests.borrow();
    let req = &requests[0];
    assert!(req.header(AUTH_HEADER).is_none());
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(
        req.body.as_deref(),
        Some(r#"{"username":"stu1","password":"x"}"#)
    );
}

#[tokio::test]
async fn failed_login_leaves_prior_session_untouched() {
    let (api, http) = test_api();
    api.session().set("t0", Role::Faculty, "prof1");
    http.mock_response(
        HttpMethod::Post,
        &url("/login"),
        401,
        json!({"detail": "Invalid credentials or token."}),
    );

    let err = api.login("stu1", "wrong").await.unwrap_err();
    assert_eq!(err.message(), "Invalid credentials or token.");
    assert_eq!(err.kind(), ApiErrorKind::Unauthorized);

    let prior = api.session().get().unwrap();
    assert_eq!(prior.token, "t0");
    assert_eq!(prior.username, "prof1");
}

#[tokio::test]
async fn login_with_unrecognized_role_persists_nothing() {
    let (api, http) = test_api();
    http.mock_response(
        HttpMethod::Post,
        &url("/login"),
        200,
        json!({"access_token": "t1", "role": "superuser"}),
    );

    let err = api.login("root", "x").await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Parse);
    assert!(api.session().get().is_none());
}

#[tokio::test]
async fn logout_clears_session_even_when_revoke_fails() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Student, "stu1");
    http.mock_response(
        HttpMethod::Post,
        &url("/logout"),
        500,
        json!({"detail": "boom"}),
    );

    api.logout().await;
    assert!(api.session().get().is_none());

    // Revoke was attempted with the token, and with no body.
    let requests = http.requests.borrow();
    assert_eq!(requests[0].header(AUTH_HEADER), Some("Bearer t1"));
    assert!(requests[0].body.is_none());
}

// =========================================================
// Bearer-token handling
// =========================================================

#[tokio::test]
async fn authenticated_request_carries_bearer_token() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Student, "stu1");
    http.mock_response(HttpMethod::Get, &url("/courses"), 200, json!([]));

    api.get_courses().await.unwrap();

    let requests = http.requests.borrow();
    assert_eq!(requests[0].header(AUTH_HEADER), Some("Bearer t1"));
}

#[tokio::test]
async fn request_without_stored_token_has_no_auth_header() {
    let (api, http) = test_api();
    http.mock_response(
        HttpMethod::Get,
        &url("/courses"),
        401,
        json!({"detail": "Authentication required."}),
    );

    let err = api.get_courses().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Unauthorized);

    let requests = http.requests.borrow();
    assert!(requests[0].header(AUTH_HEADER).is_none());
}

// =========================================================
// Error normalization
// =========================================================

#[tokio::test]
async fn non_success_without_detail_uses_generic_message() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Student, "stu1");
    http.mock_response(HttpMethod::Get, &url("/grades"), 503, json!({}));

    let err = api.get_grades().await.unwrap_err();
    assert_eq!(err.message(), "HTTP error, status 503");
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn transport_failure_surfaces_raw_message() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Student, "stu1");
    http.mock_failure(HttpMethod::Get, &url("/courses"), "Failed to fetch");

    let err = api.get_courses().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Network);
    assert_eq!(err.message(), "Failed to fetch");
}

// =========================================================
// Enrollment & grades
// =========================================================

#[tokio::test]
async fn enroll_posts_course_id_and_returns_message() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Student, "stu1");
    http.mock_response(
        HttpMethod::Post,
        &url("/enroll"),
        200,
        json!({"success": true, "message": "Enrolled in CS101", "enrollment_id": 7}),
    );

    let resp = api.enroll(1).await.unwrap();
    assert_eq!(resp.message, "Enrolled in CS101");

    let requests = http.requests.borrow();
    assert_eq!(requests[0].body.as_deref(), Some(r#"{"course_id":1}"#));
}

#[tokio::test]
async fn unenroll_reports_success_flag() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Student, "stu1");
    http.mock_response(
        HttpMethod::Post,
        &url("/unenroll"),
        200,
        json!({"success": true, "message": "Dropped CS101"}),
    );

    let resp = api.unenroll(1).await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.message, "Dropped CS101");
}

#[tokio::test]
async fn get_grades_parses_records() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Student, "stu1");
    http.mock_response(
        HttpMethod::Get,
        &url("/grades"),
        200,
        json!([{
            "enrollment_id": 7,
            "course_id": 1,
            "course_code": "CS101",
            "course_title": "Intro",
            "student_username": "stu1",
            "grade": 0.0,
            "status": "ENROLLED"
        }]),
    );

    let records = api.get_grades().await.unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].is_enrolled());
    assert_eq!(records[0].grade_label(), "N/A");
}

#[tokio::test]
async fn faculty_roster_uses_its_own_endpoint() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Faculty, "prof1");
    http.mock_response(HttpMethod::Get, &url("/faculty/enrollments"), 200, json!([]));

    api.get_faculty_enrollments().await.unwrap();
    assert_eq!(http.request_count(), 1);
}

// =========================================================
// Grade-upload validation (no network on rejection)
// =========================================================

#[tokio::test]
async fn upload_grade_out_of_range_never_hits_network() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Faculty, "prof1");

    let err = api.upload_grade(7, 4.5).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(http.request_count(), 0);
}

#[tokio::test]
async fn upload_grade_nonpositive_id_never_hits_network() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Faculty, "prof1");

    let err = api.upload_grade(0, 3.0).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(http.request_count(), 0);
}

#[tokio::test]
async fn upload_grade_valid_posts_payload() {
    let (api, http) = test_api();
    api.session().set("t1", Role::Faculty, "prof1");
    http.mock_response(
        HttpMethod::Post,
        &url("/upload_grade"),
        200,
        json!({"message": "Grade recorded", "student_username": "stu1", "grade": 3.5}),
    );

    let resp = api.upload_grade(7, 3.5).await.unwrap();
    assert_eq!(resp.student_username, "stu1");
    assert_eq!(resp.grade, 3.5);

    let requests = http.requests.borrow();
    assert_eq!(
        requests[0].body.as_deref(),
        Some(r#"{"enrollment_id":7,"grade":3.5}"#)
    );
}
