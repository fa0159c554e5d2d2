//! Wire protocol: one request type per REST endpoint.
//!
//! The `ApiRequest` trait binds a request body to its response type, path,
//! method and auth requirement, so the API client has a single generic
//! `request` entry point instead of per-endpoint plumbing.

use serde::{Deserialize, Serialize};

use crate::models::{Course, EnrollmentRecord};

/// HTTP methods used by the gateway API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: serde::de::DeserializeOwned;
    /// Path suffix appended to the API base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the bearer token is attached. Only login opts out.
    const REQUIRES_AUTH: bool = true;
    /// Whether the serialized payload is sent as the body (POST only).
    const HAS_BODY: bool = true;
}

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Kept as a raw string: an unrecognized role must not fail the parse,
    /// it is handled (as "unauthenticated") one level up.
    pub role: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;
}

/// Best-effort server-side token revoke. The body and the response are
/// both empty; the local session is cleared regardless of the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Response = serde_json::Value;
    const PATH: &'static str = "/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = false;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAuthRequest;

/// Only the HTTP status of /verify_auth matters to the guard; the payload
/// is echoed user data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub valid: bool,
    pub username: String,
    pub role: String,
}

impl ApiRequest for VerifyAuthRequest {
    type Response = VerificationResult;
    const PATH: &'static str = "/verify_auth";
    const METHOD: HttpMethod = HttpMethod::Get;
}

// =========================================================
// Courses & enrollment
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCoursesRequest;

impl ApiRequest for ListCoursesRequest {
    type Response = Vec<Course>;
    const PATH: &'static str = "/courses";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub course_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollResponse {
    #[serde(default)]
    pub message: String,
}

impl ApiRequest for EnrollRequest {
    type Response = EnrollResponse;
    const PATH: &'static str = "/enroll";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnenrollRequest {
    pub course_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnenrollResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ApiRequest for UnenrollRequest {
    type Response = UnenrollResponse;
    const PATH: &'static str = "/unenroll";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Grades
// =========================================================

/// The caller's own grade records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewGradesRequest;

impl ApiRequest for ViewGradesRequest {
    type Response = Vec<EnrollmentRecord>;
    const PATH: &'static str = "/grades";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Enrollment roster across all students (faculty only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyEnrollmentsRequest;

impl ApiRequest for FacultyEnrollmentsRequest {
    type Response = Vec<EnrollmentRecord>;
    const PATH: &'static str = "/faculty/enrollments";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadGradeRequest {
    pub enrollment_id: i64,
    pub grade: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadGradeResponse {
    #[serde(default)]
    pub message: String,
    pub student_username: String,
    pub grade: f64,
}

impl ApiRequest for UploadGradeRequest {
    type Response = UploadGradeResponse;
    const PATH: &'static str = "/upload_grade";
    const METHOD: HttpMethod = HttpMethod::Post;
}
