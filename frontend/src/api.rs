//! API client for the enrollment gateway.
//!
//! One generic `request` entry point drives every endpoint through the
//! typed `ApiRequest` protocol; the named operations below are thin
//! wrappers. The session store is injected, not looked up ambiently, so
//! login/logout side effects stay in one place.

use leptos::prelude::*;

use enrollview_shared::protocol::{
    ApiRequest, EnrollRequest, EnrollResponse, FacultyEnrollmentsRequest, HttpMethod,
    ListCoursesRequest, LoginRequest, LoginResponse, LogoutRequest, UnenrollRequest,
    UnenrollResponse, UploadGradeRequest, UploadGradeResponse, VerificationResult,
    VerifyAuthRequest, ViewGradesRequest,
};
use enrollview_shared::{
    AUTH_HEADER, AUTH_SCHEME, Course, EnrollmentRecord, Role, validate_grade_upload,
};

use crate::error::{ApiError, ApiResult};
use crate::request::{FetchHttpClient, HttpClient, HttpRequest};
use crate::session::{BrowserStorage, SessionBackend, SessionStore};
use crate::{log_error, log_info};

#[cfg(test)]
mod tests;

/// API base URL, fixed at build time.
pub const API_BASE: &str = match option_env!("ENROLLVIEW_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8888/api",
};

/// The client as wired in the browser.
pub type AppApi = ApiClient<FetchHttpClient, BrowserStorage>;

/// Fetches the shared client from Context.
pub fn use_api() -> AppApi {
    use_context::<AppApi>().expect("ApiClient should be provided at the app root")
}

#[derive(Debug, Clone)]
pub struct ApiClient<C: HttpClient, B: SessionBackend> {
    base_url: String,
    http: C,
    session: SessionStore<B>,
}

impl<C: HttpClient, B: SessionBackend> ApiClient<C, B> {
    pub fn new(base_url: &str, http: C, session: SessionStore<B>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            session,
        }
    }

    pub fn session(&self) -> &SessionStore<B> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sends one request and decodes the response.
    ///
    /// Always sends `Content-Type: application/json`; attaches the bearer
    /// token when the endpoint wants auth and a token is stored. Non-2xx
    /// responses become an `ApiError` carrying the server's `detail` when
    /// present. The 2xx body is trusted verbatim, no schema validation.
    pub async fn request<R: ApiRequest>(&self, payload: &R) -> ApiResult<R::Response> {
        let url = self.url(R::PATH);
        let mut req =
            HttpRequest::new(&url, R::METHOD).with_header("Content-Type", "application/json");

        if R::REQUIRES_AUTH {
            if let Some(token) = self.session.token() {
                req = req.with_header(AUTH_HEADER, &format!("{} {}", AUTH_SCHEME, token));
            }
        }

        if R::METHOD == HttpMethod::Post && R::HAS_BODY {
            let body =
                serde_json::to_string(payload).map_err(|e| ApiError::parse(e.to_string()))?;
            req = req.with_body(body);
        }

        let resp = self.http.send(req).await?;
        if !resp.ok() {
            let err = ApiError::from_response(resp.status, &resp.body);
            log_error!("[api] {} {} failed: {}", R::METHOD.as_str(), url, err);
            return Err(err);
        }
        resp.json::<R::Response>()
    }

    // =========================================================
    // Named operations
    // =========================================================

    /// Authenticates and persists the session (token, role, username) as
    /// one atomic set. A failed login, or a response with an unrecognized
    /// role, persists nothing.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let resp = self
            .request(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;

        let role = Role::parse(&resp.role)
            .ok_or_else(|| ApiError::parse(format!("unrecognized role '{}'", resp.role)))?;
        self.session.set(&resp.access_token, role, username);
        log_info!("[api] login succeeded for {} ({})", username, role);
        Ok(resp)
    }

    /// Best-effort server-side revoke; the local session is cleared no
    /// matter what the server says.
    pub async fn logout(&self) {
        if let Err(e) = self.request(&LogoutRequest).await {
            log_error!("[api] logout revoke failed (clearing locally anyway): {}", e);
        }
        self.session.clear();
    }

    /// Asks the server whether the stored token is still accepted. Only
    /// the status matters; the payload is echoed user data.
    pub async fn verify_auth(&self) -> ApiResult<VerificationResult> {
        self.request(&VerifyAuthRequest).await
    }

    pub async fn get_courses(&self) -> ApiResult<Vec<Course>> {
        self.request(&ListCoursesRequest).await
    }

    pub async fn enroll(&self, course_id: i64) -> ApiResult<EnrollResponse> {
        self.request(&EnrollRequest { course_id }).await
    }

    pub async fn unenroll(&self, course_id: i64) -> ApiResult<UnenrollResponse> {
        self.request(&UnenrollRequest { course_id }).await
    }

    pub async fn get_grades(&self) -> ApiResult<Vec<EnrollmentRecord>> {
        self.request(&ViewGradesRequest).await
    }

    /// Enrollment roster across all students (faculty only).
    pub async fn get_faculty_enrollments(&self) -> ApiResult<Vec<EnrollmentRecord>> {
        self.request(&FacultyEnrollmentsRequest).await
    }

    /// Validates client-side before anything touches the network.
    pub async fn upload_grade(
        &self,
        enrollment_id: i64,
        grade: f64,
    ) -> ApiResult<UploadGradeResponse> {
        validate_grade_upload(enrollment_id, grade).map_err(ApiError::validation)?;
        self.request(&UploadGradeRequest {
            enrollment_id,
            grade,
        })
        .await
    }
}
