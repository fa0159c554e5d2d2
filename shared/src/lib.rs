pub mod models;
pub mod protocol;

pub use models::{
    Course, CourseAction, EnrollmentRecord, Role, Session, course_action, enrolled_course_ids,
    grade_label, slots_label, validate_grade_upload,
};

// =========================================================
// Constants
// =========================================================

/// localStorage keys for the persisted session. All three are written on
/// login and removed on logout; a session is only valid when all three are
/// present.
pub const STORAGE_TOKEN_KEY: &str = "auth_token";
pub const STORAGE_ROLE_KEY: &str = "user_role";
pub const STORAGE_USERNAME_KEY: &str = "username";

pub const AUTH_HEADER: &str = "Authorization";
pub const AUTH_SCHEME: &str = "Bearer";

/// Valid grade range accepted by the grade-upload form.
pub const GRADE_MIN: f64 = 0.0;
pub const GRADE_MAX: f64 = 4.0;
