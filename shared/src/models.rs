//! Domain models and client-side business rules.
//!
//! Everything here is pure data and pure functions: no DOM, no storage, no
//! network. The frontend layers render these; tests exercise them on the
//! host.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GRADE_MAX, GRADE_MIN};

#[cfg(test)]
mod tests;

// =========================================================
// Role & Session
// =========================================================

/// Client-visible user classification. Gates which dashboard layout and
/// actions are exposed; the server enforces the real permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
}

impl Role {
    /// Strict parse: anything other than the two recognized roles is
    /// rejected, which downstream treats as "not authenticated".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Role::Student),
            "faculty" => Some(Role::Faculty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated session as the client sees it.
///
/// Invariant: token, role and username exist together or not at all. The
/// only way to build a `Session` from persisted parts is `from_parts`,
/// which returns `None` unless every part is present and the role parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub username: String,
}

impl Session {
    pub fn from_parts(
        token: Option<String>,
        role: Option<String>,
        username: Option<String>,
    ) -> Option<Self> {
        let token = token?;
        let role = Role::parse(&role?)?;
        let username = username?;
        if token.is_empty() || username.is_empty() {
            return None;
        }
        Some(Session {
            token,
            role,
            username,
        })
    }
}

// =========================================================
// Courses
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub instructor: String,
    pub slots: u32,
    pub is_open: bool,
}

impl Course {
    /// A course can be enrolled in only when it is open AND has free
    /// slots. Neither condition alone is enough.
    pub fn enrollable(&self) -> bool {
        self.is_open && self.slots > 0
    }
}

/// Action button a course card should expose for the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAction {
    Enroll,
    Unenroll,
    /// Closed or full, or the viewer cannot act on it.
    Unavailable,
}

/// Derives the per-course action by cross-referencing the course id
/// against the set of currently ENROLLED course ids.
pub fn course_action(course: &Course, enrolled: &HashSet<i64>) -> CourseAction {
    if enrolled.contains(&course.id) {
        CourseAction::Unenroll
    } else if course.enrollable() {
        CourseAction::Enroll
    } else {
        CourseAction::Unavailable
    }
}

/// "3 slots available" / "1 slot available".
pub fn slots_label(slots: u32) -> String {
    if slots == 1 {
        "1 slot available".to_string()
    } else {
        format!("{} slots available", slots)
    }
}

// =========================================================
// Enrollment records
// =========================================================

/// Known enrollment status values. The set is open on the wire, so the
/// record keeps a plain string and these are just the values the client
/// interprets.
pub mod status {
    pub const ENROLLED: &str = "ENROLLED";
    pub const COMPLETED: &str = "COMPLETED";
}

/// Join of a student, a course, and a grade/status outcome. Read-only on
/// the client: mutations go through enroll/unenroll/upload-grade intents
/// followed by a re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub enrollment_id: i64,
    pub course_id: i64,
    pub course_code: String,
    pub course_title: String,
    #[serde(default)]
    pub student_username: String,
    /// 0.0 is the "not assigned" sentinel.
    #[serde(default)]
    pub grade: f64,
    pub status: String,
}

impl EnrollmentRecord {
    pub fn is_enrolled(&self) -> bool {
        self.status == status::ENROLLED
    }

    pub fn has_grade(&self) -> bool {
        self.grade > 0.0
    }

    pub fn grade_label(&self) -> String {
        grade_label(self.grade)
    }
}

/// Course ids of the records that are currently ENROLLED.
pub fn enrolled_course_ids(records: &[EnrollmentRecord]) -> HashSet<i64> {
    records
        .iter()
        .filter(|r| r.is_enrolled())
        .map(|r| r.course_id)
        .collect()
}

/// "3.50" for an assigned grade, "N/A" for the zero sentinel.
pub fn grade_label(grade: f64) -> String {
    if grade > 0.0 {
        format!("{:.2}", grade)
    } else {
        "N/A".to_string()
    }
}

// =========================================================
// Grade-upload validation
// =========================================================

/// Client-side precondition for the grade-upload form. Rejections here
/// never reach the network.
pub fn validate_grade_upload(enrollment_id: i64, grade: f64) -> Result<(), String> {
    if enrollment_id <= 0 {
        return Err("Enrollment ID must be a positive number.".to_string());
    }
    if !grade.is_finite() || !(GRADE_MIN..=GRADE_MAX).contains(&grade) {
        return Err(format!(
            "Grade must be between {:.1} and {:.1}.",
            GRADE_MIN, GRADE_MAX
        ));
    }
    Ok(())
}
