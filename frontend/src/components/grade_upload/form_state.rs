//! Grade-upload form state.
//!
//! Raw input strings and their conversion into a validated request. Kept
//! free of signals and DOM so the whole rejection table is testable on the
//! host.

use enrollview_shared::protocol::UploadGradeRequest;
use enrollview_shared::validate_grade_upload;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeForm {
    pub enrollment_id: String,
    pub grade: String,
}

impl GradeForm {
    pub fn new(enrollment_id: String, grade: String) -> Self {
        Self {
            enrollment_id,
            grade,
        }
    }

    /// Parses and validates the raw inputs. Any rejection here means no
    /// request is ever built, so nothing can leave the client.
    pub fn parse(&self) -> Result<UploadGradeRequest, String> {
        let enrollment_id = self
            .enrollment_id
            .trim()
            .parse::<i64>()
            .map_err(|_| "Enrollment ID must be a positive number.".to_string())?;
        let grade = self
            .grade
            .trim()
            .parse::<f64>()
            .map_err(|_| "Grade must be a number between 0.0 and 4.0.".to_string())?;

        validate_grade_upload(enrollment_id, grade)?;

        Ok(UploadGradeRequest {
            enrollment_id,
            grade,
        })
    }
}
