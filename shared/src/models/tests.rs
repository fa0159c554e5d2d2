use super::*;

fn course(id: i64, slots: u32, is_open: bool) -> Course {
    Course {
        id,
        code: format!("CS{}", 100 + id),
        title: "Test Course".to_string(),
        instructor: "prof1".to_string(),
        slots,
        is_open,
    }
}

fn record(course_id: i64, status: &str, grade: f64) -> EnrollmentRecord {
    EnrollmentRecord {
        enrollment_id: course_id * 10,
        course_id,
        course_code: format!("CS{}", 100 + course_id),
        course_title: "Test Course".to_string(),
        student_username: "stu1".to_string(),
        grade,
        status: status.to_string(),
    }
}

// =========================================================
// Session invariant
// =========================================================

#[test]
fn session_requires_all_three_parts() {
    let full = Session::from_parts(
        Some("t1".into()),
        Some("student".into()),
        Some("stu1".into()),
    );
    assert_eq!(
        full,
        Some(Session {
            token: "t1".into(),
            role: Role::Student,
            username: "stu1".into(),
        })
    );

    assert!(Session::from_parts(None, Some("student".into()), Some("stu1".into())).is_none());
    assert!(Session::from_parts(Some("t1".into()), None, Some("stu1".into())).is_none());
    assert!(Session::from_parts(Some("t1".into()), Some("student".into()), None).is_none());
    assert!(Session::from_parts(Some(String::new()), Some("student".into()), Some("stu1".into())).is_none());
}

#[test]
fn unrecognized_role_is_not_a_session() {
    let s = Session::from_parts(Some("t1".into()), Some("admin".into()), Some("root".into()));
    assert!(s.is_none());
}

#[test]
fn role_parse_round_trip() {
    assert_eq!(Role::parse("student"), Some(Role::Student));
    assert_eq!(Role::parse("faculty"), Some(Role::Faculty));
    assert_eq!(Role::parse("Student"), None);
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::Faculty.as_str(), "faculty");
}

// =========================================================
// Course actions
// =========================================================

#[test]
fn zero_slots_never_enrollable_even_if_open() {
    let c = course(1, 0, true);
    assert!(!c.enrollable());
    assert_eq!(course_action(&c, &HashSet::new()), CourseAction::Unavailable);
}

#[test]
fn closed_course_with_slots_is_not_enrollable() {
    let c = course(2, 5, false);
    assert_eq!(course_action(&c, &HashSet::new()), CourseAction::Unavailable);
}

#[test]
fn open_course_with_slots_shows_enroll() {
    let c = course(3, 5, true);
    assert_eq!(course_action(&c, &HashSet::new()), CourseAction::Enroll);
}

#[test]
fn enrolled_course_shows_unenroll_never_enroll() {
    let c = course(4, 5, true);
    let enrolled: HashSet<i64> = [4].into_iter().collect();
    assert_eq!(course_action(&c, &enrolled), CourseAction::Unenroll);

    // Even a full/closed course shows Unenroll when already enrolled.
    let full = course(5, 0, false);
    let enrolled: HashSet<i64> = [5].into_iter().collect();
    assert_eq!(course_action(&full, &enrolled), CourseAction::Unenroll);
}

#[test]
fn enrolled_ids_only_counts_enrolled_status() {
    let records = vec![
        record(1, status::ENROLLED, 0.0),
        record(2, status::COMPLETED, 3.7),
        record(3, "DROPPED", 0.0),
        record(4, status::ENROLLED, 0.0),
    ];
    let ids = enrolled_course_ids(&records);
    assert_eq!(ids, [1, 4].into_iter().collect());
}

// =========================================================
// Labels
// =========================================================

#[test]
fn slots_label_pluralizes() {
    assert_eq!(slots_label(0), "0 slots available");
    assert_eq!(slots_label(1), "1 slot available");
    assert_eq!(slots_label(12), "12 slots available");
}

#[test]
fn grade_label_uses_zero_sentinel() {
    assert_eq!(grade_label(0.0), "N/A");
    assert_eq!(grade_label(3.5), "3.50");
    assert_eq!(record(1, status::COMPLETED, 4.0).grade_label(), "4.00");
    assert!(!record(1, status::ENROLLED, 0.0).has_grade());
}

// =========================================================
// Grade-upload validation
// =========================================================

#[test]
fn grade_upload_bounds() {
    assert!(validate_grade_upload(1, 0.0).is_ok());
    assert!(validate_grade_upload(1, 4.0).is_ok());
    assert!(validate_grade_upload(1, 2.75).is_ok());

    assert!(validate_grade_upload(1, 4.5).is_err());
    assert!(validate_grade_upload(1, -0.1).is_err());
    assert!(validate_grade_upload(1, f64::NAN).is_err());
    assert!(validate_grade_upload(0, 3.0).is_err());
    assert!(validate_grade_upload(-7, 3.0).is_err());
}

// =========================================================
// Wire shapes
// =========================================================

#[test]
fn course_deserializes_without_instructor() {
    let c: Course =
        serde_json::from_str(r#"{"id":1,"code":"CS101","title":"Intro","slots":0,"is_open":true}"#)
            .unwrap();
    assert_eq!(c.instructor, "");
    assert_eq!(c.slots, 0);
    assert!(c.is_open);
    assert!(!c.enrollable());
}

#[test]
fn enrollment_record_defaults_grade_to_sentinel() {
    let r: EnrollmentRecord = serde_json::from_str(
        r#"{"enrollment_id":9,"course_id":1,"course_code":"CS101","course_title":"Intro","status":"ENROLLED"}"#,
    )
    .unwrap();
    assert!(!r.has_grade());
    assert_eq!(r.grade_label(), "N/A");
    assert!(r.is_enrolled());
}
