//! Dashboard tab configuration per role.
//!
//! The dashboard is one controller; the role only selects which tabs
//! exist. Switching tabs is pure local UI state — every switch re-triggers
//! the tab's fetch, nothing is cached.

use enrollview_shared::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    /// Course catalog with enroll/unenroll actions (student).
    Courses,
    /// The student's own grade records.
    Grades,
    /// Enrollment roster across all students (faculty).
    Roster,
    /// Grade-upload form (faculty).
    UploadGrade,
}

impl DashboardTab {
    pub fn for_role(role: Role) -> &'static [DashboardTab] {
        match role {
            Role::Student => &[DashboardTab::Courses, DashboardTab::Grades],
            Role::Faculty => &[DashboardTab::Roster, DashboardTab::UploadGrade],
        }
    }

    pub fn default_for_role(role: Role) -> DashboardTab {
        Self::for_role(role)[0]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Courses => "Courses",
            DashboardTab::Grades => "My Grades",
            DashboardTab::Roster => "Roster",
            DashboardTab::UploadGrade => "Upload Grade",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn students_see_courses_and_grades() {
        assert_eq!(
            DashboardTab::for_role(Role::Student),
            &[DashboardTab::Courses, DashboardTab::Grades]
        );
        assert_eq!(
            DashboardTab::default_for_role(Role::Student),
            DashboardTab::Courses
        );
    }

    #[test]
    fn faculty_see_roster_and_upload() {
        assert_eq!(
            DashboardTab::for_role(Role::Faculty),
            &[DashboardTab::Roster, DashboardTab::UploadGrade]
        );
        assert_eq!(
            DashboardTab::default_for_role(Role::Faculty),
            DashboardTab::Roster
        );
    }

    #[test]
    fn no_tab_is_shared_between_roles() {
        for tab in DashboardTab::for_role(Role::Student) {
            assert!(!DashboardTab::for_role(Role::Faculty).contains(tab));
        }
    }
}
