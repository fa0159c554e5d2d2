use super::*;

#[test]
fn path_parsing_round_trips() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);

    assert_eq!(AppRoute::Dashboard.to_path(), "/dashboard");
    assert_eq!(AppRoute::Login.to_path(), "/");
}

#[test]
fn only_the_dashboard_is_guarded() {
    assert!(AppRoute::Dashboard.requires_auth());
    assert!(!AppRoute::Login.requires_auth());
    assert!(!AppRoute::NotFound.requires_auth());
}

#[test]
fn authenticated_users_leave_the_login_page() {
    assert!(AppRoute::Login.should_redirect_when_authenticated());
    assert!(!AppRoute::Dashboard.should_redirect_when_authenticated());
}

#[test]
fn redirect_targets() {
    assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
    assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Dashboard);
}
