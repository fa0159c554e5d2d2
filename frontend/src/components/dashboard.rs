//! Dashboard page. One controller for both roles; the session's role only
//! selects which tabs exist and which fetches they trigger.

mod tabs;

pub use tabs::DashboardTab;

use leptos::prelude::*;
use leptos::task::spawn_local;

use enrollview_shared::{Course, EnrollmentRecord, enrolled_course_ids};

use crate::api::use_api;
use crate::auth::{AuthOutcome, require_auth, use_auth};
use crate::components::course_list::CourseList;
use crate::components::grade_table::GradeTable;
use crate::components::grade_upload::GradeUploadForm;
use crate::components::icons::{GraduationCap, LogOut, RefreshCw};
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let navigate = use_navigate();

    // True until the stored token has been re-verified with the server.
    let (is_checking, set_is_checking) = signal(true);
    let (active_tab, set_active_tab) = signal(Option::<DashboardTab>::None);
    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (grades, set_grades) = signal(Vec::<EnrollmentRecord>::new());
    let (roster, set_roster) = signal(Vec::<EnrollmentRecord>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let session = move || auth.state.get().session;
    let role = move || session().map(|s| s.role);

    // Every activation re-fetches; nothing is cached across tab switches.
    // The student course tab also needs the grade records, they carry the
    // enrolled-course ids that pick each card's action.
    let load_tab = {
        let api = api.clone();
        move |tab: DashboardTab| {
            let api = api.clone();
            set_is_loading.set(true);
            spawn_local(async move {
                match tab {
                    DashboardTab::Courses => {
                        let fetched = api.get_courses().await;
                        match fetched {
                            Ok(data) => set_courses.set(data),
                            Err(e) => set_notification
                                .set(Some((format!("Failed to load courses: {}", e), true))),
                        }
                        match api.get_grades().await {
                            Ok(data) => set_grades.set(data),
                            Err(e) => set_notification
                                .set(Some((format!("Failed to load enrollments: {}", e), true))),
                        }
                    }
                    DashboardTab::Grades => match api.get_grades().await {
                        Ok(data) => set_grades.set(data),
                        Err(e) => set_notification
                            .set(Some((format!("Failed to load grades: {}", e), true))),
                    },
                    DashboardTab::Roster => match api.get_faculty_enrollments().await {
                        Ok(data) => set_roster.set(data),
                        Err(e) => set_notification
                            .set(Some((format!("Failed to load roster: {}", e), true))),
                    },
                    DashboardTab::UploadGrade => {}
                }
                set_is_loading.set(false);
            });
        }
    };

    // Page-load guard: verify the stored token before rendering anything
    // protected. Failure clears the reactive state too, which makes the
    // router bounce to login.
    Effect::new({
        let api = api.clone();
        let load_tab = load_tab.clone();
        move |_| {
            let api = api.clone();
            let load_tab = load_tab.clone();
            spawn_local(async move {
                match require_auth(&api).await {
                    AuthOutcome::Authenticated => {
                        if let Some(session) = api.session().get() {
                            let tab = DashboardTab::default_for_role(session.role);
                            set_active_tab.set(Some(tab));
                            load_tab(tab);
                        }
                        set_is_checking.set(false);
                    }
                    AuthOutcome::MissingToken => {
                        auth.set_state.update(|state| {
                            state.session = None;
                            state.is_loading = false;
                        });
                    }
                    AuthOutcome::Rejected(msg) => {
                        // The redirect unmounts this page, so the message
                        // rides on the auth context instead of the toast.
                        auth.fail_session(msg);
                    }
                }
            });
        }
    });

    let switch_tab = {
        let load_tab = load_tab.clone();
        move |tab: DashboardTab| {
            set_active_tab.set(Some(tab));
            load_tab(tab);
        }
    };

    let refresh = {
        let load_tab = load_tab.clone();
        move |_| {
            if let Some(tab) = active_tab.get_untracked() {
                load_tab(tab);
            }
        }
    };

    // Enroll/unenroll mutate on the server, so the lists are re-fetched
    // rather than patched locally.
    let handle_enroll = {
        let api = api.clone();
        let load_tab = load_tab.clone();
        Callback::new(move |course_id: i64| {
            let api = api.clone();
            let load_tab = load_tab.clone();
            spawn_local(async move {
                match api.enroll(course_id).await {
                    Ok(resp) => {
                        set_notification.set(Some((resp.message, false)));
                        load_tab(DashboardTab::Courses);
                    }
                    Err(e) => {
                        set_notification.set(Some((format!("Enrollment failed: {}", e), true)));
                    }
                }
            });
        })
    };

    let handle_unenroll = {
        let api = api.clone();
        let load_tab = load_tab.clone();
        Callback::new(move |course_id: i64| {
            let api = api.clone();
            let load_tab = load_tab.clone();
            spawn_local(async move {
                match api.unenroll(course_id).await {
                    Ok(resp) => {
                        set_notification.set(Some((resp.message, false)));
                        load_tab(DashboardTab::Courses);
                    }
                    Err(e) => {
                        set_notification.set(Some((format!("Unenroll failed: {}", e), true)));
                    }
                }
            });
        })
    };

    let handle_uploaded = {
        let load_tab = load_tab.clone();
        Callback::new(move |_: ()| {
            load_tab(DashboardTab::Roster);
        })
    };

    let on_logout = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |_| {
            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                api.logout().await;
                auth.set_state.update(|state| {
                    state.session = None;
                    state.is_loading = false;
                });
                navigate(AppRoute::Login);
            });
        }
    };

    // Clear the notification after 3 seconds.
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let enrolled_ids =
        Signal::derive(move || grades.with(|records| enrolled_course_ids(records)));
    let header_label = move || {
        session()
            .map(|s| format!("{} ({})", s.username, s.role))
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-6xl mx-auto space-y-6">
                <Show when=move || notification.get().is_some()>
                    <div class="toast toast-top toast-end z-50">
                        <div class=move || {
                            match notification.get() {
                                Some((_, true)) => "alert alert-error shadow-lg",
                                _ => "alert alert-success shadow-lg",
                            }
                        }>
                            <span>{move || notification.get().map(|n| n.0).unwrap_or_default()}</span>
                        </div>
                    </div>
                </Show>

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <GraduationCap attr:class="text-primary h-6 w-6" />
                        <a class="btn btn-ghost text-xl">"Course Enrollment"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            {header_label}
                        </span>
                    </div>
                    <div class="flex-none gap-2">
                        <button on:click=refresh.clone() disabled=move || is_loading.get() class="btn btn-ghost btn-circle">
                            <RefreshCw attr:class=move || if is_loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                        </button>
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Logout"
                        </button>
                    </div>
                </div>

                <Show
                    when=move || !is_checking.get()
                    fallback=|| view! {
                        <div class="flex items-center justify-center py-24">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                >
                    {
                        let switch_tab = switch_tab.clone();
                        view! {
                            <div role="tablist" class="tabs tabs-boxed bg-base-100 shadow">
                                {move || {
                                    let switch_tab = switch_tab.clone();
                                    role()
                                        .map(|role| {
                                            DashboardTab::for_role(role)
                                                .iter()
                                                .map(|&tab| {
                                                    let switch_tab = switch_tab.clone();
                                                    view! {
                                                        <a
                                                            role="tab"
                                                            class=move || {
                                                                if active_tab.get() == Some(tab) {
                                                                    "tab tab-active"
                                                                } else {
                                                                    "tab"
                                                                }
                                                            }
                                                            on:click=move |_| switch_tab(tab)
                                                        >
                                                            {tab.label()}
                                                        </a>
                                                    }
                                                })
                                                .collect_view()
                                        })
                                }}
                            </div>

                            {move || match active_tab.get() {
                                Some(DashboardTab::Courses) => view! {
                                    <CourseList
                                        courses=Signal::from(courses)
                                        enrolled_ids=enrolled_ids
                                        is_loading=Signal::from(is_loading)
                                        on_enroll=handle_enroll
                                        on_unenroll=handle_unenroll
                                    />
                                }.into_any(),
                                Some(DashboardTab::Grades) => view! {
                                    <div class="card bg-base-100 shadow-xl">
                                        <div class="card-body p-0">
                                            <h3 class="card-title p-6 pb-2">"My Grades"</h3>
                                            <GradeTable
                                                records=Signal::from(grades)
                                                is_loading=Signal::from(is_loading)
                                            />
                                        </div>
                                    </div>
                                }.into_any(),
                                Some(DashboardTab::Roster) => view! {
                                    <div class="card bg-base-100 shadow-xl">
                                        <div class="card-body p-0">
                                            <h3 class="card-title p-6 pb-2">"Enrollment Roster"</h3>
                                            <GradeTable
                                                records=Signal::from(roster)
                                                is_loading=Signal::from(is_loading)
                                                show_student=true
                                            />
                                        </div>
                                    </div>
                                }.into_any(),
                                Some(DashboardTab::UploadGrade) => view! {
                                    <GradeUploadForm on_uploaded=handle_uploaded />
                                }.into_any(),
                                None => view! {
                                    <div class="text-center py-8 text-base-content/50">
                                        "No session."
                                    </div>
                                }.into_any(),
                            }}
                        }
                    }
                </Show>
            </div>
        </div>
    }
}
