//! Course catalog cards with enroll/unenroll actions.

use std::collections::HashSet;

use leptos::prelude::*;

use enrollview_shared::{Course, CourseAction, course_action, slots_label};

use crate::components::icons::BookOpen;

#[component]
pub fn CourseList(
    courses: Signal<Vec<Course>>,
    /// IDs of courses the student is currently enrolled in; drives which
    /// action each card offers.
    enrolled_ids: Signal<HashSet<i64>>,
    is_loading: Signal<bool>,
    on_enroll: Callback<i64>,
    on_unenroll: Callback<i64>,
) -> impl IntoView {
    let is_empty = move || courses.with(|c| c.is_empty());

    view! {
        <Show when=move || is_loading.get() && is_empty()>
            <div class="text-center py-8 text-base-content/50">
                <span class="loading loading-spinner loading-md"></span> " Loading courses..."
            </div>
        </Show>
        <Show when=move || !is_loading.get() && is_empty()>
            <div class="text-center py-8 text-base-content/50">
                "No courses available."
            </div>
        </Show>

        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            <For
                each=move || courses.get()
                key=|course| course.id
                children=move |course| {
                    let course_id = course.id;
                    let is_open = course.is_open;
                    let action = {
                        let course = course.clone();
                        Signal::derive(move || {
                            enrolled_ids.with(|ids| course_action(&course, ids))
                        })
                    };

                    view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <h3 class="card-title gap-2">
                                    <BookOpen attr:class="h-5 w-5 text-primary" />
                                    {course.code.clone()}
                                </h3>
                                <p class="font-semibold">{course.title.clone()}</p>
                                <p class="text-sm text-base-content/70">
                                    "Instructor: " {course.instructor.clone()}
                                </p>
                                <div class="flex items-center gap-2 text-sm">
                                    <span class=if is_open {
                                        "badge badge-success badge-outline"
                                    } else {
                                        "badge badge-error badge-outline"
                                    }>
                                        {if is_open { "Open" } else { "Closed" }}
                                    </span>
                                    <span class="text-base-content/70">
                                        {slots_label(course.slots)}
                                    </span>
                                </div>
                                <div class="card-actions justify-end mt-2">
                                    {move || match action.get() {
                                        CourseAction::Enroll => view! {
                                            <button
                                                class="btn btn-primary btn-sm"
                                                on:click=move |_| on_enroll.run(course_id)
                                            >
                                                "Enroll"
                                            </button>
                                        }.into_any(),
                                        CourseAction::Unenroll => view! {
                                            <button
                                                class="btn btn-outline btn-error btn-sm"
                                                on:click=move |_| on_unenroll.run(course_id)
                                            >
                                                "Unenroll"
                                            </button>
                                        }.into_any(),
                                        CourseAction::Unavailable => view! {
                                            <button class="btn btn-sm" disabled=true>
                                                "Unavailable"
                                            </button>
                                        }.into_any(),
                                    }}
                                </div>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
