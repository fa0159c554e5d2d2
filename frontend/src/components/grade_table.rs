//! Enrollment/grade table, shared by the student grades view and the
//! faculty roster.

use leptos::prelude::*;

use enrollview_shared::EnrollmentRecord;

#[component]
pub fn GradeTable(
    records: Signal<Vec<EnrollmentRecord>>,
    is_loading: Signal<bool>,
    /// Faculty see whose record each row is; students only see their own.
    #[prop(default = false)]
    show_student: bool,
) -> impl IntoView {
    let is_empty = move || records.with(|r| r.is_empty());
    let colspan = if show_student { "5" } else { "4" };

    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Enrollment ID"</th>
                        <Show when=move || show_student>
                            <th>"Student"</th>
                        </Show>
                        <th>"Course"</th>
                        <th>"Status"</th>
                        <th>"Grade"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || is_loading.get() && is_empty()>
                        <tr>
                            <td colspan=colspan class="text-center py-8 text-base-content/50">
                                <span class="loading loading-spinner loading-md"></span> " Loading..."
                            </td>
                        </tr>
                    </Show>
                    <Show when=move || !is_loading.get() && is_empty()>
                        <tr>
                            <td colspan=colspan class="text-center py-8 text-base-content/50">
                                "No grades found."
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || records.get()
                        key=|record| record.enrollment_id
                        children=move |record| {
                            let is_enrolled = record.is_enrolled();
                            let student_username = record.student_username.clone();
                            view! {
                                <tr>
                                    <td class="font-mono text-sm">{record.enrollment_id}</td>
                                    <Show when=move || show_student>
                                        <td>{student_username.clone()}</td>
                                    </Show>
                                    <td class="font-semibold">{record.course_code.clone()}</td>
                                    <td>
                                        <span class=if is_enrolled {
                                            "badge badge-info badge-outline"
                                        } else {
                                            "badge badge-neutral badge-outline"
                                        }>
                                            {record.status.clone()}
                                        </span>
                                    </td>
                                    <td class="font-mono">{record.grade_label()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
