//! Faculty grade-upload form.

mod form_state;

pub use form_state::GradeForm;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::UploadCloud;

#[component]
pub fn GradeUploadForm(
    /// Fired after a successful upload so the parent can re-fetch the
    /// roster.
    on_uploaded: Callback<()>,
) -> impl IntoView {
    let api = use_api();

    let (enrollment_id, set_enrollment_id) = signal(String::new());
    let (grade, set_grade) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);

        // All rejection happens here; an invalid form never leaves the
        // client.
        let form = GradeForm::new(enrollment_id.get(), grade.get());
        let req = match form.parse() {
            Ok(req) => req,
            Err(msg) => {
                set_error_msg.set(Some(msg));
                return;
            }
        };

        set_is_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.upload_grade(req.enrollment_id, req.grade).await {
                Ok(resp) => {
                    set_success_msg.set(Some(format!(
                        "Grade uploaded! Student: {}, Grade: {}",
                        resp.student_username, resp.grade
                    )));
                    set_enrollment_id.set(String::new());
                    set_grade.set(String::new());
                    on_uploaded.run(());
                }
                Err(e) => {
                    set_error_msg.set(Some(e.message().to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl max-w-md">
            <form class="card-body" on:submit=on_submit>
                <h3 class="card-title gap-2">
                    <UploadCloud attr:class="h-5 w-5 text-primary" />
                    "Upload Grade"
                </h3>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                <Show when=move || success_msg.get().is_some()>
                    <div role="alert" class="alert alert-success text-sm py-2">
                        <span>{move || success_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="form-control">
                    <label class="label" for="enrollment-id">
                        <span class="label-text">"Enrollment ID"</span>
                    </label>
                    <input
                        id="enrollment-id"
                        type="text"
                        inputmode="numeric"
                        placeholder="7"
                        on:input=move |ev| set_enrollment_id.set(event_target_value(&ev))
                        prop:value=enrollment_id
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="grade">
                        <span class="label-text">"Grade (0.0 - 4.0)"</span>
                    </label>
                    <input
                        id="grade"
                        type="text"
                        inputmode="decimal"
                        placeholder="3.5"
                        on:input=move |ev| set_grade.set(event_target_value(&ev))
                        prop:value=grade
                        class="input input-bordered"
                        required
                    />
                </div>

                <div class="form-control mt-4">
                    <button class="btn btn-primary" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Uploading..." }.into_any()
                        } else {
                            "Upload".into_any()
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
