//! Signup Form Component
//!
//! Email field plus the activity selector. The placeholder option is static
//! markup; the renderer only ever replaces the options after it.

use leptos::*;

use crate::controller::AppController;
use crate::state::roster::PLACEHOLDER_LABEL;
use crate::state::ViewState;

/// Signup form component
#[component]
pub fn SignupForm() -> impl IntoView {
    let controller = use_context::<AppController>().expect("AppController not found");
    let state = use_context::<ViewState>().expect("ViewState not found");

    let (email, set_email) = create_signal(String::new());
    let (activity, set_activity) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let controller = controller.clone();
        let selected = activity.get();
        let address = email.get();
        set_submitting.set(true);

        spawn_local(async move {
            if controller.submit_signup(&selected, &address).await.is_success() {
                set_email.set(String::new());
                set_activity.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || activity.get()
                    on:change=move |ev| set_activity.set(event_target_value(&ev))
                >
                    <option value="">{PLACEHOLDER_LABEL}</option>
                    {move || {
                        state.options.get()
                            .into_iter()
                            .map(|option| view! {
                                <option value=option.value>{option.label}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
            </button>
        </form>
    }
}
