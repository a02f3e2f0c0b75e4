//! Login Page Component
//!
//! Email/password form plus the signup modal trigger. Auth outcomes either
//! navigate to the backend-provided target or surface a blocking alert.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, AuthOutcome};
use crate::components::SignupModal;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_signup, set_show_signup) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();

        spawn_local(async move {
            match api::login(&email, &password).await {
                AuthOutcome::Redirect(url) => api::navigate_to(&url),
                AuthOutcome::Failure(message) => api::alert(&message),
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Sign In"</h1>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit">"Log In"</button>
                <button
                    type="button"
                    class="show-signup"
                    on:click=move |_| set_show_signup.set(true)
                >
                    "Create an account"
                </button>
            </form>

            <SignupModal visible=show_signup set_visible=set_show_signup />
        </div>
    }
}
