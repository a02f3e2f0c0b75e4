//! Signup Modal Component
//!
//! Overlay with the signup form. Closes on the ✕ control, the back-to-login
//! link, a click on the backdrop, or Escape; a successful signup navigates
//! away like login does.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, AuthOutcome};

#[component]
pub fn SignupModal(
    visible: ReadSignal<bool>,
    set_visible: WriteSignal<bool>,
) -> impl IntoView {
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let close = move || {
        set_visible.set(false);
        set_first_name.set(String::new());
        set_last_name.set(String::new());
        set_email.set(String::new());
        set_password.set(String::new());
    };

    // Escape closes the modal wherever focus sits.
    let escape_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && visible.get_untracked() {
            close();
        }
    });
    on_cleanup(move || escape_handle.remove());

    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        // Only a click on the backdrop itself closes, not one inside the card.
        if ev.target() == ev.current_target() {
            close();
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let first_name = first_name.get();
        let last_name = last_name.get();
        let email = email.get();
        let password = password.get();

        spawn_local(async move {
            match api::signup(&first_name, &last_name, &email, &password).await {
                AuthOutcome::Redirect(url) => api::navigate_to(&url),
                AuthOutcome::Failure(message) => api::alert(&message),
            }
        });
    };

    view! {
        <Show when=move || visible.get()>
            <div class="signup-overlay" on:click=on_backdrop_click>
                <form class="signup-form" on:submit=on_submit>
                    <button type="button" class="dismiss-signup" on:click=move |_| close()>
                        "×"
                    </button>
                    <h2>"Sign Up"</h2>
                    <input
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                    />
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
                    <button type="submit">"Sign Up"</button>
                    <a
                        href="#"
                        class="back-to-login"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            close();
                        }
                    >
                        "Back to login"
                    </a>
                </form>
            </div>
        </Show>
    }
}
