//! Settings Page Component
//!
//! Font-size and theme radio groups backed by the preference store. Changes
//! persist to localStorage and restyle the page immediately.

use leptos::prelude::*;

use crate::prefs;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (font_size, set_font_size) = signal(prefs::load_font_size().to_string());
    let (theme, set_theme) = signal(prefs::load_theme().to_string());

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>

            <fieldset class="font-size-options">
                <legend>"Font Size"</legend>
                {prefs::FONT_SIZES
                    .iter()
                    .map(|&option| {
                        view! {
                            <label>
                                <input
                                    type="radio"
                                    name="font-size"
                                    value=option
                                    prop:checked=move || font_size.get() == option
                                    on:change=move |_| {
                                        prefs::set_font_size(option);
                                        set_font_size.set(option.to_string());
                                    }
                                />
                                {option}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>

            <fieldset class="theme-options">
                <legend>"Theme"</legend>
                {prefs::THEMES
                    .iter()
                    .map(|&option| {
                        view! {
                            <label>
                                <input
                                    type="radio"
                                    name="theme"
                                    value=option
                                    prop:checked=move || theme.get() == option
                                    on:change=move |_| {
                                        prefs::set_theme(option);
                                        set_theme.set(option.to_string());
                                    }
                                />
                                {option}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>
        </div>
    }
}
