//! Grant Form Frontend App
//!
//! Top-level component: applies saved display preferences, then mounts the
//! page matching the current path. The edit-mode bootstrap payload is decoded
//! from the window globals exactly once here and handed down as a value.

use leptos::prelude::*;

use crate::components::{GrantForm, LoginPage, SettingsPage};
use crate::models::InitData;
use crate::prefs;

/// Which page the app mounts for a given path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    Login,
    Settings,
    AwardForm,
}

/// Map a pathname onto a page, mirroring the backend's routes.
pub fn classify_path(path: &str) -> Page {
    match path.trim_end_matches('/') {
        "" | "/login" | "/index.html" => Page::Login,
        "/settings" => Page::Settings,
        _ => Page::AwardForm,
    }
}

/// Where the award form posts: the new-award page posts to the collection
/// route, the edit page posts back to itself.
pub fn form_action_for(path: &str) -> String {
    if path.trim_end_matches('/') == "/awards/new" {
        "/awards".to_string()
    } else {
        path.to_string()
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Preferences restyle every page before it renders.
    prefs::apply_saved();

    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();

    match classify_path(&path) {
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
        Page::AwardForm => {
            let init = InitData::from_window();
            let action = form_action_for(&path);
            view! { <GrantForm init=init action=action /> }.into_any()
        }
    }
}
