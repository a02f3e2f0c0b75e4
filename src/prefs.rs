//! Display Preferences
//!
//! Font-size and theme choices persisted in localStorage and applied as
//! document body classes on every page load.

const FONT_KEY: &str = "gg-font-size";
const THEME_KEY: &str = "gg-theme";

pub const FONT_SIZES: &[&str] = &["small", "medium", "large"];
pub const THEMES: &[&str] = &["light", "dark"];

/// Clamp a stored or submitted font size to a known value.
pub fn normalize_font_size(value: &str) -> &'static str {
    match value {
        "small" => "small",
        "large" => "large",
        _ => "medium",
    }
}

/// Clamp a stored or submitted theme to a known value.
pub fn normalize_theme(value: &str) -> &'static str {
    match value {
        "dark" => "dark",
        _ => "light",
    }
}

pub fn load_font_size() -> &'static str {
    normalize_font_size(&read(FONT_KEY))
}

pub fn load_theme() -> &'static str {
    normalize_theme(&read(THEME_KEY))
}

/// Apply both saved preferences to the document body. Called once per page
/// load before anything renders.
pub fn apply_saved() {
    apply_font_size(load_font_size());
    apply_theme(load_theme());
}

pub fn set_font_size(value: &str) {
    let value = normalize_font_size(value);
    write(FONT_KEY, value);
    apply_font_size(value);
}

pub fn set_theme(value: &str) {
    let value = normalize_theme(value);
    write(THEME_KEY, value);
    apply_theme(value);
}

fn apply_font_size(value: &str) {
    let Some(body) = body() else { return };
    let classes = body.class_list();
    let _ = classes.remove_2("font-small", "font-large");
    match value {
        "small" => {
            let _ = classes.add_1("font-small");
        }
        "large" => {
            let _ = classes.add_1("font-large");
        }
        _ => {} // medium carries no class
    }
}

fn apply_theme(value: &str) {
    let Some(body) = body() else { return };
    let classes = body.class_list();
    let _ = classes.remove_1("theme-dark");
    if value == "dark" {
        let _ = classes.add_1("theme-dark");
    }
}

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read(key: &str) -> String {
    storage()
        .and_then(|store| store.get_item(key).ok().flatten())
        .unwrap_or_default()
}

fn write(key: &str, value: &str) {
    if let Some(store) = storage() {
        let _ = store.set_item(key, value);
    }
}
