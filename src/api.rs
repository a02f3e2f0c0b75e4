//! Auth API Client
//!
//! Login/signup POSTs against the backend. Responses are interpreted
//! structured-first: a JSON `{ok, redirect, message}` body wins, and the
//! legacy contract (redirect follow plus marker substrings in an HTML body)
//! remains as fallback so the existing backend keeps working unchanged.

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Where a finished auth attempt leaves the user.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// Navigate to this URL.
    Redirect(String),
    /// Show this message in a blocking alert.
    Failure(String),
}

/// Structured auth reply.
#[derive(Debug, Clone, Deserialize)]
struct AuthReply {
    ok: bool,
    #[serde(default)]
    redirect: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

const DASHBOARD_URL: &str = "/dashboard";

/// What a legacy (non-JSON) failure body turns into: login always alerts its
/// fixed message, signup echoes the backend's text when there is any.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LegacyFailure {
    FixedMessage,
    EchoBody,
}

pub async fn login(email: &str, password: &str) -> AuthOutcome {
    let body = format!(
        "email={}&password={}",
        form_encode(email),
        form_encode(password)
    );
    match post_form("/login", body).await {
        Ok((response, text)) => {
            if response.redirected() {
                return AuthOutcome::Redirect(response.url());
            }
            // The legacy login page matched markers regardless of status.
            interpret_auth_body(
                true,
                &text,
                &["Welcome", "Dashboard"],
                "Invalid email or password. Please try again.",
                LegacyFailure::FixedMessage,
            )
        }
        Err(err) => AuthOutcome::Failure(err),
    }
}

pub async fn signup(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> AuthOutcome {
    let body = format!(
        "firstName={}&lastName={}&email={}&password={}",
        form_encode(first_name),
        form_encode(last_name),
        form_encode(email),
        form_encode(password)
    );
    match post_form("/signup", body).await {
        Ok((response, text)) => {
            if response.redirected() {
                return AuthOutcome::Redirect(response.url());
            }
            interpret_auth_body(
                response.ok(),
                &text,
                &["Signed up", "Welcome"],
                "Signup failed. Please try again.",
                LegacyFailure::EchoBody,
            )
        }
        Err(err) => AuthOutcome::Failure(err),
    }
}

/// Decide the outcome from a non-redirect response body.
fn interpret_auth_body(
    status_ok: bool,
    body: &str,
    markers: &[&str],
    default_message: &str,
    on_failure: LegacyFailure,
) -> AuthOutcome {
    if let Ok(reply) = serde_json::from_str::<AuthReply>(body) {
        return if reply.ok {
            AuthOutcome::Redirect(reply.redirect.unwrap_or_else(|| DASHBOARD_URL.to_string()))
        } else {
            AuthOutcome::Failure(
                reply.message.unwrap_or_else(|| default_message.to_string()),
            )
        };
    }

    // Legacy contract: substring-match the HTML body for success markers.
    if status_ok && markers.iter().any(|marker| body.contains(marker)) {
        return AuthOutcome::Redirect(DASHBOARD_URL.to_string());
    }
    match on_failure {
        LegacyFailure::EchoBody if !body.trim().is_empty() => {
            AuthOutcome::Failure(body.to_string())
        }
        _ => AuthOutcome::Failure(default_message.to_string()),
    }
}

/// POST a form-url-encoded body and collect the response text.
async fn post_form(path: &str, body: String) -> Result<(Response, String), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(path, &opts).map_err(describe_js_error)?;
    request
        .headers()
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(describe_js_error)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(describe_js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    let text = JsFuture::from(response.text().map_err(describe_js_error)?)
        .await
        .map_err(describe_js_error)?;
    Ok((response, text.as_string().unwrap_or_default()))
}

fn form_encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

fn describe_js_error(err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| "network request failed".to_string())
}

/// Show a blocking alert, the only failure surface the auth flow has.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Follow a redirect target.
pub fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}
