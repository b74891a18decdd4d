//! Session bootstrap against the external identity broker.
//!
//! The flow is the implicit grant: on start we either pick the bearer token
//! out of the URL fragment (broker redirect back) or send the browser to the
//! broker's login page. No token is ever persisted beyond the page lifetime.

use std::cell::RefCell;

use wasm_bindgen::JsValue;

/// Identity broker address and realm/client as provisioned on the broker.
pub const BROKER_URL: &str = "http://localhost:8080";
pub const REALM: &str = "conference-realm";
pub const CLIENT_ID: &str = "conference-app";

thread_local! {
    static TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// The current bearer token, when a session is established.
pub fn token() -> Option<String> {
    TOKEN.with(|t| t.borrow().clone())
}

fn store(token: Option<String>) {
    TOKEN.with(|t| *t.borrow_mut() = token);
}

/// Establish a session. Returns `true` when a token is available; otherwise
/// the browser has been pointed at the broker's login page and the caller
/// should keep rendering the loading placeholder.
pub fn init() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let location = window.location();

    let hash = location.hash().unwrap_or_default();
    if let Some(token) = parse_fragment_token(&hash) {
        store(Some(token));
        // Scrub the token from the address bar.
        if let (Ok(history), Ok(path)) = (window.history(), location.pathname()) {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
        }
        return true;
    }

    let origin = location.origin().unwrap_or_default();
    let redirect = js_sys::encode_uri_component(&origin);
    let auth_url = format!(
        "{BROKER_URL}/realms/{REALM}/protocol/openid-connect/auth\
         ?client_id={CLIENT_ID}&response_type=token&redirect_uri={redirect}"
    );
    let _ = location.set_href(&auth_url);
    false
}

/// Display name from the token's `preferred_username` claim.
pub fn username() -> String {
    token()
        .and_then(|t| decode_claim(&t, "preferred_username"))
        .unwrap_or_else(|| "User".to_string())
}

/// Drop the session and send the browser to the broker's logout page.
pub fn logout() {
    store(None);
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let origin = location.origin().unwrap_or_default();
        let redirect = js_sys::encode_uri_component(&origin);
        let url = format!(
            "{BROKER_URL}/realms/{REALM}/protocol/openid-connect/logout\
             ?client_id={CLIENT_ID}&post_logout_redirect_uri={redirect}"
        );
        let _ = location.set_href(&url);
    }
}

fn decode_claim(token: &str, claim: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let window = web_sys::window()?;
    let json = window.atob(&base64url_to_base64(payload)).ok()?;
    claim_from_payload(&json, claim)
}

/// Extract `access_token` from a `#key=value&...` URL fragment.
fn parse_fragment_token(hash: &str) -> Option<String> {
    hash.trim_start_matches('#')
        .split('&')
        .find_map(|pair| pair.strip_prefix("access_token="))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// JWT payloads are base64url without padding; `atob` wants standard base64.
fn base64url_to_base64(s: &str) -> String {
    let mut out = s.replace('-', "+").replace('_', "/");
    while out.len() % 4 != 0 {
        out.push('=');
    }
    out
}

fn claim_from_payload(json: &str, claim: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(json)
        .ok()?
        .get(claim)?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_token_is_extracted_from_broker_redirect() {
        let hash = "#state=abc&session_state=def&access_token=eyJ0.eyJw.sig&token_type=Bearer";
        assert_eq!(parse_fragment_token(hash).as_deref(), Some("eyJ0.eyJw.sig"));
    }

    #[test]
    fn fragment_without_token_yields_none() {
        assert_eq!(parse_fragment_token(""), None);
        assert_eq!(parse_fragment_token("#error=login_required"), None);
        assert_eq!(parse_fragment_token("#access_token="), None);
    }

    #[test]
    fn base64url_is_normalized_and_padded() {
        assert_eq!(base64url_to_base64("a-b_c"), "a+b/c===");
        assert_eq!(base64url_to_base64("abcd"), "abcd");
    }

    #[test]
    fn preferred_username_claim_is_read_from_payload() {
        let payload = r#"{"exp":1700000000,"preferred_username":"mlagrange","azp":"conference-app"}"#;
        assert_eq!(
            claim_from_payload(payload, "preferred_username").as_deref(),
            Some("mlagrange")
        );
        assert_eq!(claim_from_payload(payload, "email"), None);
        assert_eq!(claim_from_payload("not json", "preferred_username"), None);
    }
}
