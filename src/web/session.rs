//! Browser-persisted session token, kept in a cookie.
//!
//! The cookie is the only session state: the server keeps none. Writes and
//! clears are expressed as `Set-Cookie` header values the handlers attach to
//! their responses.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use url::form_urlencoded;

/// Default cookie name, matching the key the token has always lived under.
pub const DEFAULT_COOKIE_NAME: &str = "token";

/// Reads and writes the session token cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self::new(DEFAULT_COOKIE_NAME, false)
    }
}

impl SessionCookie {
    /// Creates a store for the cookie `name`; `secure` adds the `Secure`
    /// attribute so browsers only send it over HTTPS.
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    /// Returns the stored token, or `None` when the cookie is absent or empty.
    ///
    /// Handles several `Cookie` headers and several cookies per header,
    /// ignoring every cookie but ours.
    pub fn get(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|header| header.to_str().ok())
            .flat_map(|header| header.split(';'))
            .find_map(|cookie| match cookie.trim().split_once('=') {
                Some((name, value)) if name == self.name => Some(decode(value)),
                _ => None,
            })
            .filter(|token| !token.is_empty())
    }

    /// `Set-Cookie` value that persists `token` for the browser session.
    pub fn set(&self, token: &str) -> String {
        let value: String = form_urlencoded::byte_serialize(token.as_bytes()).collect();
        self.render(&value, None)
    }

    /// `Set-Cookie` value that removes the token.
    pub fn clear(&self) -> String {
        self.render("", Some(0))
    }

    fn render(&self, value: &str, max_age: Option<u64>) -> String {
        let mut cookie = format!("{}={value}; Path=/; HttpOnly; SameSite=Lax", self.name);
        if let Some(max_age) = max_age {
            cookie.push_str(&format!("; Max-Age={max_age}"));
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Reverses the percent-encoding applied by [`SessionCookie::set`].
fn decode(value: &str) -> String {
    form_urlencoded::parse(value.as_bytes())
        .next()
        .map(|(decoded, _)| decoded.into_owned())
        .unwrap_or_default()
}
