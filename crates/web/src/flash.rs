//! One-shot flash messages carried across a redirect in a cookie.
//!
//! A handler that redirects calls [`push`]; the next page rendered calls
//! [`take`], which returns the messages and clears the cookie. Pages that
//! render in the same response as the message (re-rendered forms) skip the
//! cookie and pass the messages to the template directly.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

/// Name of the cookie holding pending messages.
pub const FLASH_COOKIE: &str = "fyyur_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

/// A user-facing status line shown once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: Level,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// CSS class of the alert box.
    pub fn css_class(&self) -> &'static str {
        match self.level {
            Level::Success => "alert-success",
            Level::Error => "alert-danger",
        }
    }
}

/// Queue `message` for the next rendered page.
///
/// Messages already pending in the request's cookie are kept.
pub fn push(jar: CookieJar, message: FlashMessage) -> CookieJar {
    let mut pending = read(&jar);
    pending.push(message);

    let value = match serde_json::to_string(&pending) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "Dropping flash message that failed to serialize");
            return jar;
        }
    };

    jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Consume pending messages, clearing the cookie.
pub fn take(jar: CookieJar) -> (CookieJar, Vec<FlashMessage>) {
    let messages = read(&jar);
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, messages);
    }
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, messages)
}

fn read(jar: &CookieJar) -> Vec<FlashMessage> {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return Vec::new();
    };
    serde_json::from_str(cookie.value()).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "Ignoring malformed flash cookie");
        Vec::new()
    })
}
