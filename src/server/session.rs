//! Signed session cookies
//!
//! The cookie carries only an opaque session id; the conversation itself
//! lives server-side in the history store. Cookies are HMAC-signed, so a
//! tampered or foreign cookie is treated as absent and a new session starts.

use crate::history::SessionId;
use crate::server::AppState;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponseParts, ResponseParts};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use rand::RngCore;
use sha2::{Digest, Sha512};
use std::convert::Infallible;

/// Derives the cookie signing key
///
/// A configured secret of any length is stretched to the 64 bytes the
/// signing key needs with SHA-512. Without a secret a random key is used,
/// so sessions end when the process restarts.
///
/// # Examples
///
/// ```
/// use jewel::server::session::cookie_key;
///
/// let a = cookie_key(Some("correct horse battery staple"));
/// let b = cookie_key(Some("correct horse battery staple"));
/// assert_eq!(a.master(), b.master());
/// ```
pub fn cookie_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) => Key::from(Sha512::digest(secret.as_bytes()).as_slice()),
        None => {
            tracing::warn!("No session secret configured; using a random per-process key");
            let mut bytes = [0u8; 64];
            rand::rng().fill_bytes(&mut bytes);
            Key::from(&bytes[..])
        }
    }
}

/// The caller's session, resolved from (or newly assigned to) the cookie jar
///
/// Return the `Session` as part of the response so a newly assigned id is
/// written back as a `Set-Cookie` header.
#[derive(Debug)]
pub struct Session {
    /// Id keying this browser's history
    pub id: SessionId,
    /// Whether the id was assigned on this request
    pub is_new: bool,
    jar: SignedCookieJar,
}

impl Session {
    /// Resolves the session id from a verified cookie, or assigns a new one
    pub fn from_jar(jar: SignedCookieJar, cookie_name: &str) -> Self {
        if let Some(cookie) = jar.get(cookie_name) {
            let value = cookie.value().trim();
            if !value.is_empty() {
                return Self {
                    id: SessionId::new(value),
                    is_new: false,
                    jar,
                };
            }
        }

        let id = SessionId::generate();
        tracing::debug!(session = %id, "Assigned new session");

        let cookie = Cookie::build((cookie_name.to_string(), id.as_str().to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();

        Self {
            id,
            is_new: true,
            jar: jar.add(cookie),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_request_parts(parts, state).await?;
        Ok(Self::from_jar(jar, state.cookie_name()))
    }
}

impl IntoResponseParts for Session {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}
