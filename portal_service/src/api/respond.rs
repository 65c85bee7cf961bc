//! The JSON-vs-redirect boundary adapter for the form-facing endpoints.
//!
//! The lifecycle core returns plain results; this module picks the
//! representation once, keyed on the caller's declared intent. JSON callers
//! get the standard envelope; everything else gets a `303 See Other` back
//! to the referring page with the outcome flashed in short-lived cookies.

use axum::{
    async_trait,
    body::Body,
    extract::FromRequestParts,
    http::{HeaderMap, Response, StatusCode, header, request::Parts},
};
use model::response::ApiResponse;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt::Debug;

/// Cookie carrying the flashed outcome message
const FLASH_COOKIE: &str = "portal_flash";
/// Cookie carrying the flash level, `success` or `error`
const FLASH_LEVEL_COOKIE: &str = "portal_flash_level";
/// How long a flash survives, in seconds
const FLASH_MAX_AGE_SECONDS: u32 = 60;
/// Where non-JSON callers land when they arrive without a referrer
const FALLBACK_LOCATION: &str = "/portal-requests";

/// The representation the caller asked for, extracted once per request
#[derive(Debug, Clone)]
pub struct ResponseStyle {
    wants_json: bool,
    referer: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for ResponseStyle
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ResponseStyle::from_headers(&parts.headers))
    }
}

impl ResponseStyle {
    /// Read the caller's intent from its headers: an `Accept` naming JSON
    /// or an XHR marker selects the envelope, anything else the redirect.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let accept_json = headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|accept| accept.contains("application/json") || accept.contains("+json"));
        let is_xhr = headers
            .get("x-requested-with")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.eq_ignore_ascii_case("XMLHttpRequest"));
        let referer = headers
            .get(header::REFERER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        ResponseStyle {
            wants_json: accept_json || is_xhr,
            referer,
        }
    }

    /// Render a successful outcome carrying a payload
    pub fn success<T: Serialize + Debug>(
        &self,
        status: StatusCode,
        message: &str,
        data: &T,
    ) -> Response<Body> {
        if self.wants_json {
            return ApiResponse::builder()
                .message(message)
                .data(data)
                .send(status);
        }
        self.redirect(message, "success")
    }

    /// Render a failed outcome. `detail` is the debug-gated failure detail;
    /// callers pass `None` in production.
    pub fn failure(
        &self,
        status: StatusCode,
        message: &str,
        detail: Option<String>,
    ) -> Response<Body> {
        if self.wants_json {
            return ApiResponse::builder()
                .message(message)
                .is_success(false)
                .error_detail(detail)
                .send(status);
        }
        self.redirect(message, "error")
    }

    fn redirect(&self, message: &str, level: &str) -> Response<Body> {
        let location = self.referer.as_deref().unwrap_or(FALLBACK_LOCATION);
        let flash: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();

        Response::builder()
            .status(StatusCode::SEE_OTHER)
            .header(header::LOCATION, location)
            .header(
                header::SET_COOKIE,
                format!(
                    "{FLASH_COOKIE}={flash}; Path=/; Max-Age={FLASH_MAX_AGE_SECONDS}; SameSite=Lax"
                ),
            )
            .header(
                header::SET_COOKIE,
                format!(
                    "{FLASH_LEVEL_COOKIE}={level}; Path=/; Max-Age={FLASH_MAX_AGE_SECONDS}; SameSite=Lax"
                ),
            )
            .body(Body::empty())
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn style(headers: &[(&'static str, &str)]) -> ResponseStyle {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        ResponseStyle::from_headers(&map)
    }

    #[test]
    fn json_accept_header_selects_the_envelope() {
        assert!(style(&[("accept", "application/json")]).wants_json);
        assert!(style(&[("accept", "application/vnd.api+json")]).wants_json);
        assert!(!style(&[("accept", "text/html,application/xhtml+xml")]).wants_json);
    }

    #[test]
    fn xhr_marker_selects_the_envelope() {
        assert!(style(&[("x-requested-with", "XMLHttpRequest")]).wants_json);
        assert!(style(&[("x-requested-with", "xmlhttprequest")]).wants_json);
        assert!(!style(&[]).wants_json);
    }

    #[test]
    fn non_json_failures_redirect_back_with_an_error_flash() {
        let style = style(&[("referer", "/portal-requests/create")]);
        let response = style.failure(StatusCode::UNPROCESSABLE_ENTITY, "The portal is required.", None);

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/portal-requests/create"
        );

        let cookies: Vec<_> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|value| value.to_str().unwrap().to_string())
            .collect();
        assert_eq!(cookies.len(), 2);
        assert!(cookies[0].starts_with("portal_flash="));
        assert!(cookies[1].starts_with("portal_flash_level=error"));
    }

    #[test]
    fn redirects_without_a_referrer_land_on_the_listing() {
        let response = style(&[]).success(StatusCode::OK, "Done.", &"payload");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            FALLBACK_LOCATION
        );
    }

    #[test]
    fn json_callers_get_the_envelope_with_the_requested_status() {
        let style = style(&[("accept", "application/json")]);
        let response = style.success(StatusCode::CREATED, "Created.", &"payload");

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
