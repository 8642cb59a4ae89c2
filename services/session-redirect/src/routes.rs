//! HTTP surface: the redirect endpoint and a health probe.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use http::header::{COOKIE, LOCATION, SET_COOKIE};
use http::{HeaderMap, HeaderValue, StatusCode, Uri};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::config::RedirectConfig;
use crate::redirect::{RedirectOutcome, RedirectRejection, resolve_redirect};

/// Path the redirect endpoint is mounted at.
pub const REDIRECT_PATH: &str = "/session_redirect_plugin/";

#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    next: Option<String>,
}

/// Build the service router.
pub fn router(config: RedirectConfig) -> Router {
    Router::new()
        .route(REDIRECT_PATH, get(session_redirect))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}

/// Minimal health-check handler for load-balancer probes.
async fn health() -> StatusCode {
    StatusCode::OK
}

impl IntoResponse for RedirectRejection {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

async fn session_redirect(
    State(config): State<Arc<RedirectConfig>>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<RedirectQuery>,
) -> Response {
    let session_id = cookie_value(&headers, &config.session_cookie);
    let request_path = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());

    match resolve_redirect(
        &config,
        request_path,
        query.next.as_deref(),
        session_id.as_deref(),
    ) {
        Ok(outcome) => redirect_response(outcome),
        Err(rejection) => {
            tracing::info!(next = ?query.next, %rejection, "redirect rejected");
            rejection.into_response()
        }
    }
}

fn redirect_response(outcome: RedirectOutcome) -> Response {
    let (location, cookie) = match outcome {
        RedirectOutcome::Login { location } => {
            tracing::debug!(%location, "no session, sending to login");
            (location, None)
        }
        RedirectOutcome::Redirect { location, cookie } => {
            tracing::debug!(%location, with_cookie = cookie.is_some(), "redirecting");
            (location, cookie)
        }
    };

    let mut headers = HeaderMap::new();
    let Ok(location) = HeaderValue::from_str(&location) else {
        return RedirectRejection::BadScheme.into_response();
    };
    headers.insert(LOCATION, location);
    if let Some(cookie) = cookie {
        match HeaderValue::from_str(&cookie.to_string()) {
            Ok(value) => {
                headers.insert(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "session cookie not representable as a header"),
        }
    }
    (StatusCode::FOUND, headers).into_response()
}

/// Value of the named cookie across all `Cookie` headers.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
