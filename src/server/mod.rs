//! Request dispatch: maps scenario paths onto canned response generators.
//!
//! Only `GET` is registered on each path, so axum's routing layer answers
//! other methods with 405 and unknown paths with 404; no custom error bodies
//! are produced here. Handlers hold no shared state, so concurrent requests
//! never contend with each other.

use std::time::Duration;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::feed::{render_rss, Feed};

mod scenarios;

pub use scenarios::{baseline, missing_fields, BROKEN_RSS};

/// Content type set on every scenario response, including the broken one.
pub const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

/// Fixed delay applied by the `/timeout` scenario before any byte is written.
pub const TIMEOUT_DELAY: Duration = Duration::from_millis(2000);

/// Builds the scenario route table.
pub fn router() -> Router {
    Router::new()
        .route("/", get(serve_baseline))
        .route("/missing", get(serve_missing))
        .route("/timeout", get(serve_timeout))
        .route("/broken", get(serve_broken))
}

async fn serve_baseline() -> Response {
    render_response(scenarios::baseline())
}

async fn serve_missing() -> Response {
    render_response(scenarios::missing_fields())
}

/// Simulates a slow upstream: a fixed, uncooperative delay with no
/// cancellation handling. Only this request's task suspends; the sleep runs
/// to completion even if the client has already disconnected.
async fn serve_timeout() -> Response {
    tokio::time::sleep(TIMEOUT_DELAY).await;
    render_response(scenarios::baseline())
}

async fn serve_broken() -> Response {
    rss_response(scenarios::BROKEN_RSS.to_string())
}

/// Renders a feed, converting serialization failure into a per-request 500
/// so one bad document cannot take down the server or other in-flight
/// requests.
fn render_response(feed: Feed) -> Response {
    match render_rss(&feed) {
        Ok(body) => rss_response(body),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render RSS document");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn rss_response(body: String) -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static(RSS_CONTENT_TYPE))],
        body,
    )
        .into_response()
}
