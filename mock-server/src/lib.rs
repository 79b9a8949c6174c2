//! Stand-in for the place-details endpoint, serving canned fixtures.
//!
//! Requests are matched on the exact raw query string, so a client that
//! orders or encodes its parameters differently gets a 404.

use axum::{
    extract::RawQuery,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

pub const API_KEY: &str = "testkey";
pub const OK_PLACE_ID: &str = "ChIJLU7jZClu5kcR4PcOOO6p3I0";

pub const OK_QUERY: &str =
    "extensions=review_summary&key=testkey&language=en&placeid=ChIJLU7jZClu5kcR4PcOOO6p3I0";
pub const INVALID_REQUEST_QUERY: &str = "key=testkey&placeid=invalid_request";
pub const INVALID_JSON_QUERY: &str = "key=testkey&placeid=invalid_json";
pub const NOT_OK_QUERY: &str = "key=testkey&placeid=notok";

pub const OK_BODY: &str = include_str!("../../test-data/ok.json");
pub const INVALID_REQUEST_BODY: &str = include_str!("../../test-data/invalid_request.json");
pub const INVALID_JSON_BODY: &str = include_str!("../../test-data/invalid_json.json");

/// Status and body served for `query`, or `None` when nothing matches.
pub fn fixture(query: &str) -> Option<(StatusCode, &'static str)> {
    match query {
        OK_QUERY => Some((StatusCode::OK, OK_BODY)),
        INVALID_REQUEST_QUERY => Some((StatusCode::OK, INVALID_REQUEST_BODY)),
        INVALID_JSON_QUERY => Some((StatusCode::OK, INVALID_JSON_BODY)),
        NOT_OK_QUERY => Some((StatusCode::BAD_REQUEST, "")),
        _ => None,
    }
}

pub fn app() -> Router {
    Router::new().route("/details/json", get(details))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn details(RawQuery(query): RawQuery) -> Response {
    let query = query.unwrap_or_default();
    match fixture(&query) {
        Some((status, body)) if body.is_empty() => {
            log::debug!("{query} -> {status}");
            status.into_response()
        }
        Some((status, body)) => {
            log::debug!("{query} -> {status}");
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        None => {
            log::warn!("no fixture for query {query:?}");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
