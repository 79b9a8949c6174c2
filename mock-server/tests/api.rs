use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, INVALID_JSON_QUERY, INVALID_REQUEST_QUERY, NOT_OK_QUERY, OK_PLACE_ID, OK_QUERY};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn request_at(path: &str, query: &str) -> Request<String> {
    Request::builder()
        .uri(format!("{path}?{query}"))
        .body(String::new())
        .unwrap()
}

fn details_request(query: &str) -> Request<String> {
    request_at("/details/json", query)
}

#[tokio::test]
async fn ok_query_returns_place() {
    let resp = app().oneshot(details_request(OK_QUERY)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "application/json");
    let body = body_json(resp).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["result"]["place_id"], OK_PLACE_ID);
}

#[tokio::test]
async fn invalid_request_query_returns_status_token() {
    let resp = app().oneshot(details_request(INVALID_REQUEST_QUERY)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "INVALID_REQUEST");
}

#[tokio::test]
async fn invalid_json_query_returns_string_body() {
    let resp = app().oneshot(details_request(INVALID_JSON_QUERY)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json(resp).await.is_string());
}

#[tokio::test]
async fn notok_query_returns_400_empty() {
    let resp = app().oneshot(details_request(NOT_OK_QUERY)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn reordered_query_is_not_matched() {
    let resp = app()
        .oneshot(details_request("placeid=invalid_request&key=testkey"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_query_is_not_matched() {
    let resp = app()
        .oneshot(Request::builder().uri("/details/json").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let resp = app().oneshot(request_at("/search/json", OK_QUERY)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
