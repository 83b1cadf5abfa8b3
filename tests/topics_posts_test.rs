//! End-to-end tests for topic listings, topic pages, replies and edits

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use forum_server::traits::*;
use forum_server::{AppState, Board, ForumBuilder, Post, Settings, Topic};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn create_test_app() -> (Router, AppState) {
    ForumBuilder::new()
        .with_settings(Settings::default())
        .with_board(Board::new("Rust", "All things Rust."))
        .start()
        .await
        .unwrap()
}

fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|raw| raw.split(';').next())
        .expect("response should carry a session cookie")
        .to_string()
}

async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, cookie: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("cookie", cookie)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sign up a user through the API and hand back their session cookie
async fn signup(app: &Router, username: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/accounts")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "username": username,
                        "email": format!("{}@example.com", username),
                        "password": "correct horse battery"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    session_cookie(&response)
}

#[tokio::test]
async fn test_create_topic_requires_login() {
    let (app, _) = create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/boards/1/topics")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"subject": "Hello", "message": "First post."}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_topic_and_list() {
    let (app, _) = create_test_app().await;
    let cookie = signup(&app, "alice").await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/boards/1/topics",
            &cookie,
            json!({"subject": "Hello", "message": "First post."}),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let json = body_json(created).await;
    assert_eq!(json["subject"], "Hello");
    assert_eq!(json["starter"], "alice");
    assert_eq!(json["replies"], 0);

    let listing = app
        .oneshot(get("/api/v1/boards/1/topics", None))
        .await
        .unwrap();
    assert_eq!(listing.status(), StatusCode::OK);

    let json = body_json(listing).await;
    assert_eq!(json["totalTopics"], 1);
    assert_eq!(json["currentPage"], 1);
    assert_eq!(json["totalPages"], 1);
    assert_eq!(json["board"]["name"], "Rust");
}

#[tokio::test]
async fn test_topic_listing_pagination() {
    let (app, state) = create_test_app().await;
    signup(&app, "alice").await;

    // 45 topics at 20 per page is 3 pages
    for i in 1..=45 {
        state
            .storage
            .create_topic(Topic::new(1, format!("Topic {}", i), 1))
            .await
            .unwrap();
    }

    let first = body_json(
        app.clone()
            .oneshot(get("/api/v1/boards/1/topics", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(first["totalTopics"], 45);
    assert_eq!(first["totalPages"], 3);
    assert_eq!(first["currentPage"], 1);
    assert_eq!(first["topics"].as_array().unwrap().len(), 20);

    let second = body_json(
        app.clone()
            .oneshot(get("/api/v1/boards/1/topics?page=2", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(second["currentPage"], 2);
    assert_eq!(second["topics"].as_array().unwrap().len(), 20);

    // Past the end clamps to the last page
    let overflow = body_json(
        app.clone()
            .oneshot(get("/api/v1/boards/1/topics?page=5", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(overflow["currentPage"], 3);
    assert_eq!(overflow["topics"].as_array().unwrap().len(), 5);

    // Garbage falls back to the first page
    let garbage = body_json(
        app.oneshot(get("/api/v1/boards/1/topics?page=abc", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(garbage["currentPage"], 1);
    assert_eq!(garbage["topics"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_topic_views_count_once_per_session() {
    let (app, _) = create_test_app().await;
    let cookie = signup(&app, "alice").await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/boards/1/topics",
            &cookie,
            json!({"subject": "Hello", "message": "First post."}),
        ))
        .await
        .unwrap();

    // First anonymous visit counts and issues a session cookie
    let first = app
        .clone()
        .oneshot(get("/api/v1/boards/1/topics/1", None))
        .await
        .unwrap();
    let visitor = session_cookie(&first);
    assert_eq!(body_json(first).await["topic"]["views"], 1);

    // Revisiting with the same session does not count again
    let again = app
        .clone()
        .oneshot(get("/api/v1/boards/1/topics/1", Some(&visitor)))
        .await
        .unwrap();
    assert_eq!(body_json(again).await["topic"]["views"], 1);

    // A fresh session counts once more
    let fresh = app
        .oneshot(get("/api/v1/boards/1/topics/1", None))
        .await
        .unwrap();
    assert_eq!(body_json(fresh).await["topic"]["views"], 2);
}

#[tokio::test]
async fn test_topic_scoped_to_board() {
    let (app, state) = create_test_app().await;
    let cookie = signup(&app, "alice").await;

    state
        .storage
        .create_board(Board::new("Go", "Other board."))
        .await
        .unwrap();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/boards/1/topics",
            &cookie,
            json!({"subject": "Hello", "message": "First post."}),
        ))
        .await
        .unwrap();

    // Topic 1 lives in board 1, not board 2
    let response = app
        .oneshot(get("/api/v1/boards/2/topics/1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reply_reports_last_page() {
    let (app, state) = create_test_app().await;
    let cookie = signup(&app, "alice").await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/boards/1/topics",
            &cookie,
            json!({"subject": "Hello", "message": "First post."}),
        ))
        .await
        .unwrap();

    // Fill page one: starter post plus 19 more
    for i in 0..19 {
        state
            .storage
            .create_post(Post::new(1, format!("Reply {}", i), 1))
            .await
            .unwrap();
    }

    // The 21st post lands on page two
    let reply = app
        .oneshot(json_request(
            "POST",
            "/api/v1/boards/1/topics/1/posts",
            &cookie,
            json!({"message": "One more."}),
        ))
        .await
        .unwrap();
    assert_eq!(reply.status(), StatusCode::CREATED);

    let json = body_json(reply).await;
    assert_eq!(json["lastPage"], 2);
    assert_eq!(json["post"]["author"], "alice");
}

#[tokio::test]
async fn test_only_the_author_may_edit() {
    let (app, _) = create_test_app().await;
    let alice = signup(&app, "alice").await;
    let bob = signup(&app, "bob").await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/boards/1/topics",
            &alice,
            json!({"subject": "Hello", "message": "First post."}),
        ))
        .await
        .unwrap();

    // Bob cannot edit Alice's starter post, and cannot tell it exists
    let denied = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/boards/1/topics/1/posts/1",
            &bob,
            json!({"message": "hijacked"}),
        ))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(denied).await["error"], "POST_NOT_FOUND");

    // Alice can
    let edited = app
        .oneshot(json_request(
            "PUT",
            "/api/v1/boards/1/topics/1/posts/1",
            &alice,
            json!({"message": "First post, edited."}),
        ))
        .await
        .unwrap();
    assert_eq!(edited.status(), StatusCode::OK);

    let json = body_json(edited).await;
    assert_eq!(json["message"], "First post, edited.");
    assert_eq!(json["edited"], true);
}

#[tokio::test]
async fn test_reply_validation_error() {
    let (app, _) = create_test_app().await;
    let cookie = signup(&app, "alice").await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/boards/1/topics",
            &cookie,
            json!({"subject": "Hello", "message": "First post."}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/boards/1/topics/1/posts",
            &cookie,
            json!({"message": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "VALIDATION_ERROR");
}
