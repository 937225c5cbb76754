//! End-to-end API flows over the in-memory store: register → login →
//! authenticated requests, ownership checks, cascades, toggles, and the
//! response envelopes.

use axum::body::Body;
use axum::http::header::SET_COOKIE;
use axum::http::{Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use quill_server::{build_router, AppState, ServerConfig};
use quill_store::{CommentStore, LikeStore};
use quill_types::{LikeTarget, RecordId};

fn test_state() -> AppState {
    let config = ServerConfig {
        // Minimum bcrypt cost keeps the suite fast.
        bcrypt_cost: 4,
        secure_cookies: false,
        access_token_secret: "test-access".into(),
        refresh_token_secret: "test-refresh".into(),
        ..ServerConfig::default()
    };
    AppState::in_memory(config)
}

async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn register_body(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "password": "secret",
        "displayName": "Display Name",
        "avatar": {"publicId": "img-1", "url": "https://img.example/a.png"}
    })
}

async fn register_and_login(app: &axum::Router, username: &str, email: &str) -> (String, String) {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(register_body(username, email)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({"username": username, "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let access = body["data"]["accessToken"].as_str().unwrap().to_string();
    let refresh = body["data"]["refreshToken"].as_str().unwrap().to_string();
    (access, refresh)
}

async fn create_category(app: &axum::Router, token: &str, title: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/category",
        Some(token),
        Some(json!({"title": title})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn create_blog(app: &axum::Router, token: &str, category: &str, title: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/blog",
        Some(token),
        Some(json!({"title": title, "content": "Some content", "category": category})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Auth flows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_login_current_user_flow() {
    let app = build_router(test_state());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(register_body("alice", "a@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], json!(201));
    assert_eq!(body["data"]["username"], json!("alice"));
    // Sanitized: no credential fields on any read path.
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("passwordHash").is_none());
    assert!(body["data"].get("refreshToken").is_none());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({"username": "alice", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let access = body["data"]["accessToken"].as_str().unwrap();
    assert!(!access.is_empty());
    assert!(!body["data"]["refreshToken"].as_str().unwrap().is_empty());

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/auth/current-user",
        Some(access),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], json!("alice"));
}

#[tokio::test]
async fn login_sets_both_session_cookies() {
    let app = build_router(test_state());
    send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(register_body("alice", "a@x.com")),
    )
    .await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"username": "alice", "password": "secret"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookies: Vec<&str> = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("accessToken=")));
    assert!(cookies.iter().any(|c| c.starts_with("refreshToken=")));
    assert!(cookies.iter().all(|c| c.contains("HttpOnly")));
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let app = build_router(test_state());
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(register_body("alice", "a@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Same username, different email.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(register_body("alice", "other@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], json!(409));

    // Different username, same email.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(register_body("bob", "a@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn registration_requires_avatar_and_fields() {
    let app = build_router(test_state());

    let mut no_avatar = register_body("alice", "a@x.com");
    no_avatar.as_object_mut().unwrap().remove("avatar");
    let (status, _) = send(&app, Method::POST, "/api/v1/auth/register", None, Some(no_avatar)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut blank = register_body("alice", "a@x.com");
    blank["password"] = json!("   ");
    let (status, _) = send(&app, Method::POST, "/api/v1/auth/register", None, Some(blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn refresh_token_rotates_exactly_once() {
    let app = build_router(test_state());
    let (_, refresh) = register_and_login(&app, "alice", "a@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/refresh-token",
        None,
        Some(json!({"refreshToken": refresh})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rotated = body["data"]["refreshToken"].as_str().unwrap().to_string();
    assert_ne!(rotated, refresh);

    // The pre-rotation token is dead.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/refresh-token",
        None,
        Some(json!({"refreshToken": refresh})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], json!(401));

    // The rotated one still works.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/refresh-token",
        None,
        Some(json!({"refreshToken": rotated})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn logout_invalidates_the_refresh_token() {
    let app = build_router(test_state());
    let (access, refresh) = register_and_login(&app, "alice", "a@x.com").await;

    let (status, _) = send(&app, Method::POST, "/api/v1/auth/logout", Some(&access), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/refresh-token",
        None,
        Some(json!({"refreshToken": refresh})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn change_password_end_to_end() {
    let app = build_router(test_state());
    let (access, _) = register_and_login(&app, "alice", "a@x.com").await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/v1/auth/change-password",
        Some(&access),
        Some(json!({
            "oldPassword": "secret",
            "newPassword": "updated",
            "confirmPassword": "updated"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({"username": "alice", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({"username": "alice", "password": "updated"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Blogs: ownership, listing, pagination
// ---------------------------------------------------------------------------

#[tokio::test]
async fn only_the_owner_can_edit_or_delete_a_blog() {
    let app = build_router(test_state());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;
    let (bob, _) = register_and_login(&app, "bob", "b@x.com").await;
    let category = create_category(&app, &alice, "Systems").await;
    let blog = create_blog(&app, &alice, &category, "Alice's post").await;

    let edit = json!({"title": "Hijacked", "content": "nope"});
    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/blog/{blog}"),
        Some(&bob),
        Some(edit.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/blog/{blog}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/blog/{blog}"),
        Some(&alice),
        Some(json!({"title": "Edited", "content": "new content"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], json!("Edited"));
}

#[tokio::test]
async fn blog_creation_requires_an_existing_category() {
    let app = build_router(test_state());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;

    let missing = RecordId::new().to_string();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/blog",
        Some(&alice),
        Some(json!({"title": "T", "content": "C", "category": missing})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/blog",
        Some(&alice),
        Some(json!({"title": "T", "content": "C", "category": "not-an-id"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blog_listing_paginates_and_projects() {
    let app = build_router(test_state());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;
    let category = create_category(&app, &alice, "Systems").await;
    for i in 0..3 {
        create_blog(&app, &alice, &category, &format!("Post {i}")).await;
        // Distinct millisecond timestamps keep newest-first deterministic.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let (status, body) = send(&app, Method::GET, "/api/v1/blog?page=1&limit=2", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["totalDocs"], json!(3));
    assert_eq!(data["totalPages"], json!(2));
    assert_eq!(data["docs"].as_array().unwrap().len(), 2);

    // Newest first, joined display fields in place.
    let first = &data["docs"][0];
    assert_eq!(first["title"], json!("Post 2"));
    assert_eq!(first["category"], json!("Systems"));
    assert_eq!(first["ownerDetails"]["username"], json!("alice"));
    assert_eq!(first["likesCount"], json!(0));
    assert!(first.get("content").is_some());

    let (_, body) = send(&app, Method::GET, "/api/v1/blog?page=2&limit=2", None, None).await;
    assert_eq!(body["data"]["docs"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn own_and_user_blog_listings_are_scoped() {
    let app = build_router(test_state());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;
    let (bob, _) = register_and_login(&app, "bob", "b@x.com").await;
    let category = create_category(&app, &alice, "Systems").await;
    create_blog(&app, &alice, &category, "Alice's").await;
    create_blog(&app, &bob, &category, "Bob's").await;

    let (status, body) = send(&app, Method::GET, "/api/v1/blog/own-blog", Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    let own = body["data"].as_array().unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0]["title"], json!("Alice's"));

    // Anyone can list a user's blogs by id.
    let (_, me) = send(&app, Method::GET, "/api/v1/auth/current-user", Some(&bob), None).await;
    let bob_id = me["data"]["id"].as_str().unwrap();
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/blog/user-blog/{bob_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Likes: toggle involution and viewer-relative flags
// ---------------------------------------------------------------------------

#[tokio::test]
async fn like_toggle_returns_to_original_state() {
    let app = build_router(test_state());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;
    let category = create_category(&app, &alice, "Systems").await;
    let blog = create_blog(&app, &alice, &category, "Post").await;
    let uri = format!("/api/v1/like/blog/{blog}");

    let (status, body) = send(&app, Method::GET, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isLiked"], json!(true));

    let (_, body) = send(&app, Method::GET, &uri, Some(&alice), None).await;
    assert_eq!(body["data"]["isLiked"], json!(false));

    let (_, body) = send(&app, Method::GET, &uri, Some(&alice), None).await;
    assert_eq!(body["data"]["isLiked"], json!(true));

    let (_, body) = send(&app, Method::GET, &uri, Some(&alice), None).await;
    assert_eq!(body["data"]["isLiked"], json!(false));
}

#[tokio::test]
async fn single_blog_reports_viewer_relative_like_flag() {
    let app = build_router(test_state());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;
    let (bob, _) = register_and_login(&app, "bob", "b@x.com").await;
    let category = create_category(&app, &alice, "Systems").await;
    let blog = create_blog(&app, &alice, &category, "Post").await;

    send(&app, Method::GET, &format!("/api/v1/like/blog/{blog}"), Some(&alice), None).await;

    let uri = format!("/api/v1/blog/single/{blog}");
    let (status, body) = send(&app, Method::GET, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["likesCount"], json!(1));
    assert_eq!(body["data"]["isLiked"], json!(true));

    let (_, body) = send(&app, Method::GET, &uri, Some(&bob), None).await;
    assert_eq!(body["data"]["isLiked"], json!(false));

    let (_, body) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(body["data"]["isLiked"], json!(false));
    assert_eq!(body["data"]["likesCount"], json!(1));
}

#[tokio::test]
async fn liking_a_missing_target_is_not_found() {
    let app = build_router(test_state());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;
    let missing = RecordId::new();
    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/v1/like/blog/{missing}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn comment_lifecycle_with_ownership() {
    let app = build_router(test_state());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;
    let (bob, _) = register_and_login(&app, "bob", "b@x.com").await;
    let category = create_category(&app, &alice, "Systems").await;
    let blog = create_blog(&app, &alice, &category, "Post").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/comment/{blog}"),
        Some(&bob),
        Some(json!({"content": "Nice post"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let comment = body["data"]["id"].as_str().unwrap().to_string();

    // Listing joins the comment owner and derives the viewer flag.
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/comment/{blog}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let docs = body["data"]["docs"].as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["content"], json!("Nice post"));
    assert_eq!(docs[0]["owner"]["username"], json!("bob"));
    assert_eq!(docs[0]["isLiked"], json!(false));

    // Only the comment owner can edit or delete.
    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/comment/{comment}"),
        Some(&alice),
        Some(json!({"content": "edited"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/comment/{comment}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/comment/{blog}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(body["data"]["totalDocs"], json!(0));
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleting_a_blog_removes_comments_and_likes() {
    let state = test_state();
    let app = build_router(state.clone());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;
    let (bob, _) = register_and_login(&app, "bob", "b@x.com").await;
    let category = create_category(&app, &alice, "Systems").await;
    let blog = create_blog(&app, &alice, &category, "Post").await;

    let (_, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/comment/{blog}"),
        Some(&bob),
        Some(json!({"content": "Nice"})),
    )
    .await;
    let comment = body["data"]["id"].as_str().unwrap().to_string();

    send(&app, Method::GET, &format!("/api/v1/like/blog/{blog}"), Some(&bob), None).await;
    send(&app, Method::GET, &format!("/api/v1/like/comment/{comment}"), Some(&alice), None).await;

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/blog/{blog}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Dependents are gone from the store, likes on the comment included.
    let blog_id: RecordId = blog.parse().unwrap();
    let comment_id: RecordId = comment.parse().unwrap();
    assert!(state
        .store
        .comments_for_blog(&blog_id)
        .await
        .unwrap()
        .is_empty());
    let (_, me) = send(&app, Method::GET, "/api/v1/auth/current-user", Some(&bob), None).await;
    let bob_id: RecordId = me["data"]["id"].as_str().unwrap().parse().unwrap();
    assert!(state
        .store
        .find_like(&LikeTarget::Blog(blog_id), &bob_id)
        .await
        .unwrap()
        .is_none());
    assert!(state
        .store
        .find_like(&LikeTarget::Comment(comment_id), &bob_id)
        .await
        .unwrap()
        .is_none());

    let (status, _) = send(&app, Method::GET, &format!("/api/v1/blog/single/{blog}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_category_cascades_to_its_blogs() {
    let app = build_router(test_state());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;
    let category = create_category(&app, &alice, "Doomed").await;
    let blog = create_blog(&app, &alice, &category, "Post").await;

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/category/{category}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &format!("/api/v1/blog/single/{blog}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/v1/blog", None, None).await;
    assert_eq!(body["data"]["totalDocs"], json!(0));
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_titles_are_unique() {
    let app = build_router(test_state());
    let (alice, _) = register_and_login(&app, "alice", "a@x.com").await;
    create_category(&app, &alice, "Systems").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/category",
        Some(&alice),
        Some(json!({"title": "Systems"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], json!(409));

    // Listing stays public.
    let (status, body) = send(&app, Method::GET, "/api/v1/category", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Envelopes and auth gating
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_envelope_mirrors_status_in_body() {
    let app = build_router(test_state());
    let missing = RecordId::new();
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/blog/single/{missing}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], json!(404));
    assert!(body["message"].is_string());
    assert!(body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = build_router(test_state());
    for (method, uri) in [
        (Method::POST, "/api/v1/blog"),
        (Method::GET, "/api/v1/blog/own-blog"),
        (Method::POST, "/api/v1/category"),
        (Method::POST, "/api/v1/auth/logout"),
    ] {
        let (status, body) = send(&app, method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "expected 401 for {uri}");
        assert_eq!(body["status"], json!(401));
    }
}

#[tokio::test]
async fn malformed_path_ids_are_rejected_as_validation_errors() {
    let app = build_router(test_state());
    let (status, body) = send(&app, Method::GET, "/api/v1/blog/single/not-an-id", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], json!(400));
}
