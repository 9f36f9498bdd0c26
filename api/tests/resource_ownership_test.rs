//! Ownership-gated CRUD over the HTTP surface: items, forums, projects.

mod common;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
use serde_json::{json, Value};

use hub_api::app::create_app;

/// Register an account and return its bearer token
async fn token_for<S, B>(app: &S, name: &str, email: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = call_service(
        app,
        TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"name": name, "email": email, "password": "secret1"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = read_body_json(resp).await;
    body["data"]["token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_rt::test]
async fn test_item_crud_with_ownership() {
    let ctx = common::test_context();
    let app = init_service(create_app(ctx.state.clone(), &ctx.config, None)).await;
    let alice = token_for(&app, "Alice", "alice@x.com").await;
    let bob = token_for(&app, "Bob", "bob@x.com").await;

    // Alice lists an item
    let resp = call_service(
        &app,
        TestRequest::post()
            .uri("/api/items")
            .insert_header(bearer(&alice))
            .set_json(json!({"title": "Desk", "description": "Small desk", "price": 40.0}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = read_body_json(resp).await;
    let item_id = body["data"]["item"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["item"]["created_by"]["name"], "Alice");

    // Listing is public
    let resp = call_service(&app, TestRequest::get().uri("/api/items").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["results"], 1);

    // Creating without a token is rejected
    let resp = call_service(
        &app,
        TestRequest::post()
            .uri("/api/items")
            .set_json(json!({"title": "X", "description": "Y", "price": 1.0}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Bob cannot update Alice's item
    let resp = call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/api/items/{item_id}"))
            .insert_header(bearer(&bob))
            .set_json(json!({"price": 1.0}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Not authorized to update this item");

    // Nor delete it
    let resp = call_service(
        &app,
        TestRequest::delete()
            .uri(&format!("/api/items/{item_id}"))
            .insert_header(bearer(&bob))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Alice updates allow-listed fields
    let resp = call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/api/items/{item_id}"))
            .insert_header(bearer(&alice))
            .set_json(json!({"price": 35.0}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["data"]["item"]["price"], 35.0);
    assert_eq!(body["data"]["item"]["title"], "Desk");

    // And deletes her item
    let resp = call_service(
        &app,
        TestRequest::delete()
            .uri(&format!("/api/items/{item_id}"))
            .insert_header(bearer(&alice))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/api/items/{item_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Item not found");
}

#[actix_rt::test]
async fn test_forum_membership_posts_and_likes() {
    let ctx = common::test_context();
    let app = init_service(create_app(ctx.state.clone(), &ctx.config, None)).await;
    let alice = token_for(&app, "Alice", "alice@x.com").await;
    let bob = token_for(&app, "Bob", "bob@x.com").await;

    // Alice creates a forum and is automatically a member
    let resp = call_service(
        &app,
        TestRequest::post()
            .uri("/api/forums")
            .insert_header(bearer(&alice))
            .set_json(json!({"name": "Rust", "description": "Rust talk", "category": "tech"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = read_body_json(resp).await;
    let forum_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["members"].as_array().unwrap().len(), 1);

    // Bob joins once
    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/forums/{forum_id}/join"))
            .insert_header(bearer(&bob))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Joining twice fails
    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/forums/{forum_id}/join"))
            .insert_header(bearer(&bob))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Already a member of this forum");

    // Bob posts
    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/forums/{forum_id}/posts"))
            .insert_header(bearer(&bob))
            .set_json(json!({"title": "Hello", "content": "First post"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = read_body_json(resp).await;
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    // Like is a set flip
    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/forums/posts/{post_id}/like"))
            .insert_header(bearer(&alice))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["data"]["likes"], 1);

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/forums/posts/{post_id}/like"))
            .insert_header(bearer(&alice))
            .to_request(),
    )
    .await;
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["data"]["likes"], 0);

    // Comments append
    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/forums/posts/{post_id}/comment"))
            .insert_header(bearer(&alice))
            .set_json(json!({"content": "Nice post"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    let comments = body["data"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["author"]["name"], "Alice");
}

#[actix_rt::test]
async fn test_project_ownership_views_and_filters() {
    let ctx = common::test_context();
    let app = init_service(create_app(ctx.state.clone(), &ctx.config, None)).await;
    let alice = token_for(&app, "Alice", "alice@x.com").await;
    let bob = token_for(&app, "Bob", "bob@x.com").await;

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri("/api/projects")
            .insert_header(bearer(&alice))
            .set_json(json!({
                "title": "Course Planner",
                "description": "Semester planning tool",
                "technologies": ["rust", "actix"],
                "category": "web",
                "status": "in-progress"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = read_body_json(resp).await;
    let project_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["views"], 0);

    // Fetch increments the view counter
    let resp = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/api/projects/{project_id}"))
            .insert_header(bearer(&bob))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["data"]["views"], 1);

    // Category filter matches, status filter excludes
    let resp = call_service(
        &app,
        TestRequest::get()
            .uri("/api/projects?category=web")
            .insert_header(bearer(&alice))
            .to_request(),
    )
    .await;
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri("/api/projects?status=archived")
            .insert_header(bearer(&alice))
            .to_request(),
    )
    .await;
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // Unknown filter values are a validation failure
    let resp = call_service(
        &app,
        TestRequest::get()
            .uri("/api/projects?category=underwater")
            .insert_header(bearer(&alice))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Bob cannot update or delete Alice's project
    let resp = call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/api/projects/{project_id}"))
            .insert_header(bearer(&bob))
            .set_json(json!({"status": "completed"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Alice can
    let resp = call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/api/projects/{project_id}"))
            .insert_header(bearer(&alice))
            .set_json(json!({"status": "completed"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "completed");

    // Like flips
    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/projects/{project_id}/like"))
            .insert_header(bearer(&bob))
            .to_request(),
    )
    .await;
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["data"]["likes"], 1);

    let resp = call_service(
        &app,
        TestRequest::delete()
            .uri(&format!("/api/projects/{project_id}"))
            .insert_header(bearer(&alice))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}
