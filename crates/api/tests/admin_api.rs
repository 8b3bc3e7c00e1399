//! HTTP-level integration tests for the admin console and the secret-gated
//! first-admin bootstrap.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{
    auth_token, body_json, build_app_with_config, build_test_app, get, get_auth, post_json,
    post_json_auth, put_json_auth, test_config, TEST_BOOTSTRAP_SECRET,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Sync a fresh account and return its token.
async fn synced_user(app: &Router, subject: &str, email: &str) -> String {
    let token = auth_token(subject);
    let response = post_json_auth(
        app.clone(),
        "/api/v1/users/sync",
        json!({ "name": subject, "email": email }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    token
}

/// Bootstrap the caller into the first admin.
async fn bootstrap(app: &Router, token: &str) -> axum::http::Response<axum::body::Body> {
    post_json_auth(
        app.clone(),
        "/api/v1/admin/bootstrap",
        json!({ "secret": TEST_BOOTSTRAP_SECRET }),
        token,
    )
    .await
}

// ---------------------------------------------------------------------------
// Test: bootstrap promotes exactly one first admin
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_promotes_first_admin_once(pool: PgPool) {
    let app = build_test_app(pool);
    let first = synced_user(&app, "idp|boot-first", "first@example.com").await;
    let second = synced_user(&app, "idp|boot-second", "second@example.com").await;

    let response = bootstrap(&app, &first).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "admin");

    // Once an admin exists, bootstrap is dead for everyone.
    let response = bootstrap(&app, &second).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Even for the admin themselves.
    let response = bootstrap(&app, &first).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_rejects_wrong_secret(pool: PgPool) {
    let app = build_test_app(pool);
    let token = synced_user(&app, "idp|boot-wrong", "wrong@example.com").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/bootstrap",
        json!({ "secret": "guessed-wrong" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The caller stayed a customer.
    let response = get_auth(app.clone(), "/api/v1/users/me", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "customer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_disabled_when_secret_unset(pool: PgPool) {
    let mut config = test_config();
    config.admin_bootstrap_secret = None;
    let app = build_app_with_config(pool, config);

    let token = synced_user(&app, "idp|boot-off", "off@example.com").await;
    let response = bootstrap(&app, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_requires_auth(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app.clone(),
        "/api/v1/admin/bootstrap",
        json!({ "secret": TEST_BOOTSTRAP_SECRET }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: admin console is role-gated
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_console_rejects_non_admins(pool: PgPool) {
    let app = build_test_app(pool);
    let customer = synced_user(&app, "idp|console-cust", "cust@example.com").await;

    let response = get_auth(app.clone(), "/api/v1/admin/users", &customer).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app.clone(), "/api/v1/admin/orgs", &customer).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get(app.clone(), "/api/v1/admin/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: role management
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_can_change_roles(pool: PgPool) {
    let app = build_test_app(pool);
    let admin = synced_user(&app, "idp|role-admin", "admin@example.com").await;
    let target = synced_user(&app, "idp|role-target", "target@example.com").await;
    assert_eq!(bootstrap(&app, &admin).await.status(), StatusCode::OK);

    // Find the target's id through the user listing.
    let response = get_auth(app.clone(), "/api/v1/admin/users", &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let target_id = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["external_id"] == "idp|role-target")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/users/{target_id}/role"),
        json!({ "role": "restaurant_owner" }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "restaurant_owner");

    // The promotion is visible on the target's next request.
    let response = get_auth(app.clone(), "/api/v1/users/me", &target).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "restaurant_owner");

    // Unknown roles are rejected.
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/users/{target_id}/role"),
        json!({ "role": "superuser" }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown users 404.
    let response = put_json_auth(
        app.clone(),
        "/api/v1/admin/users/999999/role",
        json!({ "role": "customer" }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: restaurant moderation hides deactivated restaurants everywhere
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivated_restaurants_vanish_from_public_surfaces(pool: PgPool) {
    let app = build_test_app(pool);
    let admin = synced_user(&app, "idp|mod-admin", "admin@example.com").await;
    assert_eq!(bootstrap(&app, &admin).await.status(), StatusCode::OK);

    // Admins can create restaurants under any org; set one up directly.
    let owner = synced_user(&app, "idp|mod-owner", "owner@example.com").await;
    let response = post_json_auth(
        app.clone(),
        "/api/v1/orgs",
        json!({ "name": "Mod Co" }),
        &owner,
    )
    .await;
    let org_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/restaurants",
        json!({
            "org_id": org_id,
            "name": "Mod Bistro",
            "slug": "mod-bistro",
            "address": "1 Main St",
            "lat": 0.0,
            "lng": 0.0,
            "tags": [],
            "walk_in_only": false,
            "open_hours": [],
            "photos": [],
            "settings": { "sms_enabled": false, "buffer_mins": 5, "paging_message": "Ready" }
        }),
        &owner,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let restaurant_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/restaurants/{restaurant_id}/status"),
        json!({ "is_active": false }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Hidden from listing, slug lookup, waitlist status, and joins.
    let response = get(app.clone(), "/api/v1/restaurants").await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let response = get(app.clone(), "/api/v1/restaurants/slug/mod-bistro").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(
        app.clone(),
        &format!("/api/v1/restaurants/{restaurant_id}/waitlist/join"),
        json!({ "name": "Ada", "party_size": 2, "source": "remote" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Still visible to the admin console.
    let response = get_auth(app.clone(), "/api/v1/admin/restaurants", &admin).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["is_active"], false);

    // Reactivation restores public visibility.
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/restaurants/{restaurant_id}/status"),
        json!({ "is_active": true }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app.clone(), "/api/v1/restaurants/slug/mod-bistro").await;
    assert_eq!(response.status(), StatusCode::OK);
}
