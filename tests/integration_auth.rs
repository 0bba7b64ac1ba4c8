mod common;

use axum::http::StatusCode;
use classdesk::middleware::role::UserRole;
use common::{body_json, create_test_user, generate_unique_email, json_request, setup_test_app};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test]
async fn test_register_success(pool: PgPool) {
    let app = setup_test_app(pool).await;
    let email = generate_unique_email();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Ana Souza",
                "email": email,
                "password": "supersecret1"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Ana Souza");
    assert_eq!(body["email"], email);
    assert!(body["id"].as_i64().unwrap() >= 1);
    assert!(body.get("password").is_none());
}

#[sqlx::test]
async fn test_register_ids_strictly_increasing(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let mut last_id = 0;
    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/register",
                None,
                Some(json!({
                    "name": "Test User",
                    "email": generate_unique_email(),
                    "password": "supersecret1"
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let id = body_json(response).await["id"].as_i64().unwrap();
        assert!(id > last_id);
        last_id = id;
    }
}

#[sqlx::test]
async fn test_register_duplicate_email(pool: PgPool) {
    let app = setup_test_app(pool).await;
    let email = generate_unique_email();

    let register = |email: String| {
        json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Test User",
                "email": email,
                "password": "supersecret1"
            })),
        )
    };

    let first = app.clone().oneshot(register(email.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.clone().oneshot(register(email.clone())).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    // Same address in a different case is still a duplicate.
    let third = app.oneshot(register(email.to_uppercase())).await.unwrap();
    assert_eq!(third.status(), StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_register_blank_name(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "",
                "email": generate_unique_email(),
                "password": "supersecret1"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_register_missing_field(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Test User",
                "email": generate_unique_email()
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_login_success(pool: PgPool) {
    let app = setup_test_app(pool).await;
    let email = generate_unique_email();

    let register = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Test User",
                "email": email,
                "password": "supersecret1"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(register.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({
                "email": email,
                "password": "supersecret1"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert!(body.get("expires_at").is_some());
}

#[sqlx::test]
async fn test_login_failures_are_indistinguishable(pool: PgPool) {
    let app = setup_test_app(pool).await;
    let email = generate_unique_email();

    let register = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Test User",
                "email": email,
                "password": "supersecret1"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(register.status(), StatusCode::CREATED);

    let wrong_password = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({
                "email": email,
                "password": "wrongpassword"
            })),
        ))
        .await
        .unwrap();

    let unknown_email = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({
                "email": generate_unique_email(),
                "password": "supersecret1"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // The two rejections must not reveal whether the address exists.
    let body1 = body_json(wrong_password).await;
    let body2 = body_json(unknown_email).await;
    assert_eq!(body1, body2);
}

#[sqlx::test]
async fn test_protected_route_requires_token(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/students", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_protected_route_with_valid_token(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (_, token) = create_test_user(&pool, UserRole::User).await;

    let response = app
        .oneshot(json_request("GET", "/api/students", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test]
async fn test_protected_route_malformed_token(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "GET",
            "/api/students",
            Some("not.a.token"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_delete_forbidden_for_regular_user(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (_, user_token) = create_test_user(&pool, UserRole::User).await;

    let create = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/students",
            Some(&user_token),
            Some(json!({
                "name": "Ana",
                "age": 20,
                "email": "ana@ex.com",
                "birth_date": "2005-01-10"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(create.status(), StatusCode::CREATED);
    let id = body_json(create).await["id"].as_i64().unwrap();

    // Authenticated but not authorized: 403, not 401.
    let response = app
        .oneshot(json_request(
            "DELETE",
            &format!("/api/students/{}", id),
            Some(&user_token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test]
async fn test_delete_allowed_for_admin(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (_, user_token) = create_test_user(&pool, UserRole::User).await;
    let (_, admin_token) = create_test_user(&pool, UserRole::Admin).await;

    let create = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/students",
            Some(&user_token),
            Some(json!({
                "name": "Ana",
                "age": 20,
                "email": "ana@ex.com",
                "birth_date": "2005-01-10"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(create.status(), StatusCode::CREATED);
    let id = body_json(create).await["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request(
            "DELETE",
            &format!("/api/students/{}", id),
            Some(&admin_token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
