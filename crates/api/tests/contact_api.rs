//! HTTP-level integration tests for the public contact form and the staff
//! contact inbox.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

use lapcare_api::auth::jwt::generate_access_token;
use lapcare_api::auth::password::hash_password;
use lapcare_core::roles::ROLE_RECEPTIONIST;
use lapcare_db::models::user::CreateUser;
use lapcare_db::repositories::UserRepo;

async fn staff_token(pool: &PgPool) -> String {
    let input = CreateUser {
        username: "inbox".to_string(),
        email: "inbox@test.com".to_string(),
        password_hash: hash_password("irrelevant-pw").unwrap(),
        role: ROLE_RECEPTIONIST.to_string(),
    };
    let user = UserRepo::create(pool, &input).await.unwrap();
    generate_access_token(user.id, ROLE_RECEPTIONIST, &common::test_config().jwt).unwrap()
}

fn contact_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Phạm Thị Hoa",
        "phone": "0912345678",
        "subject": "Hỏi giá thay pin",
        "message": "Pin MacBook Air 2020 thay hết bao nhiêu ạ?"
    })
}

/// A valid submission is accepted with 201 and lands in the staff inbox.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_contact_submission_reaches_inbox(pool: PgPool) {
    let token = staff_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/contact", contact_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/admin/contact-messages", &token).await).await;
    let messages = json["data"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["name"], "Phạm Thị Hoa");
    assert_eq!(messages[0]["is_handled"], false);
}

/// A submission with neither phone nor email is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_contact_requires_phone_or_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Ẩn danh",
        "message": "Không để lại liên hệ"
    });
    let response = post_json(app, "/api/v1/contact", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("phone or email"), "unexpected error: {error}");
}

/// `unhandled_only` filters out messages already marked handled.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inbox_unhandled_filter(pool: PgPool) {
    let token = staff_token(&pool).await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/contact", contact_body()).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/admin/contact-messages", &token).await).await;
    let first_id = json["data"][0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/contact-messages/{first_id}/handled"),
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(
        get_auth(
            app,
            "/api/v1/admin/contact-messages?unhandled_only=true",
            &token,
        )
        .await,
    )
    .await;
    let remaining = json["data"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_ne!(remaining[0]["id"].as_i64().unwrap(), first_id);
}

/// Marking an already-handled message again returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_mark_handled_not_repeatable(pool: PgPool) {
    let token = staff_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/contact", contact_body()).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/admin/contact-messages", &token).await).await;
    let id = json["data"][0]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/admin/contact-messages/{id}/handled");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, &uri, &token, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, &uri, &token, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The inbox is staff-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inbox_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/admin/contact-messages").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
