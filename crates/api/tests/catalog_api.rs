//! HTTP-level integration tests for the bilingual content catalog:
//! categories, services, posts, and static content blocks.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json_auth, put_json_auth};
use sqlx::PgPool;

use lapcare_api::auth::jwt::generate_access_token;
use lapcare_api::auth::password::hash_password;
use lapcare_core::roles::ROLE_RECEPTIONIST;
use lapcare_db::models::user::CreateUser;
use lapcare_db::repositories::UserRepo;

async fn staff_token(pool: &PgPool) -> String {
    let input = CreateUser {
        username: "editor".to_string(),
        email: "editor@test.com".to_string(),
        password_hash: hash_password("irrelevant-pw").unwrap(),
        role: ROLE_RECEPTIONIST.to_string(),
    };
    let user = UserRepo::create(pool, &input).await.unwrap();
    generate_access_token(user.id, ROLE_RECEPTIONIST, &common::test_config().jwt).unwrap()
}

fn vi_only_category() -> serde_json::Value {
    serde_json::json!({
        "translations": {
            "vi": { "name": "Sửa màn hình", "slug": "sua-man-hinh" }
        }
    })
}

/// A Vietnamese-only category renders in `vi` and falls back to `vi` when
/// English is requested.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_locale_fallback(pool: PgPool) {
    let token = staff_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/admin/categories", &token, vi_only_category()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Requested vi: rendered in vi.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/categories/{id}?locale=vi")).await).await;
    assert_eq!(json["data"]["locale"], "vi");
    assert_eq!(json["data"]["name"], "Sửa màn hình");

    // Requested en: falls back to vi, and says so.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/categories/{id}?locale=en")).await).await;
    assert_eq!(json["data"]["locale"], "vi");
    assert_eq!(json["data"]["name"], "Sửa màn hình");
}

/// Updating with only the `en` locale adds it without touching `vi`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_translation_merge(pool: PgPool) {
    let token = staff_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json_auth(app, "/api/v1/admin/categories", &token, vi_only_category()).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let patch = serde_json::json!({
        "translations": {
            "en": { "name": "Screen repair", "slug": "screen-repair" }
        }
    });
    let response =
        put_json_auth(app, &format!("/api/v1/admin/categories/{id}"), &token, patch).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["translations"]["vi"]["name"], "Sửa màn hình");
    assert_eq!(json["data"]["translations"]["en"]["name"], "Screen repair");

    // The English slug now resolves, in English.
    let app = common::build_test_app(pool);
    let json = body_json(
        get(app, "/api/v1/categories/slug/screen-repair?locale=en").await,
    )
    .await;
    assert_eq!(json["data"]["locale"], "en");
    assert_eq!(json["data"]["id"], id);
}

/// Creating with an empty translation set is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_requires_at_least_one_locale(pool: PgPool) {
    let token = staff_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "translations": {} });
    let response = post_json_auth(app, "/api/v1/admin/categories", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Slug lookup is per-locale: a vi slug does not resolve under en.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_slug_lookup_is_per_locale(pool: PgPool) {
    let token = staff_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(app, "/api/v1/admin/categories", &token, vi_only_category()).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/categories/slug/sua-man-hinh?locale=vi").await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories/slug/sua-man-hinh?locale=en").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Two categories cannot share a slug within one locale (409), but the same
/// slug in different locales is fine.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_slug_unique_per_locale(pool: PgPool) {
    let token = staff_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/admin/categories", &token, vi_only_category()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same vi slug again: conflict.
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/admin/categories", &token, vi_only_category()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Same string as an en slug on another category: allowed.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "translations": {
            "en": { "name": "Screen repair", "slug": "sua-man-hinh" }
        }
    });
    let response = post_json_auth(app, "/api/v1/admin/categories", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// An unknown locale tag is rejected before the handler runs.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_locale_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories?locale=fr").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Inactive services are hidden from the public list but visible to staff.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inactive_service_hidden_from_public(pool: PgPool) {
    let token = staff_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "translations": {
            "vi": { "name": "Vệ sinh laptop", "description": "Vệ sinh toàn bộ máy", "slug": "ve-sinh" }
        },
        "is_active": false,
        "price": 150000
    });
    let response = post_json_auth(app, "/api/v1/admin/services", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/services").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    // Anonymous access to the admin list is rejected.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/admin/services?include_inactive=true").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Staff see it with include_inactive.
    let app = common::build_test_app(pool);
    let response =
        common::get_auth(app, "/api/v1/admin/services?include_inactive=true", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// Draft posts are invisible publicly until published; publishing stamps
/// `published_at`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_post_publish_flow(pool: PgPool) {
    let token = staff_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "translations": {
            "vi": { "title": "Mẹo bảo quản pin", "body": "Nội dung...", "slug": "meo-pin" }
        }
    });
    let created = body_json(post_json_auth(app, "/api/v1/admin/posts", &token, body).await).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["is_published"], false);

    // Not yet public.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/posts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Publish.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        put_json_auth(
            app,
            &format!("/api/v1/admin/posts/{id}"),
            &token,
            serde_json::json!({ "is_published": true }),
        )
        .await,
    )
    .await;
    assert!(json["data"]["published_at"].is_string());

    // Now public, by id and by slug.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/posts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/posts/slug/meo-pin").await).await;
    assert_eq!(json["data"]["title"], "Mẹo bảo quản pin");
}

/// Static content blocks resolve by key with locale fallback.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_static_content_by_key(pool: PgPool) {
    let token = staff_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "key": "home.hero",
        "translations": {
            "vi": { "title": "Sửa laptop lấy ngay", "body": "Uy tín tại quận 3" },
            "en": { "title": "Same-day laptop repair", "body": "Trusted in District 3" }
        }
    });
    let response = post_json_auth(app, "/api/v1/admin/content", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/content/home.hero?locale=en").await).await;
    assert_eq!(json["data"]["locale"], "en");
    assert_eq!(json["data"]["title"], "Same-day laptop repair");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/content/no.such.key").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
