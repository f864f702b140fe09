pub mod auth;
pub mod categories;
pub mod contact;
pub mod customers;
pub mod faqs;
pub mod health;
pub mod orders;
pub mod posts;
pub mod public;
pub mod services;
pub mod static_content;
pub mod testimonials;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
/// /auth/refresh                                refresh (public)
/// /auth/logout                                 logout (requires auth)
///
/// /track                                       public order tracking (code+phone)
/// /bookings                                    public booking form (POST)
/// /contact                                     public contact form (POST)
///
/// /categories[, /{id}, /slug/{slug}]           public localized reads
/// /services[, /{id}, /slug/{slug}]             public localized reads
/// /faqs                                        public localized reads
/// /testimonials                                public localized reads
/// /posts[, /{id}, /slug/{slug}]                public localized reads (published)
/// /content/{key}                               public localized read by key
///
/// /admin/categories[, /{id}]                   staff CRUD
/// /admin/services[, /{id}]                     staff CRUD
/// /admin/faqs[, /{id}]                         staff CRUD
/// /admin/testimonials[, /{id}]                 staff CRUD
/// /admin/posts[, /{id}]                        staff CRUD
/// /admin/content[, /{id}]                      staff CRUD
///
/// /admin/customers[, /{id}]                    staff CRUD
/// /admin/orders[, /{id}, /{id}/notes]          staff CRUD + notes
/// /admin/contact-messages[, /{id}/handled]     staff inbox
/// /admin/users[, /{id}, /{id}/reset-password]  admin user management
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        // Public site endpoints.
        .merge(public::router())
        .nest("/categories", categories::public_router())
        .nest("/services", services::public_router())
        .nest("/faqs", faqs::public_router())
        .nest("/testimonials", testimonials::public_router())
        .nest("/posts", posts::public_router())
        .nest("/content", static_content::public_router())
        // Staff backend.
        .nest("/admin/categories", categories::admin_router())
        .nest("/admin/services", services::admin_router())
        .nest("/admin/faqs", faqs::admin_router())
        .nest("/admin/testimonials", testimonials::admin_router())
        .nest("/admin/posts", posts::admin_router())
        .nest("/admin/content", static_content::admin_router())
        .nest("/admin/customers", customers::router())
        .nest("/admin/orders", orders::router())
        .nest("/admin/contact-messages", contact::admin_router())
        .nest("/admin/users", users::router())
}
