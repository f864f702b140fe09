//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod booking;
pub mod categories;
pub mod contact;
pub mod customers;
pub mod faqs;
pub mod orders;
pub mod posts;
pub mod services;
pub mod static_content;
pub mod testimonials;
pub mod tracking;
pub mod users;
