pub mod category;
pub mod contact_message;
pub mod customer;
pub mod faq;
pub mod order;
pub mod post;
pub mod service;
pub mod session;
pub mod static_content;
pub mod testimonial;
pub mod user;
