pub mod category_repo;
pub mod contact_message_repo;
pub mod customer_repo;
pub mod faq_repo;
pub mod order_repo;
pub mod post_repo;
pub mod service_repo;
pub mod session_repo;
pub mod static_content_repo;
pub mod testimonial_repo;
pub mod tracking_counter_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use customer_repo::CustomerRepo;
pub use faq_repo::FaqRepo;
pub use order_repo::OrderRepo;
pub use post_repo::PostRepo;
pub use service_repo::ServiceRepo;
pub use session_repo::SessionRepo;
pub use static_content_repo::StaticContentRepo;
pub use testimonial_repo::TestimonialRepo;
pub use tracking_counter_repo::TrackingCounterRepo;
pub use user_repo::UserRepo;
