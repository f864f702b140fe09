//! Domain logic for the LapCare repair-shop backend.
//!
//! Pure types and functions shared by the database and API layers:
//! error taxonomy, locales and translation sets, the tracking-code
//! format, order status, and role names. No I/O lives here.

pub mod error;
pub mod locale;
pub mod order_status;
pub mod roles;
pub mod tracking;
pub mod translations;
pub mod types;
