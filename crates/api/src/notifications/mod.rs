//! Outbound notifications.
//!
//! Currently email only: booking confirmations to customers and new-message
//! alerts to the shop inbox. Delivery is best-effort; a failed send never
//! fails the request that triggered it.

pub mod email;
