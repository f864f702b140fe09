//! Atomic per-day sequence counter for tracking codes.
//!
//! The next sequence for a given calendar day comes from a single
//! increment-and-read statement on `tracking_counters`, so two concurrent
//! order creations can never compute the same next value. Each new day
//! starts its own row, resetting the sequence to 1.

use chrono::NaiveDate;
use sqlx::PgPool;

/// Allocates per-day tracking code sequence numbers.
pub struct TrackingCounterRepo;

impl TrackingCounterRepo {
    /// Atomically claim the next sequence number for `day`.
    ///
    /// The first call of a day returns 1. The counter keeps counting past
    /// 9999; the formatted suffix simply widens (see `lapcare_core::tracking`).
    pub async fn next_sequence(pool: &PgPool, day: NaiveDate) -> Result<u32, sqlx::Error> {
        let (seq,): (i32,) = sqlx::query_as(
            "INSERT INTO tracking_counters (day, last_seq)
             VALUES ($1, 1)
             ON CONFLICT (day)
             DO UPDATE SET last_seq = tracking_counters.last_seq + 1
             RETURNING last_seq",
        )
        .bind(day)
        .fetch_one(pool)
        .await?;
        Ok(seq as u32)
    }
}
