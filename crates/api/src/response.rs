//! The `{ "data": ... }` success envelope.
//!
//! Every successful JSON response wraps its payload in `data`, mirroring the
//! `{ "error", "code" }` shape errors use, so clients can branch on the top
//! key alone. Auth responses are the one exception: tokens are returned at
//! the top level.

use serde::Serialize;

/// Success envelope; `T` is a row, a view, or a `Vec` of either.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
