//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

use lapcare_core::locale::{Locale, DEFAULT_LOCALE};

/// Default page size for paginated listings.
const DEFAULT_LIMIT: i64 = 50;

/// Hard cap on page size.
const MAX_LIMIT: i64 = 200;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Clamp the requested limit into `[1, MAX_LIMIT]`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Non-negative offset.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Locale selector for public content endpoints (`?locale=vi|en`).
///
/// Absent means the Vietnamese base locale. An unknown tag is rejected by
/// serde before the handler runs.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleParams {
    pub locale: Option<Locale>,
}

impl LocaleParams {
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or(DEFAULT_LOCALE)
    }
}

/// Query parameters for admin list endpoints with an `include_inactive` flag.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}
