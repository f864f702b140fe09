//! Supported content locales.
//!
//! The site is bilingual. Vietnamese is the shop's operating language and
//! acts as the base locale: UI-facing reads fall back to `vi` whenever a
//! requested translation is missing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A supported content locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Vietnamese -- the base language.
    Vi,
    /// English.
    En,
}

/// The base locale used as a fallback for missing translations.
pub const DEFAULT_LOCALE: Locale = Locale::Vi;

/// All supported locales, base locale first.
pub const ALL_LOCALES: [Locale; 2] = [Locale::Vi, Locale::En];

impl Locale {
    /// The two-letter tag used in storage and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Vi => "vi",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vi" => Ok(Locale::Vi),
            "en" => Ok(Locale::En),
            other => Err(CoreError::Validation(format!(
                "Unsupported locale '{other}'. Supported locales: vi, en"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_tags() {
        for locale in ALL_LOCALES {
            assert_eq!(locale.as_str().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn unknown_tag_rejected() {
        assert!("fr".parse::<Locale>().is_err());
        assert!("VI".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Locale::Vi).unwrap(), "\"vi\"");
        assert_eq!(
            serde_json::from_str::<Locale>("\"en\"").unwrap(),
            Locale::En
        );
    }
}
