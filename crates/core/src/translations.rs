//! Per-locale translation sets for bilingual content.
//!
//! Every translatable entity stores its localized fields as a single nested
//! object keyed by locale (`{"vi": {...}, "en": {...}}`) alongside ordinary
//! columns for the shared, non-localized fields. Because the whole set lives
//! on one row, shared fields can never drift between locales and all locales
//! are written and deleted together.
//!
//! A set may be partial: an entity created in `vi` only is valid, and the
//! missing `en` translation can be added later through [`TranslationSet::merge`].

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, DEFAULT_LOCALE};

/// The localized fields of one entity, at most one value per locale.
///
/// `T` is the entity-specific translation payload (e.g. name/description/slug
/// for a service, question/answer for an FAQ).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationSet<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vi: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<T>,
}

impl<T> TranslationSet<T> {
    /// A set with a single locale populated.
    pub fn single(locale: Locale, value: T) -> Self {
        let mut set = Self { vi: None, en: None };
        set.insert(locale, value);
        set
    }

    /// Strict per-locale lookup. `None` when that locale is absent, even if
    /// the entity exists in other locales.
    pub fn get(&self, locale: Locale) -> Option<&T> {
        match locale {
            Locale::Vi => self.vi.as_ref(),
            Locale::En => self.en.as_ref(),
        }
    }

    /// UI-facing lookup with fallback to the base locale.
    ///
    /// Returns the translation for `locale` when present, otherwise the
    /// Vietnamese base translation. The returned locale tells the caller
    /// which language actually won. `None` only for an empty set.
    pub fn resolve(&self, locale: Locale) -> Option<(Locale, &T)> {
        self.get(locale)
            .map(|t| (locale, t))
            .or_else(|| self.get(DEFAULT_LOCALE).map(|t| (DEFAULT_LOCALE, t)))
    }

    /// Set or replace one locale's translation.
    pub fn insert(&mut self, locale: Locale, value: T) {
        match locale {
            Locale::Vi => self.vi = Some(value),
            Locale::En => self.en = Some(value),
        }
    }

    /// Per-locale upsert used by the update path.
    ///
    /// Locales present in `patch` replace the current translation; locales
    /// absent from `patch` are left untouched. Adding a missing locale to an
    /// existing entity goes through here.
    pub fn merge(&mut self, patch: TranslationSet<T>) {
        if let Some(vi) = patch.vi {
            self.vi = Some(vi);
        }
        if let Some(en) = patch.en {
            self.en = Some(en);
        }
    }

    /// Locales currently populated, base locale first.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales = Vec::with_capacity(2);
        if self.vi.is_some() {
            locales.push(Locale::Vi);
        }
        if self.en.is_some() {
            locales.push(Locale::En);
        }
        locales
    }

    /// Iterate over populated `(locale, translation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
        self.vi
            .iter()
            .map(|t| (Locale::Vi, t))
            .chain(self.en.iter().map(|t| (Locale::En, t)))
    }

    /// `true` when no locale is populated.
    pub fn is_empty(&self) -> bool {
        self.vi.is_none() && self.en.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(vi: Option<&str>, en: Option<&str>) -> TranslationSet<String> {
        TranslationSet {
            vi: vi.map(String::from),
            en: en.map(String::from),
        }
    }

    #[test]
    fn strict_get_does_not_fall_back() {
        let s = set(Some("sửa laptop"), None);
        assert_eq!(s.get(Locale::Vi).map(String::as_str), Some("sửa laptop"));
        assert_eq!(s.get(Locale::En), None);
    }

    #[test]
    fn resolve_falls_back_to_vietnamese() {
        let s = set(Some("sửa laptop"), None);
        let (locale, text) = s.resolve(Locale::En).unwrap();
        assert_eq!(locale, Locale::Vi);
        assert_eq!(text, "sửa laptop");
    }

    #[test]
    fn resolve_prefers_requested_locale_when_present() {
        let s = set(Some("sửa laptop"), Some("laptop repair"));
        let (locale, text) = s.resolve(Locale::En).unwrap();
        assert_eq!(locale, Locale::En);
        assert_eq!(text, "laptop repair");
    }

    #[test]
    fn resolve_on_empty_set_is_none() {
        let s: TranslationSet<String> = TranslationSet::default();
        assert!(s.is_empty());
        assert!(s.resolve(Locale::En).is_none());
    }

    #[test]
    fn merge_upserts_only_submitted_locales() {
        let mut s = set(Some("cũ"), Some("old"));
        s.merge(set(None, Some("new")));
        assert_eq!(s.get(Locale::Vi).map(String::as_str), Some("cũ"));
        assert_eq!(s.get(Locale::En).map(String::as_str), Some("new"));
    }

    #[test]
    fn merge_adds_a_missing_locale() {
        let mut s = set(Some("chỉ tiếng việt"), None);
        s.merge(set(None, Some("now in english")));
        assert_eq!(s.locales(), vec![Locale::Vi, Locale::En]);
    }

    #[test]
    fn locales_lists_base_locale_first() {
        assert_eq!(set(Some("a"), Some("b")).locales(), vec![Locale::Vi, Locale::En]);
        assert_eq!(set(None, Some("b")).locales(), vec![Locale::En]);
    }

    #[test]
    fn serde_omits_absent_locales() {
        let json = serde_json::to_string(&set(Some("xin chào"), None)).unwrap();
        assert_eq!(json, "{\"vi\":\"xin chào\"}");

        let parsed: TranslationSet<String> = serde_json::from_str("{\"en\":\"hi\"}").unwrap();
        assert_eq!(parsed, set(None, Some("hi")));
    }
}
