//! Missing translation detection.
//!
//! Finds translatable entries that lack a record for one or more target
//! locales.

use indexmap::IndexMap;

use crate::{
    catalog::{StringCatalog, StringEntry},
    locales::{NORWEGIAN, NORWEGIAN_BOKMAL, TargetLocaleSet},
};

/// Missing locale codes per string key, both in their original order.
pub type MissingTranslations = IndexMap<String, Vec<String>>;

/// How a legacy `nb` record counts towards the `no` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NorwegianPolicy {
    /// `nb` satisfies `no`. Used for early warnings before normalization.
    AcceptLegacy,
    /// Only the canonical `no` code counts.
    Strict,
}

/// Check a catalog for missing translations.
///
/// # Arguments
/// * `catalog` - The string table to scan
/// * `locales` - Target locales, checked in order
/// * `policy` - Whether `nb` satisfies the `no` target
///
/// # Returns
/// Keys with at least one missing locale, in document order. Entries with
/// `shouldTranslate: false` never appear.
pub fn check_missing_translations(
    catalog: &StringCatalog,
    locales: &TargetLocaleSet,
    policy: NorwegianPolicy,
) -> MissingTranslations {
    catalog
        .eligible_entries()
        .filter_map(|(key, entry)| {
            let missing = missing_locales(entry, locales, policy);
            (!missing.is_empty()).then(|| (key.to_string(), missing))
        })
        .collect()
}

/// Target locales the entry has no record for.
pub fn missing_locales(
    entry: &StringEntry,
    locales: &TargetLocaleSet,
    policy: NorwegianPolicy,
) -> Vec<String> {
    locales
        .iter()
        .filter(|locale| !is_covered(entry, locale, policy))
        .map(str::to_string)
        .collect()
}

fn is_covered(entry: &StringEntry, locale: &str, policy: NorwegianPolicy) -> bool {
    if entry.has_locale(locale) {
        return true;
    }
    policy == NorwegianPolicy::AcceptLegacy
        && locale == NORWEGIAN
        && entry.has_locale(NORWEGIAN_BOKMAL)
}
