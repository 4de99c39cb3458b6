//! Completeness verification.
//!
//! Stricter than the early check: a legacy `nb` record does not satisfy the
//! `no` target, so a table only passes once it has been normalized.

use crate::{
    catalog::StringCatalog,
    locales::TargetLocaleSet,
    rules::missing::{MissingTranslations, NorwegianPolicy, missing_locales},
};

/// Verification outcome for one string table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableVerification {
    /// Entries not opted out with `shouldTranslate: false`.
    pub total: usize,
    /// Eligible entries with a record for every target locale.
    pub complete: usize,
    pub missing: MissingTranslations,
}

impl TableVerification {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn completion_rate(&self) -> f64 {
        completion_rate(self.complete, self.total)
    }
}

pub fn verify_catalog(catalog: &StringCatalog, locales: &TargetLocaleSet) -> TableVerification {
    let mut result = TableVerification::default();

    for (key, entry) in catalog.eligible_entries() {
        result.total += 1;
        let missing = missing_locales(entry, locales, NorwegianPolicy::Strict);
        if missing.is_empty() {
            result.complete += 1;
        } else {
            result.missing.insert(key.to_string(), missing);
        }
    }

    result
}

/// Percentage of fully translated entries, `0.0` for an empty table.
pub fn completion_rate(complete: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    complete as f64 / total as f64 * 100.0
}
