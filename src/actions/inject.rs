//! Additive translation injection.
//!
//! Merges caller-supplied translations into a catalog. Existing records are
//! never overwritten and keys unknown to the catalog are skipped.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::debug;

use super::traits::EditOutcome;
use crate::catalog::{LocalizationRecord, StringCatalog};

/// Translations to add: string key → locale code → text.
pub type Translations = IndexMap<String, IndexMap<String, String>>;

/// One record created by the injector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedTranslation {
    pub key: String,
    pub locale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectOutcome {
    pub added: Vec<AddedTranslation>,
    /// Supplied keys that do not exist in the catalog.
    pub unknown_keys: Vec<String>,
    /// Supplied translations ignored because a record already existed.
    pub skipped_existing: usize,
}

impl EditOutcome for InjectOutcome {
    fn is_modified(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Add translations to a catalog.
///
/// # Arguments
/// * `catalog` - The string table to modify in place
/// * `translations` - Text to add per key and locale
///
/// # Returns
/// What was added, which keys were unknown, and how many supplied
/// translations were skipped because the locale already had a record.
pub fn inject_translations(
    catalog: &mut StringCatalog,
    translations: &Translations,
) -> InjectOutcome {
    let mut outcome = InjectOutcome::default();

    for (key, by_locale) in translations {
        let Some(entry) = catalog.strings.get_mut(key) else {
            debug!(key = %key, "skipping translations for unknown key");
            outcome.unknown_keys.push(key.clone());
            continue;
        };

        let localizations = entry.localizations_mut();
        for (locale, value) in by_locale {
            if localizations.contains_key(locale) {
                outcome.skipped_existing += 1;
                continue;
            }
            localizations.insert(locale.clone(), LocalizationRecord::translated(value.as_str()));
            debug!(key = %key, locale = %locale, "added translation");
            outcome.added.push(AddedTranslation {
                key: key.clone(),
                locale: locale.clone(),
            });
        }
    }

    outcome
}

/// Load an injector input file of the form `{"key": {"locale": "text"}}`.
pub fn load_translations(path: &Path) -> Result<Translations> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translations file: {}", path.display()))?;
    let translations: Translations = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse translations file: {}", path.display()))?;
    debug!(
        path = %path.display(),
        keys = translations.len(),
        "loaded translations"
    );
    Ok(translations)
}
