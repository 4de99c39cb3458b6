//! Norwegian locale code normalization.
//!
//! Translation platforms may deliver Norwegian as `nb` (Bokmål) while the
//! App Store metadata expects `no`. A lone `nb` record is renamed to `no`.
//! When both codes exist the entry is left alone: the two records may hold
//! different text and neither is discarded.

use tracing::debug;

use super::traits::EditOutcome;
use crate::{
    catalog::StringCatalog,
    locales::{NORWEGIAN, NORWEGIAN_BOKMAL},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOutcome {
    /// Keys whose `nb` record was renamed to `no`.
    pub renamed: Vec<String>,
    /// Keys holding both `nb` and `no`, left untouched.
    pub conflicts: Vec<String>,
}

impl EditOutcome for NormalizeOutcome {
    fn is_modified(&self) -> bool {
        !self.renamed.is_empty()
    }
}

pub fn normalize_norwegian(catalog: &mut StringCatalog) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();

    for (key, entry) in catalog.strings.iter_mut() {
        let Some(localizations) = entry.existing_localizations_mut() else {
            continue;
        };
        if !localizations.contains_key(NORWEGIAN_BOKMAL) {
            continue;
        }
        if localizations.contains_key(NORWEGIAN) {
            outcome.conflicts.push(key.clone());
            continue;
        }

        if let Some(record) = localizations.shift_remove(NORWEGIAN_BOKMAL) {
            localizations.insert(NORWEGIAN.to_string(), record);
            debug!(key = %key, "renamed nb to no");
            outcome.renamed.push(key.clone());
        }
    }

    outcome
}
