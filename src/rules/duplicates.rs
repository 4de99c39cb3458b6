//! Keys defined in more than one string table.

use std::collections::BTreeSet;

use crate::catalog::StringCatalog;

/// Keys present in both tables, sorted.
///
/// Every key counts, including entries opted out of translation: a shared
/// key is a naming collision regardless of its content.
pub fn find_duplicate_keys(first: &StringCatalog, second: &StringCatalog) -> BTreeSet<String> {
    first
        .keys()
        .filter(|key| second.contains_key(key))
        .map(str::to_string)
        .collect()
}
