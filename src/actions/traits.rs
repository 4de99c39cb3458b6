//! Shared plumbing for edits that rewrite a string catalog.

use anyhow::Result;
use tracing::debug;

use crate::catalog::{CatalogFile, StringCatalog};

/// Result of an in-memory edit.
pub trait EditOutcome {
    /// True if at least one entry changed and the document needs a rewrite.
    fn is_modified(&self) -> bool;
}

/// Run `edit` on the catalog, then save the file only if something changed.
///
/// In dry-run mode the edit still runs in memory so the outcome describes
/// what would change, but nothing is written.
///
/// Returns the outcome and whether the file was written.
pub fn edit_catalog<O, F>(file: &mut CatalogFile, dry_run: bool, edit: F) -> Result<(O, bool)>
where
    O: EditOutcome,
    F: FnOnce(&mut StringCatalog) -> O,
{
    let outcome = edit(&mut file.catalog);
    let saved = outcome.is_modified() && !dry_run;
    if saved {
        file.save()?;
    } else {
        debug!(
            path = %file.path().display(),
            modified = outcome.is_modified(),
            dry_run,
            "string catalog left untouched"
        );
    }
    Ok((outcome, saved))
}
