//! Edits that rewrite string catalogs.
//!
//! Each edit is a pure function over an in-memory [`StringCatalog`] that
//! returns an outcome describing what changed. [`edit_catalog`] runs an edit
//! against a loaded file and rewrites it only when the outcome says so.
//!
//! ## Actions
//!
//! - [`inject_translations`]: Add caller-supplied translations (never overwrites)
//! - [`normalize_norwegian`]: Rename a lone `nb` record to `no`
//!
//! ## Example
//!
//! ```ignore
//! let mut file = CatalogFile::open(path)?;
//! let (outcome, saved) = edit_catalog(&mut file, dry_run, normalize_norwegian)?;
//! ```
//!
//! [`StringCatalog`]: crate::catalog::StringCatalog

mod inject;
mod normalize;
mod traits;

pub use inject::{
    AddedTranslation, InjectOutcome, Translations, inject_translations, load_translations,
};
pub use normalize::{NormalizeOutcome, normalize_norwegian};
pub use traits::{EditOutcome, edit_catalog};
