//! Read-only checks over string tables.
//!
//! Pure functions: each takes the tables and locales it needs and returns
//! plain data for the CLI to report.
//!
//! ## Module Structure
//!
//! - `missing`: Missing translations per key (lenient or strict Norwegian handling)
//! - `verify`: Completeness statistics and completion rate
//! - `duplicates`: Keys defined in both tables

pub mod duplicates;
pub mod missing;
pub mod verify;

pub use duplicates::find_duplicate_keys;
pub use missing::{MissingTranslations, NorwegianPolicy, check_missing_translations};
pub use verify::{TableVerification, completion_rate, verify_catalog};
