//! xcstrings-check - translation completeness tooling for Xcode string catalogs
//!
//! Scans `.xcstrings` tables for strings that lack a record in any target
//! locale, merges supplied translations without overwriting, renames
//! Norwegian Bokmål (`nb`) records to `no`, and verifies completeness across
//! two tables including duplicate key detection.
//!
//! ## Module Structure
//!
//! - `catalog`: String catalog document model, lossless load and save
//! - `locales`: Target locale set
//! - `rules`: Read-only analyses (missing translations, verification, duplicates)
//! - `actions`: Catalog edits (translation injection, Norwegian normalization)
//! - `config`: Configuration file loading and validation
//! - `cli`: Command-line interface layer

pub mod actions;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod locales;
pub mod rules;
