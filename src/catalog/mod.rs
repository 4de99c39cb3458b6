//! Xcode string catalog (`.xcstrings`) document model.
//!
//! - `types`: typed view of the document with lossless unknown fields
//! - `file`: loading and whole-document rewrites

mod file;
mod types;

pub use file::*;
pub use types::*;
