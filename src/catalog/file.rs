use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::StringCatalog;

/// A string catalog loaded from disk, written back as a whole.
///
/// Output is pretty-printed with 2-space indentation, non-ASCII text is kept
/// as-is and the file always ends with a newline. Object keys are written in
/// the order they were read; keys added since then follow the existing ones.
#[derive(Debug)]
pub struct CatalogFile {
    path: PathBuf,
    pub catalog: StringCatalog,
    /// The document as read, used only for its key order.
    layout: Value,
}

impl CatalogFile {
    /// Read and parse a catalog. A malformed document is an error.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let layout: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse string catalog: {}", path.display()))?;
        let catalog = StringCatalog::deserialize(&layout)
            .with_context(|| format!("Failed to parse string catalog: {}", path.display()))?;
        debug!(
            path = %path.display(),
            entries = catalog.strings.len(),
            "loaded string catalog"
        );
        Ok(Self {
            path: path.to_path_buf(),
            catalog,
            layout,
        })
    }

    /// Like [`CatalogFile::open`], but `Ok(None)` when the file does not exist.
    pub fn open_if_exists(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            debug!(path = %path.display(), "string catalog not found");
            return Ok(None);
        }
        Self::open(path).map(Some)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full document back to where it was read from.
    pub fn save(&self) -> Result<()> {
        let content = render_catalog(&self.catalog, Some(&self.layout))?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;
        debug!(path = %self.path.display(), "saved string catalog");
        Ok(())
    }
}

/// Serialize a catalog, following the key order of `layout` when given.
pub fn render_catalog(catalog: &StringCatalog, layout: Option<&Value>) -> Result<String> {
    let mut value = serde_json::to_value(catalog).context("Failed to serialize string catalog")?;
    if let Some(layout) = layout {
        restore_key_order(&mut value, layout);
    }
    let mut content =
        serde_json::to_string_pretty(&value).context("Failed to serialize string catalog")?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}

fn restore_key_order(value: &mut Value, layout: &Value) {
    match (value, layout) {
        (Value::Object(map), Value::Object(original)) => {
            let position: HashMap<&str, usize> = original
                .keys()
                .enumerate()
                .map(|(index, key)| (key.as_str(), index))
                .collect();
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            // Stable: new keys keep their relative order at the end.
            entries.sort_by_key(|(key, _)| position.get(key.as_str()).copied().unwrap_or(usize::MAX));
            for (key, child) in entries.iter_mut() {
                if let Some(original_child) = original.get(key) {
                    restore_key_order(child, original_child);
                }
            }
            *map = entries.into_iter().collect();
        }
        (Value::Array(items), Value::Array(original)) => {
            for (item, original_item) in items.iter_mut().zip(original) {
                restore_key_order(item, original_item);
            }
        }
        _ => {}
    }
}
