use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// State written for every record this tool creates.
pub const TRANSLATED_STATE: &str = "translated";

/// A whole string catalog document.
///
/// Only `strings` is interpreted; every other top-level field
/// (`sourceLanguage`, `version`, ...) is kept in `extra` and written back as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StringCatalog {
    #[serde(default)]
    pub strings: IndexMap<String, StringEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One string key.
///
/// The optional fields are doubly wrapped: `None` when the field is absent,
/// `Some(None)` for an explicit `null`. Both are written back as read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringEntry {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub should_translate: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub localizations: Option<Option<IndexMap<String, LocalizationRecord>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationRecord {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub string_unit: Option<Option<StringUnit>>,
    /// `variations`, `substitutions` and anything else Xcode writes.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `stringUnit` object, kept verbatim.
///
/// Units of any shape load; `state` and `value` are read on demand.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StringUnit {
    fields: Map<String, Value>,
}

impl StringCatalog {
    pub fn contains_key(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    /// Entries that take part in completeness checks, in document order.
    pub fn eligible_entries(&self) -> impl Iterator<Item = (&str, &StringEntry)> {
        self.strings
            .iter()
            .filter(|(_, entry)| entry.is_translatable())
            .map(|(key, entry)| (key.as_str(), entry))
    }
}

impl StringEntry {
    /// Only an explicit `"shouldTranslate": false` opts an entry out.
    pub fn is_translatable(&self) -> bool {
        self.should_translate != Some(Some(false))
    }

    /// Localizations, `None` when absent or `null`.
    pub fn localizations(&self) -> Option<&IndexMap<String, LocalizationRecord>> {
        self.localizations.as_ref().and_then(Option::as_ref)
    }

    /// Like [`StringEntry::localizations`], but mutable.
    pub fn existing_localizations_mut(
        &mut self,
    ) -> Option<&mut IndexMap<String, LocalizationRecord>> {
        self.localizations.as_mut().and_then(Option::as_mut)
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.localizations()
            .is_some_and(|locs| locs.contains_key(locale))
    }

    /// Localizations container, created empty when the entry has none yet.
    pub fn localizations_mut(&mut self) -> &mut IndexMap<String, LocalizationRecord> {
        self.localizations
            .get_or_insert(None)
            .get_or_insert_with(IndexMap::new)
    }
}

impl LocalizationRecord {
    pub fn translated(value: impl Into<String>) -> Self {
        Self {
            string_unit: Some(Some(StringUnit::new(TRANSLATED_STATE, value))),
            extra: Map::new(),
        }
    }

    pub fn string_unit(&self) -> Option<&StringUnit> {
        self.string_unit.as_ref().and_then(Option::as_ref)
    }

    pub fn value(&self) -> Option<&str> {
        self.string_unit().and_then(StringUnit::value)
    }
}

impl StringUnit {
    pub fn new(state: impl Into<String>, value: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("state".to_string(), Value::String(state.into()));
        fields.insert("value".to_string(), Value::String(value.into()));
        Self { fields }
    }

    pub fn state(&self) -> Option<&str> {
        self.fields.get("state").and_then(Value::as_str)
    }

    pub fn value(&self) -> Option<&str> {
        self.fields.get("value").and_then(Value::as_str)
    }
}
