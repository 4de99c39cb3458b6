use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::locales::{DEFAULT_TARGET_LOCALES, TargetLocaleSet};

pub const CONFIG_FILE_NAME: &str = ".xcstringsrc.json";

pub const DEFAULT_UI_TABLE: &str = "Sources/UI/Resources/Localizable.xcstrings";
pub const DEFAULT_MAIN_TABLE: &str = "Sources/Resources/Localizable.xcstrings";

/// Language, optional script, optional region: `en`, `zh-Hans`, `pt-BR`, `es-419`.
static LOCALE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2,3}(-[A-Z][a-z]{3})?(-([A-Z]{2}|[0-9]{3}))?$").unwrap()
});

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ui_table")]
    pub ui_table: String,
    #[serde(default = "default_main_table")]
    pub main_table: String,
    #[serde(default = "default_target_locales")]
    pub target_locales: Vec<String>,
    /// Translations to inject into the UI table (`{"key": {"locale": "text"}}`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_translations: Option<String>,
    /// Translations to inject into the main table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_translations: Option<String>,
    /// Treat keys defined in both tables as a verification failure.
    #[serde(default)]
    pub fail_on_duplicates: bool,
}

fn default_ui_table() -> String {
    DEFAULT_UI_TABLE.to_string()
}

fn default_main_table() -> String {
    DEFAULT_MAIN_TABLE.to_string()
}

fn default_target_locales() -> Vec<String> {
    DEFAULT_TARGET_LOCALES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui_table: default_ui_table(),
            main_table: default_main_table(),
            target_locales: default_target_locales(),
            ui_translations: None,
            main_translations: None,
            fail_on_duplicates: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the locale list is empty, contains duplicates or
    /// contains a code that is not a well-formed locale tag.
    pub fn validate(&self) -> Result<()> {
        if self.target_locales.is_empty() {
            bail!("'targetLocales' must not be empty");
        }

        let mut seen = HashSet::new();
        for code in &self.target_locales {
            if !LOCALE_CODE.is_match(code) {
                bail!("Invalid locale code in 'targetLocales': \"{}\"", code);
            }
            if !seen.insert(code.as_str()) {
                bail!("Duplicate locale code in 'targetLocales': \"{}\"", code);
            }
        }

        if self.ui_table.trim().is_empty() || self.main_table.trim().is_empty() {
            bail!("'uiTable' and 'mainTable' must not be empty");
        }

        Ok(())
    }

    pub fn locales(&self) -> TargetLocaleSet {
        TargetLocaleSet::new(self.target_locales.iter().cloned())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against: the config
    /// file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
