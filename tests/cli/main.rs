use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;

const BIN_NAME: &str = "xcstrings";

pub const UI_TABLE: &str = "Sources/UI/Resources/Localizable.xcstrings";
pub const MAIN_TABLE: &str = "Sources/Resources/Localizable.xcstrings";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// Project with a config targeting `locales` and default table paths.
    pub fn with_locales(locales: &[&str]) -> Result<Self> {
        let test = Self::new()?;
        let config = serde_json::json!({ "targetLocales": locales });
        test.write_file(".xcstringsrc.json", &config.to_string())?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_ui_table(&self, content: &str) -> Result<()> {
        self.write_file(UI_TABLE, content)
    }

    pub fn write_main_table(&self, content: &str) -> Result<()> {
        self.write_file(MAIN_TABLE, content)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn subcommand(&self, name: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg(name);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_json(&self, path: &str) -> Result<serde_json::Value> {
        let content = self.read_file(path)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
    }

    /// Snapshot settings hiding the temp project path and parser positions.
    pub fn settings(&self) -> insta::Settings {
        let mut settings = insta::Settings::clone_current();
        settings.add_filter(
            &regex::escape(&self.project_dir.display().to_string()),
            "[ROOT]",
        );
        settings.add_filter(r"at line \d+ column \d+", "at [POSITION]");
        settings
    }
}

/// A catalog where every key carries a translated record for each locale.
pub fn catalog(entries: &[(&str, &[&str])]) -> String {
    let mut strings = serde_json::Map::new();
    for (key, locales) in entries {
        let mut localizations = serde_json::Map::new();
        for locale in *locales {
            localizations.insert(
                locale.to_string(),
                serde_json::json!({
                    "stringUnit": { "state": "translated", "value": format!("{} ({})", key, locale) }
                }),
            );
        }
        strings.insert(
            key.to_string(),
            serde_json::json!({ "localizations": localizations }),
        );
    }
    let document = serde_json::json!({
        "sourceLanguage": "en",
        "strings": strings,
        "version": "1.0"
    });
    format!("{}\n", serde_json::to_string_pretty(&document).unwrap_or_default())
}
