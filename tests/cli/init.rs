use anyhow::{Context, Result};
use serde_json::Value;

use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, catalog};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["uiTable", "mainTable", "targetLocales", "failOnDuplicates"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    let locales = parsed["targetLocales"]
        .as_array()
        .context("targetLocales should be an array")?;
    assert_eq!(locales.len(), 40);

    assert!(
        content.contains("\n  \"uiTable\""),
        "Config should use 2-space indentation"
    );
    assert!(content.ends_with('\n'));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.subcommand("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .xcstringsrc.json

    ----- stderr -----
    ");
    assert!(test.root().join(".xcstringsrc.json").exists());

    let content = test.read_file(".xcstringsrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xcstringsrc.json", "{}")?;

    assert_cmd_snapshot!(test.subcommand("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: .xcstringsrc.json already exists

    ----- stderr -----
    ");
    assert_eq!(test.read_file(".xcstringsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.subcommand("init").output()?;
    test.write_ui_table(&catalog(&[("Done", &["en"])]))?;

    let output = test.subcommand("check").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        output.status.code(),
        Some(1),
        "Check should run against the default locale set. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("'Done'  missing: ar-SA, ca, cs"));

    Ok(())
}
