use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, UI_TABLE, catalog};

#[test]
fn test_check_complete_tables() -> Result<()> {
    let test = CliTest::with_locales(&["en", "ja"])?;
    test.write_ui_table(&catalog(&[("Done", &["en", "ja"])]))?;
    test.write_main_table(&catalog(&[("Cancel", &["en", "ja"])]))?;

    assert_cmd_snapshot!(test.subcommand("check"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Checking UI table: Sources/UI/Resources/Localizable.xcstrings
      ✓ All strings have complete translations

    Checking main table: Sources/Resources/Localizable.xcstrings
      ✓ All strings have complete translations

    ✓ All strings have complete translations!

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_check_lists_missing_locales() -> Result<()> {
    let test = CliTest::with_locales(&["en", "ja", "de"])?;
    test.write_ui_table(&catalog(&[("Done", &["en"]), ("Save", &["en", "ja", "de"])]))?;

    assert_cmd_snapshot!(test.subcommand("check"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    Checking UI table: Sources/UI/Resources/Localizable.xcstrings
      'Done'  missing: ja, de

    warning: main table not found: Sources/Resources/Localizable.xcstrings

    ✘ 1 string(s) need translations

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_check_aligns_keys() -> Result<()> {
    let test = CliTest::with_locales(&["en", "ja"])?;
    test.write_ui_table(&catalog(&[("OK", &["en"]), ("Welcome back", &["ja"])]))?;

    assert_cmd_snapshot!(test.subcommand("check"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    Checking UI table: Sources/UI/Resources/Localizable.xcstrings
      'OK'            missing: ja
      'Welcome back'  missing: en

    warning: main table not found: Sources/Resources/Localizable.xcstrings

    ✘ 2 string(s) need translations

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_check_accepts_lone_nb_for_norwegian() -> Result<()> {
    let test = CliTest::with_locales(&["en", "no"])?;
    test.write_ui_table(&catalog(&[("Tide", &["en", "nb"])]))?;

    assert_cmd_snapshot!(test.subcommand("check"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Checking UI table: Sources/UI/Resources/Localizable.xcstrings
      ✓ All strings have complete translations

    warning: main table not found: Sources/Resources/Localizable.xcstrings

    ✓ All strings have complete translations!

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_check_skips_strings_marked_not_translatable() -> Result<()> {
    let test = CliTest::with_locales(&["en", "ja"])?;
    test.write_ui_table(
        r#"{
  "sourceLanguage": "en",
  "strings": {
    "%@": { "shouldTranslate": false },
    "Done": { "localizations": { "en": {}, "ja": {} } }
  },
  "version": "1.0"
}"#,
    )?;

    assert_cmd_snapshot!(test.subcommand("check"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Checking UI table: Sources/UI/Resources/Localizable.xcstrings
      ✓ All strings have complete translations

    warning: main table not found: Sources/Resources/Localizable.xcstrings

    ✓ All strings have complete translations!

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_check_reads_records_of_any_shape() -> Result<()> {
    let test = CliTest::with_locales(&["en", "ja"])?;
    let original = r#"{"strings":{"A":{"shouldTranslate":null,"localizations":{"en":{"stringUnit":{"state":"new"}}}}}}"#;
    test.write_ui_table(original)?;

    assert_cmd_snapshot!(test.subcommand("check"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    Checking UI table: Sources/UI/Resources/Localizable.xcstrings
      'A'  missing: ja

    warning: main table not found: Sources/Resources/Localizable.xcstrings

    ✘ 1 string(s) need translations

    ----- stderr -----
    ");
    assert_eq!(test.read_file(UI_TABLE)?, original);
    Ok(())
}

#[test]
fn test_check_missing_table_is_a_warning() -> Result<()> {
    let test = CliTest::with_locales(&["en"])?;
    test.write_main_table(&catalog(&[("Cancel", &["en"])]))?;

    assert_cmd_snapshot!(test.subcommand("check"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    warning: UI table not found: Sources/UI/Resources/Localizable.xcstrings

    Checking main table: Sources/Resources/Localizable.xcstrings
      ✓ All strings have complete translations

    ✓ All strings have complete translations!

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_check_does_not_modify_tables() -> Result<()> {
    let test = CliTest::with_locales(&["en", "ja"])?;
    let original = r#"{"sourceLanguage":"en","strings":{"Done":{"localizations":{"nb":{}}}},"version":"1.0"}"#;
    test.write_ui_table(original)?;

    test.subcommand("check").output()?;

    assert_eq!(test.read_file(UI_TABLE)?, original);
    Ok(())
}

#[test]
fn test_check_malformed_table() -> Result<()> {
    let test = CliTest::with_locales(&["en"])?;
    test.write_ui_table("{ not json")?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.subcommand("check"), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to parse string catalog: [ROOT]/Sources/UI/Resources/Localizable.xcstrings: key must be a string at [POSITION]
        ");
    });
    Ok(())
}

#[test]
fn test_check_table_path_override() -> Result<()> {
    let test = CliTest::with_locales(&["en", "ja"])?;
    test.write_file("Other.xcstrings", &catalog(&[("Done", &["en"])]))?;

    let mut cmd = test.subcommand("check");
    cmd.args(["--ui-table", "Other.xcstrings"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----

    Checking UI table: Other.xcstrings
      'Done'  missing: ja

    warning: main table not found: Sources/Resources/Localizable.xcstrings

    ✘ 1 string(s) need translations

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_check_invalid_config() -> Result<()> {
    let test = CliTest::with_locales(&["english"])?;

    assert_cmd_snapshot!(test.subcommand("check"), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid locale code in 'targetLocales': "english"
    "#);
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["check", "add", "normalize", "verify", "complete", "init"] {
        assert!(stdout.contains(command), "help should list {}", command);
    }
    Ok(())
}

fn setup_nested_project(test: &CliTest) -> Result<()> {
    test.write_file("app/.xcstringsrc.json", r#"{ "targetLocales": ["en"] }"#)?;
    test.write_file(&format!("app/{}", UI_TABLE), &catalog(&[("Done", &["en"])]))
}

#[test]
fn test_root_argument() -> Result<()> {
    let test = CliTest::new()?;
    setup_nested_project(&test)?;

    let mut cmd = test.subcommand("check");
    cmd.args(["--root", "app"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Checking UI table: Sources/UI/Resources/Localizable.xcstrings
      ✓ All strings have complete translations

    warning: main table not found: Sources/Resources/Localizable.xcstrings

    ✓ All strings have complete translations!

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_root_from_environment() -> Result<()> {
    let test = CliTest::new()?;
    setup_nested_project(&test)?;

    let mut cmd = test.subcommand("check");
    cmd.env("XCSTRINGS_ROOT", "app");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Checking UI table: Sources/UI/Resources/Localizable.xcstrings
      ✓ All strings have complete translations

    warning: main table not found: Sources/Resources/Localizable.xcstrings

    ✓ All strings have complete translations!

    ----- stderr -----
    ");
    Ok(())
}
