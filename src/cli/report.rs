//! Report formatting and printing utilities.
//!
//! Commands only compute summaries; this module renders them. Every printer
//! takes a writer so output can be captured in tests.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    AddSummary, CheckSummary, CommandResult, CommandSummary, CompleteSummary, InitSummary,
    NormalizeSummary, TableReport, VerifySummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::rules::MissingTranslations;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Keys listed per table in the verification report unless verbose.
const MAX_KEYS_DISPLAY: usize = 5;

/// Locales listed per key in the verification report unless verbose.
const MAX_LOCALES_DISPLAY: usize = 5;

/// Duplicate keys listed unless verbose.
const MAX_DUPLICATES_DISPLAY: usize = 10;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, writer),
        CommandSummary::Add(summary) => print_add(summary, writer),
        CommandSummary::Normalize(summary) => print_normalize(summary, writer),
        CommandSummary::Verify(summary) => print_verify(summary, verbose, writer),
        CommandSummary::Complete(summary) => print_complete(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Check
// ============================================================

fn print_check<W: Write>(summary: &CheckSummary, writer: &mut W) {
    for table in &summary.tables {
        let Some(missing) = print_table_header(table, "Checking", writer) else {
            continue;
        };
        if missing.is_empty() {
            let _ = writeln!(
                writer,
                "  {} {}",
                SUCCESS_MARK.green(),
                "All strings have complete translations".green()
            );
        } else {
            print_missing_list(missing, writer);
        }
    }

    let _ = writeln!(writer);
    let count = summary.missing_count();
    if count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All strings have complete translations!".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} string(s) need translations",
            FAILURE_MARK.red(),
            count
        );
    }
}

/// One line per key, key column aligned by display width.
fn print_missing_list<W: Write>(missing: &MissingTranslations, writer: &mut W) {
    let key_width = missing
        .keys()
        .map(|key| quoted(key).width())
        .max()
        .unwrap_or(0);

    for (key, locales) in missing {
        let label = quoted(key);
        let padding = key_width.saturating_sub(label.width());
        let _ = writeln!(
            writer,
            "  {}{:padding$}  {} {}",
            label.as_str().bold(),
            "",
            "missing:".yellow(),
            locales.join(", "),
            padding = padding
        );
    }
}

// ============================================================
// Add
// ============================================================

fn print_add<W: Write>(summary: &AddSummary, writer: &mut W) {
    if summary.tables.is_empty() {
        let _ = writeln!(
            writer,
            "No translations to add. Pass {} / {} or set uiTranslations / mainTranslations in {}.",
            "--ui".cyan(),
            "--main".cyan(),
            CONFIG_FILE_NAME
        );
        let _ = writeln!(
            writer,
            "Run {} first to see what needs translation.",
            "check".cyan()
        );
        return;
    }

    for table in &summary.tables {
        let Some(report) = print_table_header(table, "Adding translations to", writer) else {
            continue;
        };
        let outcome = &report.outcome;

        for added in &outcome.added {
            let _ = writeln!(
                writer,
                "  {} {} for {}",
                "+".green(),
                added.locale,
                quoted(&added.key)
            );
        }
        for key in &outcome.unknown_keys {
            let _ = writeln!(
                writer,
                "  {} {} not found in {}",
                "warning:".bold().yellow(),
                quoted(key),
                table.kind
            );
        }
        if outcome.skipped_existing > 0 {
            let _ = writeln!(
                writer,
                "  Skipped {} existing translation(s)",
                outcome.skipped_existing
            );
        }
        print_edit_result(
            outcome.added.len(),
            "translation(s)",
            report.saved,
            summary.dry_run,
            &table.path,
            writer,
        );
    }

    let _ = writeln!(writer);
    let verb = if summary.dry_run { "Would add" } else { "Added" };
    let _ = writeln!(
        writer,
        "{} {} translation(s).",
        verb.green().bold(),
        summary.added_count()
    );
    if summary.dry_run && summary.added_count() > 0 {
        let _ = writeln!(writer, "Run without {} to write them.", "--dry-run".cyan());
    }
}

// ============================================================
// Normalize
// ============================================================

fn print_normalize<W: Write>(summary: &NormalizeSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Converting 'nb' (Norwegian Bokmål) to 'no' (Norwegian)"
    );

    for table in &summary.tables {
        let Some(report) = print_table_header(table, "Processing", writer) else {
            continue;
        };
        let outcome = &report.outcome;

        for key in &outcome.renamed {
            let _ = writeln!(
                writer,
                "  {} Renamed 'nb' to 'no' for {}",
                SUCCESS_MARK.green(),
                quoted(key)
            );
        }
        for key in &outcome.conflicts {
            let _ = writeln!(
                writer,
                "  {} {} has both 'nb' and 'no'; left unchanged",
                "warning:".bold().yellow(),
                quoted(key)
            );
        }
        print_edit_result(
            outcome.renamed.len(),
            "string(s)",
            report.saved,
            summary.dry_run,
            &table.path,
            writer,
        );
    }

    let _ = writeln!(writer);
    let verb = if summary.dry_run {
        "Would rename"
    } else {
        "Renamed"
    };
    let _ = writeln!(
        writer,
        "{} {} string(s).",
        verb.green().bold(),
        summary.renamed_count()
    );
}

fn print_edit_result<W: Write>(
    count: usize,
    noun: &str,
    saved: bool,
    dry_run: bool,
    path: &str,
    writer: &mut W,
) {
    if saved {
        let _ = writeln!(writer, "  Saved changes to {}", path);
    } else if dry_run && count > 0 {
        let _ = writeln!(
            writer,
            "  {} {} {} (dry run, not saved)",
            "Would change".yellow(),
            count,
            noun
        );
    } else {
        let _ = writeln!(writer, "  No changes needed for {}", path);
    }
}

// ============================================================
// Verify
// ============================================================

fn print_verify<W: Write>(summary: &VerifySummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(writer, "{}", "=== TRANSLATION VERIFICATION REPORT ===".bold());

    for table in &summary.tables {
        let Some(verification) = print_table_header(table, "Checking", writer) else {
            continue;
        };
        let _ = writeln!(
            writer,
            "  Total translatable strings: {}",
            verification.total
        );
        let _ = writeln!(
            writer,
            "  Fully translated strings: {}",
            verification.complete
        );
        let _ = writeln!(
            writer,
            "  Missing translations: {}",
            verification.missing.len()
        );
        print_missing_preview(&verification.missing, verbose, writer);
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "=== SUMMARY ===".bold());
    let _ = writeln!(
        writer,
        "Total translatable strings across both files: {}",
        summary.total()
    );
    let _ = writeln!(writer, "Fully translated strings: {}", summary.complete());
    let _ = writeln!(
        writer,
        "Strings with missing translations: {}",
        summary.missing_count()
    );

    let _ = writeln!(writer);
    if summary.missing_count() == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All strings are fully translated for all target languages!".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} Translation completion rate: {:.1}%",
            FAILURE_MARK.red(),
            summary.completion_rate()
        );
        let _ = writeln!(
            writer,
            "  {} strings still need translations.",
            summary.missing_count()
        );
    }

    if let Some(duplicates) = &summary.duplicates {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "{}", "=== CHECKING FOR DUPLICATES ===".bold());
        if duplicates.is_empty() {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                "No duplicate keys found between the two files.".green()
            );
        } else {
            let label = if summary.fail_on_duplicates {
                "error:".bold().red()
            } else {
                "warning:".bold().yellow()
            };
            let _ = writeln!(
                writer,
                "{} Found {} duplicate keys across both files:",
                label,
                duplicates.len()
            );
            let limit = if verbose {
                duplicates.len()
            } else {
                MAX_DUPLICATES_DISPLAY
            };
            for key in duplicates.iter().take(limit) {
                let _ = writeln!(writer, "  - {}", key);
            }
            if duplicates.len() > limit {
                let _ = writeln!(writer, "  ... and {} more", duplicates.len() - limit);
            }
        }
    }
}

fn print_missing_preview<W: Write>(missing: &MissingTranslations, verbose: bool, writer: &mut W) {
    let (key_limit, locale_limit) = if verbose {
        (usize::MAX, usize::MAX)
    } else {
        (MAX_KEYS_DISPLAY, MAX_LOCALES_DISPLAY)
    };

    for (key, locales) in missing.iter().take(key_limit) {
        let shown: Vec<&str> = locales
            .iter()
            .take(locale_limit)
            .map(String::as_str)
            .collect();
        let suffix = if locales.len() > shown.len() {
            format!(" (and {} more)", locales.len() - shown.len())
        } else {
            String::new()
        };
        let _ = writeln!(
            writer,
            "    {} missing: {}{}",
            quoted(key),
            shown.join(", "),
            suffix
        );
    }
    if missing.len() > key_limit {
        let _ = writeln!(
            writer,
            "    ... and {} more strings",
            missing.len() - key_limit
        );
    }
}

// ============================================================
// Complete
// ============================================================

fn print_complete<W: Write>(summary: &CompleteSummary, verbose: bool, writer: &mut W) {
    print_step("Step 1: Checking for missing translations", writer);
    print_check(&summary.check, writer);
    if summary.check.missing_count() > 0 && summary.add.is_none() {
        let _ = writeln!(
            writer,
            "Supply translations with {} / {} to fill them in.",
            "--ui".cyan(),
            "--main".cyan()
        );
    }

    if let Some(add) = &summary.add {
        print_step("Step 2: Adding translations", writer);
        print_add(add, writer);
    }

    print_step("Step 3: Fixing Norwegian language codes (nb → no)", writer);
    print_normalize(&summary.normalize, writer);

    print_step("Step 4: Verifying all translations", writer);
    print_verify(&summary.verify, verbose, writer);

    let _ = writeln!(writer);
    if summary.verify.is_success() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "LOCALIZATION COMPLETION SUCCESSFUL".green().bold()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "LOCALIZATION INCOMPLETE".red().bold()
        );
        let _ = writeln!(
            writer,
            "  Add the missing translations to your input files and run again."
        );
    }
}

fn print_step<W: Write>(title: &str, writer: &mut W) {
    let rule = "=".repeat(60);
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", rule);
    let _ = writeln!(writer, "{}", title.bold());
    let _ = writeln!(writer, "{}", rule);
}

// ============================================================
// Init
// ============================================================

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).as_str().green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

// ============================================================
// Helpers
// ============================================================

/// Print the table heading, or a not-found warning and return `None`.
fn print_table_header<'a, T, W: Write>(
    table: &'a TableReport<T>,
    action: &str,
    writer: &mut W,
) -> Option<&'a T> {
    let _ = writeln!(writer);
    match table.found() {
        Some(outcome) => {
            let _ = writeln!(writer, "{} {}: {}", action, table.kind, table.path);
            Some(outcome)
        }
        None => {
            let _ = writeln!(
                writer,
                "{} {} not found: {}",
                "warning:".bold().yellow(),
                table.kind,
                table.path
            );
            None
        }
    }
}

fn quoted(key: &str) -> String {
    format!("'{}'", key)
}
