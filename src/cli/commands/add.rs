//! Add command - merge translations from JSON files into the tables.
//!
//! Input files map string keys to `{"locale": "text"}`. Locales that already
//! have a record are skipped, keys missing from the table are reported.
//! Use `--dry-run` to see what would be added without writing.

use anyhow::Result;

use super::super::{
    args::{AddCommand, TranslationArgs},
    context::{RunContext, TableKind},
    exit_status::ExitStatus,
};
use super::{AddSummary, CommandResult, CommandSummary, EditReport, TableReport};
use crate::actions::{edit_catalog, inject_translations, load_translations};

pub fn add(cmd: AddCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let summary = add_translations(&ctx, &cmd.translations, cmd.dry_run)?;

    Ok(CommandResult {
        summary: CommandSummary::Add(summary),
        status: ExitStatus::Success,
    })
}

/// Inject translations into every table that has an input file.
///
/// A requested input file that cannot be read is an error; a missing table
/// is reported and skipped.
pub fn add_translations(
    ctx: &RunContext,
    args: &TranslationArgs,
    dry_run: bool,
) -> Result<AddSummary> {
    let mut tables = Vec::new();

    for kind in TableKind::ALL {
        let Some(input) = ctx.translations_path(kind, args) else {
            continue;
        };
        let translations = load_translations(&input)?;

        let outcome = match ctx.open_table(kind)? {
            Some(mut file) => {
                let (outcome, saved) = edit_catalog(&mut file, dry_run, |catalog| {
                    inject_translations(catalog, &translations)
                })?;
                Some(EditReport { outcome, saved })
            }
            None => None,
        };

        tables.push(TableReport {
            kind,
            path: ctx.display_path(ctx.table_path(kind)),
            outcome,
        });
    }

    Ok(AddSummary { tables, dry_run })
}

/// True if either table has an injector input configured or passed.
pub fn has_translation_input(ctx: &RunContext, args: &TranslationArgs) -> bool {
    TableKind::ALL
        .iter()
        .any(|kind| ctx.translations_path(*kind, args).is_some())
}
