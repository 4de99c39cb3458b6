//! Verify command - strict completeness report and duplicate key detection.
//!
//! Unlike `check`, a lone `nb` record does not satisfy Norwegian: tables
//! only pass once they have been normalized.

use anyhow::Result;

use super::super::{
    args::VerifyCommand,
    context::{RunContext, TableKind},
    exit_status::ExitStatus,
};
use super::{CommandResult, CommandSummary, TableReport, VerifySummary};
use crate::rules::{find_duplicate_keys, verify_catalog};

pub fn verify(cmd: VerifyCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let summary = verify_tables(&ctx)?;
    let status = ExitStatus::from_failed(!summary.is_success());

    Ok(CommandResult {
        summary: CommandSummary::Verify(summary),
        status,
    })
}

pub fn verify_tables(ctx: &RunContext) -> Result<VerifySummary> {
    let ui = ctx.open_table(TableKind::Ui)?;
    let main = ctx.open_table(TableKind::Main)?;

    let tables = [(TableKind::Ui, &ui), (TableKind::Main, &main)]
        .into_iter()
        .map(|(kind, file)| TableReport {
            kind,
            path: ctx.display_path(ctx.table_path(kind)),
            outcome: file
                .as_ref()
                .map(|file| verify_catalog(&file.catalog, &ctx.locales)),
        })
        .collect();

    let duplicates = match (&ui, &main) {
        (Some(ui), Some(main)) => Some(find_duplicate_keys(&ui.catalog, &main.catalog)),
        _ => None,
    };

    Ok(VerifySummary {
        tables,
        duplicates,
        fail_on_duplicates: ctx.config.fail_on_duplicates,
    })
}
