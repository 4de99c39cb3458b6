//! Check command - list strings missing translations.
//!
//! An early-warning pass: a lone `nb` record still counts as Norwegian here,
//! since `normalize` will rename it before verification.

use anyhow::Result;

use super::super::{
    args::CheckCommand,
    context::{RunContext, TableKind},
    exit_status::ExitStatus,
};
use super::{CheckSummary, CommandResult, CommandSummary, TableReport};
use crate::rules::{NorwegianPolicy, check_missing_translations};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let summary = check_tables(&ctx)?;
    let status = ExitStatus::from_failed(summary.missing_count() > 0);

    Ok(CommandResult {
        summary: CommandSummary::Check(summary),
        status,
    })
}

pub fn check_tables(ctx: &RunContext) -> Result<CheckSummary> {
    let mut tables = Vec::new();

    for kind in TableKind::ALL {
        let outcome = ctx.open_table(kind)?.map(|file| {
            check_missing_translations(&file.catalog, &ctx.locales, NorwegianPolicy::AcceptLegacy)
        });
        tables.push(TableReport {
            kind,
            path: ctx.display_path(ctx.table_path(kind)),
            outcome,
        });
    }

    Ok(CheckSummary { tables })
}
