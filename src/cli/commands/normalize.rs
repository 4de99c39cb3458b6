//! Normalize command - rename Norwegian Bokmål (`nb`) records to `no`.

use anyhow::Result;

use super::super::{
    args::NormalizeCommand,
    context::{RunContext, TableKind},
    exit_status::ExitStatus,
};
use super::{CommandResult, CommandSummary, EditReport, NormalizeSummary, TableReport};
use crate::actions::{edit_catalog, normalize_norwegian};

pub fn normalize(cmd: NormalizeCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let summary = normalize_tables(&ctx, cmd.dry_run)?;

    Ok(CommandResult {
        summary: CommandSummary::Normalize(summary),
        status: ExitStatus::Success,
    })
}

pub fn normalize_tables(ctx: &RunContext, dry_run: bool) -> Result<NormalizeSummary> {
    let mut tables = Vec::new();

    for kind in TableKind::ALL {
        let outcome = match ctx.open_table(kind)? {
            Some(mut file) => {
                let (outcome, saved) = edit_catalog(&mut file, dry_run, normalize_norwegian)?;
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

    Ok(NormalizeSummary { tables, dry_run })
}
