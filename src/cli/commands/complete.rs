//! Complete command - check, add, normalize and verify in one run.
//!
//! Every step runs regardless of the previous step's findings. The exit
//! status comes from the verification step alone.

use anyhow::Result;

use super::super::{args::CompleteCommand, context::RunContext, exit_status::ExitStatus};
use super::{
    CommandResult, CommandSummary, CompleteSummary,
    add::{add_translations, has_translation_input},
    check::check_tables,
    normalize::normalize_tables,
    verify::verify_tables,
};

pub fn complete(cmd: CompleteCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;

    let check = check_tables(&ctx)?;
    let add = if has_translation_input(&ctx, &cmd.translations) {
        Some(add_translations(&ctx, &cmd.translations, false)?)
    } else {
        None
    };
    let normalize = normalize_tables(&ctx, false)?;
    let verify = verify_tables(&ctx)?;

    let status = ExitStatus::from_failed(!verify.is_success());

    Ok(CommandResult {
        summary: CommandSummary::Complete(Box::new(CompleteSummary {
            check,
            add,
            normalize,
            verify,
        })),
        status,
    })
}
