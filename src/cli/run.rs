//! Command dispatch.
//!
//! Returns `Err` only for hard errors (unreadable or malformed files, invalid
//! config). Missing translations are reported through `CommandResult::status`.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, add::add, check::check, complete::complete, init::init,
        normalize::normalize, verify::verify,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Add(cmd)) => add(cmd),
        Some(Command::Normalize(cmd)) => normalize(cmd),
        Some(Command::Verify(cmd)) => verify(cmd),
        Some(Command::Complete(cmd)) => complete(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
