use std::process::ExitCode;

use clap::Parser;
use xcstrings_check::cli::{Arguments, ExitStatus, logging};

fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::init(args.verbose());

    match xcstrings_check::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
