//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use pilgrim_cli::CliError;

fn main() {
    match pilgrim_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("pilgrim: {err}");
            std::process::exit(1);
        }
    }
}
