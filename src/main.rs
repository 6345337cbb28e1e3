mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::{ErrorKind, Result};
use clap::Parser;
use exn::ResultExt;
use precis_config::Config;
use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level());
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}\n\n{error:?}", *error);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    cli.apply(&mut config);
    let truncator = config.truncator().or_raise(|| ErrorKind::Config)?;
    let html = read_input(cli)?;
    let snippet = truncator.truncate(&html, config.length);
    tracing::info!(input = html.len(), output = snippet.len(), length = config.length, "truncated");
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{snippet}").or_raise(|| ErrorKind::Io)?;
    Ok(())
}

/// Reads the whole input; invalid UTF-8 is replaced rather than rejected.
fn read_input(cli: &Cli) -> Result<String> {
    let bytes = match cli.input() {
        Some(path) => std::fs::read(path).or_raise(|| ErrorKind::Io)?,
        None => {
            let mut bytes = Vec::new();
            io::stdin().lock().read_to_end(&mut bytes).or_raise(|| ErrorKind::Io)?;
            bytes
        },
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
