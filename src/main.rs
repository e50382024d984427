use colored::Colorize;
use shapes::{default_shapes, logging, write_report, ShapeError};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn run() -> Result<(), ShapeError> {
    let shapes = default_shapes()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &shapes)?;

    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "report failed");
            if !io::stderr().is_terminal() {
                colored::control::set_override(false);
            }
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
