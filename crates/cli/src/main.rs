//! `newtonraphson` — command line and CGI front end for the Newton–Raphson
//! root finder.

mod args;
mod cgi;
mod error;
mod sweep;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use rootfinding_solvers::NewtonRaphson;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::{Command, USAGE};
use error::{CliError, Result};

fn main() -> ExitCode {
    init_tracing();

    let outcome = Command::parse(std::env::args().skip(1)).and_then(run);

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(%err, "newtonraphson failed");
            eprintln!("error: {err}");
            if matches!(err, CliError::InvalidArgument(_)) {
                eprintln!("\n{USAGE}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    debug!(?command, "running");

    match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Solve { epsilon, guess } => {
            println!("{}", solve_line(epsilon, guess)?);
            Ok(())
        }
        Command::Cgi => cgi::respond(io::stdin().lock(), io::stdout().lock()),
        Command::Sweep { range, guess } => {
            let report = sweep::run(&range, guess)?;
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

/// Solves once and formats the root the way the `solve` mode prints it.
fn solve_line(epsilon: f64, guess: f64) -> Result<String> {
    let finder = NewtonRaphson::new(epsilon)?;
    let root = finder.solve(guess)?;
    Ok(format!("The value of the root is : {root:.6}"))
}
