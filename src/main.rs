use anyhow::Result;

use team_ratings::cli::Command;
use team_ratings::{handle_completions, handle_report, handle_resolve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Report { roster } => handle_report(roster.as_deref()),
        Command::Resolve { name } => handle_resolve(&name.join(" ")),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
