//! CLI replay entry point.
//!
//! # Responsibility
//! - Replay a JSON-lines command script against an empty dashboard.
//! - Print the final view model as pretty JSON for local sanity checks.
//!
//! Usage: `goaldash_cli [SCRIPT]`. Reads stdin when no path is given.

use clap::Parser;
use goaldash_core::{init_logging, Command, CommandOutcome, DashboardConfig, DashboardService};
use log::info;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Replay dashboard commands and print the resulting view")]
struct Cli {
    /// JSON-lines command script; stdin when omitted
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("goaldash_cli: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = DashboardConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level.as_str(), log_dir).map_err(|err| err.to_string())?;
    }

    let input: Box<dyn Read> = match cli.script.as_deref() {
        Some(path) => Box::new(
            std::fs::File::open(path)
                .map_err(|err| format!("cannot open `{}`: {err}", path.display()))?,
        ),
        None => Box::new(std::io::stdin()),
    };

    let mut service = DashboardService::new();
    for (line_no, line) in BufReader::new(input).lines().enumerate() {
        let line = line.map_err(|err| format!("read failed: {err}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command: Command = serde_json::from_str(trimmed)
            .map_err(|err| format!("line {}: invalid command: {err}", line_no + 1))?;
        match service.execute(command) {
            CommandOutcome::Committed => {}
            CommandOutcome::Ignored => eprintln!("line {}: ignored", line_no + 1),
            CommandOutcome::Rejected(err) => eprintln!("line {}: rejected: {err}", line_no + 1),
        }
    }

    info!(
        "event=cli_replay module=cli status=ok goals={} projects={}",
        service.state().goals.len(),
        service.state().projects.len()
    );
    let rendered = serde_json::to_string_pretty(&service.view())
        .map_err(|err| format!("encode failed: {err}"))?;
    println!("{rendered}");
    Ok(())
}
