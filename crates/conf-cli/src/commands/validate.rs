//! Validate command implementation

use std::path::Path;

use colored::Colorize;

use conf_core::{Engine, Finding, RunStatus, Severity};

use crate::error::Result;

/// Run the validate command
///
/// Prints findings to stderr and a one-line verdict (or the JSON bundle) to
/// stdout. The caller turns the returned status into an exit code.
pub fn run_validate(path: &Path, json: bool) -> Result<RunStatus> {
    let source = std::fs::read_to_string(path)?;
    let engine = Engine::with_builtins()?;
    let bundle = engine.run(&source)?;

    for finding in bundle.report.findings() {
        print_finding(finding);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    } else {
        match bundle.status {
            RunStatus::Ok => {
                println!("{} Document is consistent.", "OK".green().bold());
            }
            RunStatus::OkWithWarnings => {
                println!(
                    "{} Document is consistent, with warnings.",
                    "OK".yellow().bold()
                );
            }
            RunStatus::Failed => {
                println!("{} Document has contradictions.", "FAILED".red().bold());
            }
        }
    }

    Ok(bundle.status)
}

fn print_finding(finding: &Finding) {
    let tag = match finding.severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
        Severity::Info => "info".blue().bold(),
    };
    eprintln!("{}: {}", tag, finding.message);
    for value in &finding.values {
        eprintln!("   {} {}", "-".dimmed(), value);
    }
    if let Some(resolution) = &finding.resolution {
        eprintln!("   {} {}", "=>".cyan(), resolution);
    }
}
