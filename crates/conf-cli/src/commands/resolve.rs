//! Resolve command implementation

use std::path::Path;

use colored::Colorize;
use similar::TextDiff;

use conf_core::Engine;

use crate::error::Result;

/// Run the resolve command
///
/// Renders the repaired document to stdout, as a unified diff with `--diff`,
/// or back into the file with `--write`.
pub fn run_resolve(path: &Path, write: bool, diff: bool) -> Result<()> {
    let source = std::fs::read_to_string(path)?;
    let engine = Engine::with_builtins()?;
    let rendered = engine.render(&source)?;

    if write {
        if rendered == source {
            eprintln!("{} Already consistent. Nothing to change.", "OK".green().bold());
        } else {
            std::fs::write(path, &rendered)?;
            eprintln!("{} Wrote {}.", "OK".green().bold(), path.display());
        }
    }

    if diff {
        let text_diff = TextDiff::from_lines(&source, &rendered);
        print!("{}", text_diff.unified_diff().header("input", "resolved"));
    } else if !write {
        print!("{}", rendered);
    }

    Ok(())
}
