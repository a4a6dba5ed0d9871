//! Output formatting for the migration report.
//!
//! Centralizes the one-line-per-file report format so every component prints
//! the same way. The line text is built by pure helpers; [`Report`] adds the
//! terminal styling on top. `colored` drops the styling when stdout is not a
//! tty, leaving the plain format for scripts.

use colored::*;
use std::path::Path;

/// Builds a dry-run line: `PLAN  <src>  →  <dest>`.
pub fn plan_line(source: &Path, destination: &Path) -> String {
    transfer_line("PLAN", source, destination)
}

/// Builds a performed-move line: `MOVE  <src>  →  <dest>`.
pub fn move_line(source: &Path, destination: &Path) -> String {
    transfer_line("MOVE", source, destination)
}

/// Builds an unmatched-file line: `SKIP  <path>`.
pub fn skip_line(path: &Path) -> String {
    format!("SKIP  {}", path.display())
}

fn transfer_line(prefix: &str, source: &Path, destination: &Path) -> String {
    format!(
        "{}  {}  →  {}",
        prefix,
        source.display(),
        destination.display()
    )
}

/// Prints the per-file report lines.
///
/// ```text
/// PLAN  Assets/ScriptableObjects/Tile_Dirt.asset  →  Assets/Content/Tiles/Dirt.asset
/// MOVE  Assets/ScriptableObjects/Tile_Dirt.asset  →  Assets/Content/Tiles/Dirt.asset
/// SKIP  Assets/ScriptableObjects/Weapon_Sword.asset
/// ```
pub struct Report;

impl Report {
    /// A move that would happen (dry-run).
    pub fn plan(source: &Path, destination: &Path) {
        println!("{}", plan_line(source, destination).yellow());
    }

    /// A move that was performed.
    pub fn moved(source: &Path, destination: &Path) {
        println!("{}", move_line(source, destination).green());
    }

    /// A file no rule recognized; left in place.
    pub fn skip(path: &Path) {
        println!("{}", skip_line(path).dimmed());
    }

    /// A fatal diagnostic, sent to stderr.
    pub fn fatal(message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }
}
