//! Command-line interface and run driver.
//!
//! Ties the pieces together: discovers the project root, loads the filter
//! configuration, enumerates the source tree, classifies each asset and
//! either prints the plan or hands it to the mover. One report line per
//! file; processing is strictly sequential.

use crate::classifier::AssetClassifier;
use crate::config::FilterConfig;
use crate::mover::{AssetMover, META_SUFFIX, MovePlan};
use crate::output::Report;
use crate::project::ProjectLayout;
use clap::Parser;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Extension of the asset files to reorganize.
const ASSET_EXTENSION: &str = ".asset";

/// Sort ScriptableObject assets into the Content folder structure.
#[derive(Debug, Parser)]
#[command(name = "assettidy", version, about)]
pub struct Cli {
    /// Directory to start project-root discovery from.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Actually move files (omit for a dry run).
    #[arg(long)]
    pub apply: bool,

    /// Path to a filter configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Runs one migration pass with the given arguments.
///
/// Walks the `Assets/ScriptableObjects` tree, classifies every `*.asset`
/// file and reports a `PLAN`/`MOVE` line per classified file or a `SKIP`
/// line per unmatched one. With `--apply` the moves are performed, sidecar
/// `.meta` files included.
///
/// # Errors
///
/// Fails when the project root cannot be located, the source tree is
/// missing, the configuration is invalid, or a filesystem move fails.
pub fn run_cli(cli: &Cli) -> Result<(), String> {
    let layout = ProjectLayout::discover(&cli.dir).map_err(|e| e.to_string())?;
    layout.validate_source_root().map_err(|e| e.to_string())?;

    let config = FilterConfig::load(cli.config.as_deref(), layout.root())
        .map_err(|e| format!("Error loading configuration: {}", e))?;
    let filters = config
        .compile()
        .map_err(|e| format!("Error compiling filters: {}", e))?;

    let classifier = AssetClassifier::default();
    let source_root = layout.source_root();

    for entry in WalkDir::new(&source_root) {
        let entry =
            entry.map_err(|e| format!("Error walking {}: {}", source_root.display(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if file_name.ends_with(META_SUFFIX) || !file_name.ends_with(ASSET_EXTENSION) {
            continue;
        }
        if !filters.should_include(entry.path()) {
            continue;
        }

        match classifier.classify(&file_name) {
            Some(rel_destination) => {
                let plan = MovePlan::new(
                    entry.path().to_path_buf(),
                    layout.absolute(&rel_destination),
                );
                let rel_source = layout.relative(&plan.source);
                if cli.apply {
                    AssetMover::execute(&plan).map_err(|e| e.to_string())?;
                    Report::moved(rel_source, &rel_destination);
                } else {
                    Report::plan(rel_source, &rel_destination);
                }
            }
            None => Report::skip(layout.relative(entry.path())),
        }
    }

    Ok(())
}
