//! Move planning and execution for classified assets.
//!
//! Each classified file becomes one [`MovePlan`]. Applying a plan creates
//! the missing destination ancestors, renames the asset, and carries the
//! companion `.meta` sidecar along when one exists at the source. Dry runs
//! never touch the filesystem; the driver only prints the plan.

use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to an asset's full filename to form its sidecar path.
pub const META_SUFFIX: &str = ".meta";

/// Errors that can occur while executing a move.
#[derive(Debug)]
pub enum MoveError {
    /// Failed to create a destination ancestor directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file to its destination.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Result type for move operations.
pub type MoveResult<T> = Result<T, MoveError>;

/// A planned move of one asset, with its sidecar flag resolved at plan time.
#[derive(Debug, Clone)]
pub struct MovePlan {
    /// Absolute path of the asset before the move.
    pub source: PathBuf,
    /// Absolute path the asset will be moved to.
    pub destination: PathBuf,
    /// Whether a `.meta` sidecar exists at the source and should move too.
    pub move_meta: bool,
}

impl MovePlan {
    /// Builds a plan, checking for the sidecar at the source.
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        let move_meta = meta_path(&source).is_file();
        Self {
            source,
            destination,
            move_meta,
        }
    }

    /// Sidecar path of the source asset.
    pub fn meta_source(&self) -> PathBuf {
        meta_path(&self.source)
    }

    /// Sidecar path of the destination asset.
    pub fn meta_destination(&self) -> PathBuf {
        meta_path(&self.destination)
    }
}

/// Derives the sidecar path by appending `.meta` to the full filename,
/// extension included: `Tile_Dirt.asset` pairs with `Tile_Dirt.asset.meta`.
pub fn meta_path(asset: &Path) -> PathBuf {
    let mut raw = asset.as_os_str().to_os_string();
    raw.push(META_SUFFIX);
    PathBuf::from(raw)
}

/// Executes move plans against the filesystem.
pub struct AssetMover;

impl AssetMover {
    /// Applies a plan: creates missing destination ancestors, renames the
    /// asset, and moves the sidecar when the plan recorded one. A sidecar
    /// that is absent by plan is silently skipped, not an error.
    ///
    /// # Errors
    ///
    /// Returns a `MoveError` when directory creation or either rename
    /// fails. No retry logic; the caller aborts the run.
    pub fn execute(plan: &MovePlan) -> MoveResult<()> {
        if let Some(parent) = plan.destination.parent() {
            fs::create_dir_all(parent).map_err(|e| MoveError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::rename(&plan.source, &plan.destination).map_err(|e| MoveError::FileMoveFailure {
            source: plan.source.clone(),
            destination: plan.destination.clone(),
            source_error: e,
        })?;

        if plan.move_meta {
            let meta_source = plan.meta_source();
            let meta_destination = plan.meta_destination();
            fs::rename(&meta_source, &meta_destination).map_err(|e| {
                MoveError::FileMoveFailure {
                    source: meta_source,
                    destination: meta_destination,
                    source_error: e,
                }
            })?;
        }

        Ok(())
    }
}
