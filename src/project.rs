//! Project-root discovery and directory layout.
//!
//! The project root is the nearest ancestor of the starting directory that
//! contains a direct `Assets` child. All other paths the tool cares about
//! (the source tree, the content tree) are derived from it once and carried
//! around in a [`ProjectLayout`] value for the rest of the run.

use std::path::{Path, PathBuf};

/// Name of the top-level asset directory that marks a project root.
pub const ASSETS_DIR: &str = "Assets";

/// Subdirectory of `Assets` holding the unsorted source assets.
pub const SOURCE_SUBDIR: &str = "ScriptableObjects";

/// How many ancestor levels to search before giving up. Keeps the upward
/// walk from running away on malformed trees.
const MAX_ASCENT: usize = 10;

/// Errors that can occur while locating or validating the project tree.
#[derive(Debug)]
pub enum ProjectError {
    /// The starting directory could not be resolved to an existing path.
    InvalidStartDir {
        start: PathBuf,
        source: std::io::Error,
    },
    /// No ancestor containing an `Assets` directory was found within the
    /// search bound.
    RootNotFound { start: PathBuf },
    /// The expected `Assets/ScriptableObjects` source tree does not exist.
    SourceTreeMissing { expected: PathBuf },
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStartDir { start, source } => {
                write!(
                    f,
                    "Invalid start directory {}: {}",
                    start.display(),
                    source
                )
            }
            Self::RootNotFound { start } => {
                write!(
                    f,
                    "Could not locate an '{}' folder above {}",
                    ASSETS_DIR,
                    start.display()
                )
            }
            Self::SourceTreeMissing { expected } => {
                write!(f, "Could not find '{}'", expected.display())
            }
        }
    }
}

impl std::error::Error for ProjectError {}

/// Result type for project discovery operations.
pub type ProjectResult<T> = Result<T, ProjectError>;

/// The discovered project root and the paths derived from it.
///
/// Constructed once at startup and passed by reference into the components
/// that need it; immutable for the run.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Discovers the project root by walking upward from `start`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::InvalidStartDir` if `start` cannot be resolved
    /// to an existing directory, or `ProjectError::RootNotFound` if no
    /// ancestor within the search bound contains an `Assets` directory.
    pub fn discover(start: &Path) -> ProjectResult<Self> {
        let root = find_project_root(start)?;
        Ok(Self { root })
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/Assets/ScriptableObjects`, the tree to reorganize.
    pub fn source_root(&self) -> PathBuf {
        self.root.join(ASSETS_DIR).join(SOURCE_SUBDIR)
    }

    /// Checks that the source tree exists.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::SourceTreeMissing` when it does not.
    pub fn validate_source_root(&self) -> ProjectResult<()> {
        let source_root = self.source_root();
        if source_root.is_dir() {
            Ok(())
        } else {
            Err(ProjectError::SourceTreeMissing {
                expected: source_root,
            })
        }
    }

    /// Joins a root-relative path onto the project root.
    pub fn absolute(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Strips the project root from `path` for display. Paths outside the
    /// root are returned unchanged.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Walks up from `start` until a directory containing `Assets` is found,
/// bounded to [`MAX_ASCENT`] levels or the filesystem root.
pub fn find_project_root(start: &Path) -> ProjectResult<PathBuf> {
    let mut current = start
        .canonicalize()
        .map_err(|e| ProjectError::InvalidStartDir {
            start: start.to_path_buf(),
            source: e,
        })?;

    for _ in 0..MAX_ASCENT {
        if current.join(ASSETS_DIR).is_dir() {
            return Ok(current);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    Err(ProjectError::RootNotFound {
        start: start.to_path_buf(),
    })
}
