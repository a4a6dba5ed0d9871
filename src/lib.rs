//! assettidy - ScriptableObject asset reorganization
//!
//! A one-shot migration tool that sorts a project's `Assets/ScriptableObjects`
//! tree into the `Assets/Content` hierarchy. Destinations are inferred from
//! filename conventions (`Area_*`, `Biome_*`, `Item_*`, `Tile_*`), companion
//! `.meta` sidecar files travel with their asset, and a dry-run mode prints
//! the plan without touching the filesystem.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod mover;
pub mod output;
pub mod project;

pub use classifier::{AssetClassifier, pascal_case};
pub use config::{CompiledFilters, ConfigError, FilterConfig};
pub use mover::{AssetMover, MoveError, MovePlan};
pub use project::{ProjectError, ProjectLayout};

pub use cli::{Cli, run_cli};
