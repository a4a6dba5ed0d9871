//! Filename classification rules for asset reorganization.
//!
//! Maps an asset's filename to its destination inside the `Assets/Content`
//! tree. Rules are compiled once, tried in a fixed priority order, and the
//! first match wins; a filename matching no rule stays where it is.
//!
//! # Examples
//!
//! ```
//! use assettidy::classifier::AssetClassifier;
//! use std::path::Path;
//!
//! let classifier = AssetClassifier::default();
//! assert_eq!(
//!     classifier.classify("Item_Log.asset"),
//!     Some(Path::new("Assets/Content/Items/Log.asset").to_path_buf())
//! );
//! assert_eq!(classifier.classify("Weapon_Sword.asset"), None);
//! ```

use regex::Regex;
use std::collections::HashMap;
use std::path::PathBuf;

/// The naming convention a rule recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    /// `Area_<DD>_<Name>.asset`, keeps the original filename at the leaf.
    Area,
    /// `Biome_<DD>_<Area>_<Biome>.asset`, regenerates the leaf filename.
    Biome,
    /// `Item_<Name>.asset`
    Item,
    /// `Tile_<Name>.asset`
    Tile,
}

/// One classification rule: a compiled pattern plus the convention it maps.
#[derive(Debug)]
struct Rule {
    kind: RuleKind,
    pattern: Regex,
}

/// Ordered registry of filename classification rules.
///
/// Holds the compiled patterns and the dimension-code lookup table.
/// Classification is pure: filename in, optional root-relative destination
/// out, no filesystem access.
#[derive(Debug)]
pub struct AssetClassifier {
    rules: Vec<Rule>,
    dimensions: HashMap<&'static str, &'static str>,
}

impl AssetClassifier {
    /// Creates the registry with all standard rules in priority order.
    pub fn new() -> Self {
        // Literal prefixes and the .asset suffix match case-insensitively;
        // captured groups keep their original casing.
        let rules = vec![
            rule(RuleKind::Area, r"(?i)^Area_(\w{2})_(.+)\.asset$"),
            // The single-word area capture is intentionally narrower than
            // the area rule's own: an area name with spaces will not match
            // here when embedded in a biome filename.
            rule(RuleKind::Biome, r"(?i)^Biome_(\w{2})_(\w+?)_(.+)\.asset$"),
            rule(RuleKind::Item, r"(?i)^Item_(.+)\.asset$"),
            rule(RuleKind::Tile, r"(?i)^Tile_(.+)\.asset$"),
        ];

        let dimensions = HashMap::from([
            ("OW", "Overworld"),
            ("SW", "Skyworld"),
            ("UW", "Underworld"),
        ]);

        Self { rules, dimensions }
    }

    /// Finds the destination for a filename, relative to the project root.
    ///
    /// Rules are tried in registry order; the first match determines the
    /// destination. Returns `None` when no rule recognizes the name.
    pub fn classify(&self, file_name: &str) -> Option<PathBuf> {
        self.rules
            .iter()
            .find_map(|rule| self.destination(rule, file_name))
    }

    fn destination(&self, rule: &Rule, file_name: &str) -> Option<PathBuf> {
        let caps = rule.pattern.captures(file_name)?;
        let dest = match rule.kind {
            RuleKind::Area => content_path(&[
                "Areas",
                self.dimension_name(caps.get(1)?.as_str()),
                &pascal_case(caps.get(2)?.as_str()),
                file_name,
            ]),
            RuleKind::Biome => content_path(&[
                "Areas",
                self.dimension_name(caps.get(1)?.as_str()),
                &pascal_case(caps.get(2)?.as_str()),
                "Biomes",
                &format!("{}.asset", pascal_case(caps.get(3)?.as_str())),
            ]),
            RuleKind::Item => content_path(&[
                "Items",
                &format!("{}.asset", pascal_case(caps.get(1)?.as_str())),
            ]),
            RuleKind::Tile => content_path(&[
                "Tiles",
                &format!("{}.asset", pascal_case(caps.get(1)?.as_str())),
            ]),
        };
        Some(dest)
    }

    /// Translates a two-letter dimension code to its full name.
    /// Unrecognized codes pass through unchanged.
    fn dimension_name<'a>(&self, code: &'a str) -> &'a str {
        self.dimensions.get(code).copied().unwrap_or(code)
    }
}

impl Default for AssetClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn rule(kind: RuleKind, pattern: &str) -> Rule {
    Rule {
        kind,
        pattern: Regex::new(pattern).expect("hard-coded rule pattern is valid"),
    }
}

/// Builds `Assets/Content/<segments...>`.
fn content_path(segments: &[&str]) -> PathBuf {
    let mut path = PathBuf::from(crate::project::ASSETS_DIR);
    path.push("Content");
    for segment in segments {
        path.push(segment);
    }
    path
}

/// Normalizes free-text names into directory- and file-safe identifiers:
/// `"frozen tundra"` becomes `"FrozenTundra"`.
///
/// Splits on runs of non-alphanumeric characters, drops empty tokens,
/// uppercases each token's first letter and concatenates. The remainder of
/// each token is left untouched, so already-PascalCase input round-trips
/// unchanged.
pub fn pascal_case(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(capitalize_first)
        .collect()
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
