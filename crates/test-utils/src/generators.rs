//! Asset directory generators.
//!
//! Lays out the same tree the service expects under its assets root:
//!
//! ```text
//! <root>/assets/wind-arrow.svg
//! <root>/assets/elements/<fragment>.svg
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::fixtures;

/// Every fragment name the weather code decoder can emit.
pub fn all_fragment_names() -> Vec<String> {
    let mut names: Vec<String> = ["sun", "moon", "thunderbolt"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    names.extend((1..=6).map(|level| format!("cloud-{}", level)));
    for rate in 1..=3 {
        for kind in 0..=2 {
            names.push(format!("precip-{}{}", rate, kind));
        }
    }
    names.extend((0..=2).map(|kind| format!("precip-storm-{}", kind)));
    names
}

/// Fixture markup for a fragment name.
pub fn fixture_for(name: &str) -> &'static str {
    match name {
        "sun" => fixtures::SUN_SVG,
        "moon" => fixtures::MOON_SVG,
        "thunderbolt" => fixtures::THUNDERBOLT_SVG,
        n if n.starts_with("cloud-") => fixtures::CLOUD_SVG,
        _ => fixtures::PRECIP_SVG,
    }
}

/// Write `<dir>/<name>.svg`, creating `dir` if needed.
pub fn write_fragment(dir: &Path, name: &str, markup: &str) -> PathBuf {
    fs::create_dir_all(dir).expect("Failed to create fragment directory");
    let path = dir.join(format!("{}.svg", name));
    fs::write(&path, markup).expect("Failed to write fragment");
    path
}

/// Paths inside a generated asset tree.
pub struct AssetTree {
    pub root: TempDir,
}

impl AssetTree {
    /// The directory passed as the service's assets base path.
    pub fn base_path(&self) -> &Path {
        self.root.path()
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.path().join("assets")
    }

    pub fn elements_dir(&self) -> PathBuf {
        self.assets_dir().join("elements")
    }

    pub fn remove_fragment(&self, name: &str) {
        fs::remove_file(self.elements_dir().join(format!("{}.svg", name)))
            .expect("Failed to remove fragment");
    }

    pub fn remove_wind_arrow(&self) {
        fs::remove_file(self.assets_dir().join("wind-arrow.svg"))
            .expect("Failed to remove wind arrow");
    }
}

/// Create a temporary asset tree with a fixture for every fragment.
pub fn create_asset_tree() -> AssetTree {
    let root = crate::temp_test_dir_with_prefix("symbol_assets_");
    let tree = AssetTree { root };

    write_fragment(&tree.assets_dir(), "wind-arrow", fixtures::WIND_ARROW_SVG);
    for name in all_fragment_names() {
        write_fragment(&tree.elements_dir(), &name, fixture_for(&name));
    }
    tree
}
