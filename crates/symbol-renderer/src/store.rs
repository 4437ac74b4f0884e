//! Fragment sources keyed by name.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use symbol_common::{SymbolError, SymbolResult};

/// Read access to raw fragment markup.
///
/// A fragment that does not exist must be reported as
/// [`SymbolError::ResourceMissing`] so composites can skip it.
#[async_trait]
pub trait FragmentStore: Send + Sync {
    async fn load(&self, name: &str) -> SymbolResult<String>;
}

/// Fragment names are plain file stems.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
        && !name.contains("..")
}

/// Loads `{dir}/{name}.svg` from the local filesystem.
#[derive(Debug, Clone)]
pub struct FsFragmentStore {
    dir: PathBuf,
}

impl FsFragmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.svg", name))
    }
}

#[async_trait]
impl FragmentStore for FsFragmentStore {
    async fn load(&self, name: &str) -> SymbolResult<String> {
        if !is_plain_name(name) {
            return Err(SymbolError::ResourceMissing(name.to_string()));
        }

        let path = self.path_for(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(markup) => Ok(markup),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SymbolError::ResourceMissing(
                format!("{} ({})", name, path.display()),
            )),
            Err(e) => Err(SymbolError::RenderFailure(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-memory fragments, for tests and embedded assets.
#[derive(Debug, Clone, Default)]
pub struct MemoryFragmentStore {
    fragments: HashMap<String, String>,
}

impl MemoryFragmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, markup: impl Into<String>) -> Self {
        self.insert(name, markup);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, markup: impl Into<String>) {
        self.fragments.insert(name.into(), markup.into());
    }
}

#[async_trait]
impl FragmentStore for MemoryFragmentStore {
    async fn load(&self, name: &str) -> SymbolResult<String> {
        self.fragments
            .get(name)
            .cloned()
            .ok_or_else(|| SymbolError::ResourceMissing(name.to_string()))
    }
}
