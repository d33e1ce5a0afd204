//! Workspace discovery and layout

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::repository::{Repository, RepositoryError};
use crate::core::storage::{FileStore, StorageError};

/// Name of the marker directory holding the store and config
pub const WORKSPACE_DIR: &str = ".showroom";

/// A showroom workspace on disk
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Directory containing `.showroom/`
    root: PathBuf,
}

impl Workspace {
    /// Find the workspace by walking up from the current directory
    pub fn discover() -> Result<Self, WorkspaceError> {
        let current =
            std::env::current_dir().map_err(|e| WorkspaceError::IoError(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find the workspace by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, WorkspaceError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| WorkspaceError::IoError(e.to_string()))?;

        loop {
            if current.join(WORKSPACE_DIR).is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(WorkspaceError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new workspace at the given path
    pub fn init(path: &Path) -> Result<Self, WorkspaceError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if root.join(WORKSPACE_DIR).exists() {
            return Err(WorkspaceError::AlreadyExists(root));
        }
        Self::create_layout(root)
    }

    /// Initialize even if `.showroom/` exists; stored data is left alone
    pub fn init_force(path: &Path) -> Result<Self, WorkspaceError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::create_layout(root)
    }

    fn create_layout(root: PathBuf) -> Result<Self, WorkspaceError> {
        let ws = Self { root };
        std::fs::create_dir_all(ws.store_dir())
            .map_err(|e| WorkspaceError::IoError(e.to_string()))?;
        std::fs::write(ws.config_path(), Self::default_config())
            .map_err(|e| WorkspaceError::IoError(e.to_string()))?;
        Ok(ws)
    }

    fn default_config() -> &'static str {
        r#"# Showroom workspace configuration

# User id recorded on new pre-orders
# author: ""

# Display currency for prices (USD, NGN, EUR)
# currency: USD

# Default output format (auto, yaml, tsv, json, csv, md, id)
# default_format: auto

# Hero banner rotation interval in milliseconds
# hero_interval_ms: 6000
"#
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.showroom/` directory
    pub fn showroom_dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR)
    }

    /// Directory of the file-backed key-value store
    pub fn store_dir(&self) -> PathBuf {
        self.showroom_dir().join("store")
    }

    pub fn config_path(&self) -> PathBuf {
        self.showroom_dir().join("config.yaml")
    }

    pub fn open_store(&self) -> Result<FileStore, StorageError> {
        FileStore::open(self.store_dir())
    }

    /// Open the store and make sure every collection is seeded
    pub fn open_repository(&self) -> Result<Repository<FileStore>, RepositoryError> {
        Repository::open(self.open_store()?)
    }
}

/// Errors that can occur while locating or creating a workspace
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("not a showroom workspace: no .showroom directory found from {searched_from:?}. Run 'showroom init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("showroom workspace already exists at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}
