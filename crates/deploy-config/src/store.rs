//! Per-environment JSON documents on disk.
//!
//! Every document lives at `<root>/<environment>/<kind>.json`. Documents are
//! always read and written whole; saves are pretty-printed with two-space
//! indentation and replace the previous file via a rename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::env::Environment;
use crate::error::DeployError;

pub const ECOSYSTEM: &str = "ecosystem";
pub const DEPENDENCIES: &str = "dependencies";
pub const CONTRACTS: &str = "contracts";
pub const VERIFICATION_API_KEYS: &str = "verification-api-keys";

#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl AsRef<Path>, environment: &Environment) -> Self {
        ConfigStore {
            dir: root.as_ref().join(environment.as_str()),
        }
    }

    /// Directory holding this environment's documents.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, kind: &str) -> PathBuf {
        self.dir.join(format!("{kind}.json"))
    }

    pub fn load<T: DeserializeOwned>(&self, kind: &str) -> Result<T, DeployError> {
        let path = self.path(kind);
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DeployError::ConfigNotFound(path.display().to_string()),
            _ => DeployError::Io(format!("failed to read {}: {e}", path.display())),
        })?;

        let document = serde_json::from_str(&content).map_err(|e| DeployError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "loaded config document");
        Ok(document)
    }

    pub fn save<T: Serialize + ?Sized>(&self, kind: &str, document: &T) -> Result<(), DeployError> {
        let path = self.path(kind);
        let content =
            serde_json::to_string_pretty(document).map_err(|e| DeployError::Serialize {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| DeployError::Io(format!("failed to create {}: {e}", self.dir.display())))?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .map_err(|e| DeployError::Io(format!("failed to write {}: {e}", temp_path.display())))?;
        fs::rename(&temp_path, &path)
            .map_err(|e| DeployError::Io(format!("failed to replace {}: {e}", path.display())))?;

        debug!(path = %path.display(), "saved config document");
        Ok(())
    }
}
