//! Profile persistence.
//!
//! Profiles live as pretty-printed JSON documents under an explicit store
//! directory. The store handle is the only component that touches the
//! filesystem; the matching engine stays pure.

use crate::types::Profile;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Profile '{0}' not found")]
    NotFound(String),

    #[error("Failed to access profile store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize profile: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle to a directory of saved profiles.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Opens a store at `root`, creating the directory if needed.
    /// Creation is idempotent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Opens the store under the platform data directory, falling back to
    /// a local `profiles/` directory when none is available.
    pub fn open_default() -> Result<Self, StoreError> {
        let root = dirs::data_local_dir()
            .map(|dir| dir.join("trailhead").join("profiles"))
            .unwrap_or_else(|| PathBuf::from("profiles"));
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name for a profile: lowercased, whitespace to underscores.
    fn file_name(name: &str) -> String {
        let parts: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
        format!("{}.json", parts.join("_"))
    }

    /// Saves a profile, returning the path written.
    pub fn save(&self, profile: &Profile) -> Result<PathBuf, StoreError> {
        let path = self.root.join(Self::file_name(&profile.name));
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&path, json)?;
        log::info!(
            "[STORE] Saved profile '{}' to {}",
            profile.name,
            path.display()
        );
        Ok(path)
    }

    /// Loads a profile by profile name or by saved file name.
    pub fn load(&self, name: &str) -> Result<Profile, StoreError> {
        let path = if name.ends_with(".json") {
            self.root.join(name)
        } else {
            self.root.join(Self::file_name(name))
        };

        if !path.is_file() {
            return Err(StoreError::NotFound(name.to_string()));
        }

        let json = fs::read_to_string(&path)?;
        let profile: Profile = serde_json::from_str(&json)?;
        log::info!("[STORE] Loaded profile '{}'", profile.name);
        Ok(profile)
    }

    /// Lists the saved profile file names, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".json") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}
