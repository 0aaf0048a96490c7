use crate::Result;
use odolog_types::VehicleState;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on the single JSON data file.
///
/// One CLI invocation performs at most one `load` and one `save`; the file
/// is the only state shared between invocations. Concurrent invocations can
/// race on the read-modify-write cycle; that is a documented limitation of
/// the single-user scope, not something the store defends against.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a handle for the data file at `path`. The file does not need
    /// to exist yet; a missing file reads as the empty state.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. Missing file => fresh empty state.
    pub fn load(&self) -> Result<VehicleState> {
        if !self.path.exists() {
            return Ok(VehicleState::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let state = serde_json::from_str(&content)?;
        Ok(state)
    }

    /// Write the whole document, replacing prior content.
    ///
    /// Writes to a sibling temp file first and renames it over the target,
    /// so a crash mid-write leaves the previous document intact.
    pub fn save(&self, state: &VehicleState) -> Result<()> {
        let mut json = serde_json::to_string_pretty(state)?;
        json.push('\n');

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
