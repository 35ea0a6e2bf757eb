use super::SaveStore;
use crate::error::{BibleError, Result};
use crate::model::SaveDocument;
use std::fs;
use std::path::{Path, PathBuf};

pub const SAVE_FILENAME: &str = "bookmarks.json";

/// Bookmark/favorites document stored as a single JSON file.
pub struct FileSaveStore {
    path: PathBuf,
}

impl FileSaveStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `<data_dir>/bookmarks.json`.
    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::new(data_dir.as_ref().join(SAVE_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BibleError::Io)?;
            }
        }
        Ok(())
    }
}

impl SaveStore for FileSaveStore {
    fn load(&self) -> Result<SaveDocument> {
        if !self.path.exists() {
            return Ok(SaveDocument::default());
        }
        let content = fs::read_to_string(&self.path).map_err(BibleError::Io)?;
        let doc: SaveDocument =
            serde_json::from_str(&content).map_err(BibleError::Serialization)?;
        Ok(doc)
    }

    fn save(&mut self, doc: &SaveDocument) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(doc).map_err(BibleError::Serialization)?;

        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(BibleError::Io)?;
        fs::rename(&tmp, &self.path).map_err(BibleError::Io)?;

        tracing::debug!("Saved bookmarks to {}", self.path.display());
        Ok(())
    }
}
