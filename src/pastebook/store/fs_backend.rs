use super::backend::{Slot, StorageBackend};
use crate::error::{PasteError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed storage: one file per slot under a root directory.
///
/// Cloning is cheap and clones address the same files.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `slot`.
    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        let name = match slot {
            Slot::Pastes => format!("{}.json", slot.key()),
            Slot::CurrentUser => slot.key().to_string(),
        };
        self.root.join(name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PasteError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(PasteError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, slot: Slot, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.slot_path(slot);

        // Atomic write
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", slot.key(), Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp, value).and_then(|_| fs::rename(&tmp, &target)) {
            let _ = fs::remove_file(&tmp);
            return Err(PasteError::Io(e));
        }
        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(path).map_err(PasteError::Io)?;
        }
        Ok(())
    }
}
