use crate::api::PasteApi;
use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub backend: FsBackend,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let backend = FsBackend::new(root.clone());
        Self {
            _temp_dir: temp_dir,
            backend,
            root,
        }
    }

    /// Opens an API over this environment's directory.
    pub fn api(&self) -> PasteApi<FsBackend> {
        PasteApi::open(self.backend.clone()).expect("failed to open api")
    }
}
