use super::{DataStore, Document, LoadOrigin, Loaded};
use crate::error::{KyrelError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(KyrelError::Persistence)?;
            }
        }
        Ok(())
    }

    /// Hidden sibling of the data file, e.g. `.shop-<uuid>.tmp` for `shop.json`.
    fn tmp_path(&self) -> PathBuf {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data".to_string());
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }

    fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(content)?;
        file.sync_all()
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Loaded {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Loaded::fresh();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "data file unreadable, starting empty");
                return Loaded::recovered();
            }
        };

        match serde_json::from_str::<Document>(&content) {
            Ok(document) => {
                tracing::debug!(
                    path = %self.path.display(),
                    products = document.products.len(),
                    sales = document.sales.len(),
                    "loaded data file"
                );
                Loaded {
                    document,
                    origin: LoadOrigin::Loaded,
                }
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "data file corrupt, starting empty");
                Loaded::recovered()
            }
        }
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(doc).map_err(KyrelError::Serialization)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        if let Err(e) = Self::write_synced(&tmp_path, content.as_bytes()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(KyrelError::Persistence(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(KyrelError::Persistence(e));
        }

        tracing::debug!(path = %self.path.display(), "saved data file");
        Ok(())
    }
}
