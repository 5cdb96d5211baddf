use std::{
    io::{ErrorKind, Write as _},
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use fractic_server_error::{CriticalError, ServerError};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    data::datasources::recibos_datasource::RecibosDatasource,
    errors::{InvalidJson, ReadError, WriteError},
};

/// Single JSON file holding the whole receipts list.
///
/// Reads and writes are serialized through one lock, and every write goes to
/// a temp file in the same directory that is then renamed over the target.
/// Overlapping writers therefore resolve to exactly one of the submitted
/// documents (last write wins), never a mix of both.
pub struct RecibosJsonDatasourceImpl {
    path: PathBuf,
    lock: Mutex<()>,
}

impl RecibosJsonDatasourceImpl {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecibosDatasource for RecibosJsonDatasourceImpl {
    async fn read_value(&self) -> Result<Value, ServerError> {
        let _guard = self.lock.lock().await;
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "recibos file missing, starting empty");
                return Ok(Value::Array(Vec::new()));
            }
            Err(e) => return Err(ReadError::with_debug(&e)),
        };
        serde_json::from_str(&raw).map_err(|e| InvalidJson::with_debug(&e))
    }

    async fn write_value(&self, value: &Value) -> Result<(), ServerError> {
        let bytes = serde_json::to_vec(value).map_err(|e| InvalidJson::with_debug(&e))?;
        let _guard = self.lock.lock().await;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &bytes))
            .await
            .map_err(|e| CriticalError::with_debug("recibos write task failed", &e))??;
        debug!(path = %self.path.display(), "recibos file replaced");
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ServerError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| WriteError::with_debug(&e))?;
    let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(|e| WriteError::with_debug(&e))?;
    tmp.write_all(bytes).map_err(|e| WriteError::with_debug(&e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| WriteError::with_debug(&e))?;
    tmp.persist(path)
        .map_err(|e| WriteError::with_debug(&e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_empty_list() {
        let dir = tempdir().expect("tempdir");
        let ds = RecibosJsonDatasourceImpl::new(dir.path().join("recibos.json"));
        assert_eq!(ds.read_value().await.expect("read"), json!([]));
    }

    #[tokio::test]
    async fn write_creates_parent_directories_and_replaces_content() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("data").join("recibos.json");
        let ds = RecibosJsonDatasourceImpl::new(&path);

        ds.write_value(&json!([{"id": "1"}])).await.expect("first write");
        ds.write_value(&json!({"anything": true})).await.expect("second write");

        let on_disk: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read back")).unwrap();
        assert_eq!(on_disk, json!({"anything": true}));
        assert_eq!(ds.read_value().await.expect("read"), json!({"anything": true}));

        // Only the target remains; no temp files are left behind.
        let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("recibos.json");
        std::fs::write(&path, "[{\"id\":").unwrap();
        let ds = RecibosJsonDatasourceImpl::new(&path);
        assert!(ds.read_value().await.is_err());
    }

    #[tokio::test]
    async fn unreadable_path_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let ds = RecibosJsonDatasourceImpl::new(dir.path());
        assert!(ds.read_value().await.is_err());
        assert!(ds.write_value(&json!([])).await.is_err());
    }
}
