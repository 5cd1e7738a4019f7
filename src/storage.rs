use crate::errors::AppError;
use crate::store::StoreData;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Missing or unreadable files start an empty store.
pub async fn load_store(path: &Path) -> StoreData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse store file: {err}");
                StoreData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
        Err(err) => {
            error!("failed to read store file: {err}");
            StoreData::default()
        }
    }
}

pub async fn persist_store(path: &Path, data: &StoreData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KEY_LAST_OPENED_DATE, KeyValueStore};

    #[tokio::test]
    async fn persisted_store_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut data = StoreData::default();
        data.set(KEY_LAST_OPENED_DATE, "5 December".into());
        persist_store(&path, &data).await.unwrap();

        assert_eq!(load_store(&path).await, data);
    }

    #[tokio::test]
    async fn missing_or_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        assert_eq!(load_store(&path).await, StoreData::default());

        std::fs::write(&path, b"{not json").unwrap();
        assert_eq!(load_store(&path).await, StoreData::default());
    }
}
