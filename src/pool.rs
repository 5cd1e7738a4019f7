use crate::errors::CalendarError;
use serde::Deserialize;
use std::future::Future;
use std::path::PathBuf;
use tokio::fs;

/// Shown once every sentence in the pool has been revealed.
pub const EXHAUSTED_MESSAGE: &str = "Merry Christmas! (No more messages left)";

/// Ordered candidate messages, loaded from a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SentencePool {
    sentences: Vec<String>,
}

impl SentencePool {
    pub fn new(sentences: Vec<String>) -> Self {
        Self { sentences }
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CalendarError> {
        serde_json::from_slice(bytes)
            .map_err(|err| CalendarError::Load(format!("sentence pool is not a string array: {err}")))
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.sentences.get(index).map(String::as_str)
    }

    /// Pool indices not yet present in `used`, in pool order.
    pub fn available_indices(&self, used: &[usize]) -> Vec<usize> {
        (0..self.sentences.len())
            .filter(|index| !used.contains(index))
            .collect()
    }
}

/// Where the pool comes from. Loaded afresh on every call.
pub trait SentenceSource {
    fn load(&self) -> impl Future<Output = Result<SentencePool, CalendarError>> + Send;
}

/// Reads the pool from a static JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SentenceSource for FileSource {
    async fn load(&self) -> Result<SentencePool, CalendarError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|err| CalendarError::Load(format!("{}: {err}", self.path.display())))?;
        SentencePool::from_json(&bytes)
    }
}

/// A pool held in memory, handed out as-is.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pool: SentencePool,
}

impl StaticSource {
    pub fn new(pool: SentencePool) -> Self {
        Self { pool }
    }
}

impl SentenceSource for StaticSource {
    async fn load(&self) -> Result<SentencePool, CalendarError> {
        Ok(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn available_skips_used_indices() {
        let pool = SentencePool::new(vec!["A".into(), "B".into(), "C".into(), "D".into()]);
        assert_eq!(pool.available_indices(&[0, 2]), vec![1, 3]);
        assert!(pool.available_indices(&[3, 2, 1, 0]).is_empty());
    }

    #[test]
    fn rejects_non_string_arrays() {
        assert!(SentencePool::from_json(br#"{"a": 1}"#).is_err());
        assert!(SentencePool::from_json(b"[1, 2]").is_err());
        let pool = SentencePool::from_json(br#"["one", "two"]"#).unwrap();
        assert_eq!(pool.get(1), Some("two"));
    }

    #[tokio::test]
    async fn file_source_reads_pool() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["Warm cocoa", "Snow day"]"#).unwrap();

        let pool = FileSource::new(file.path()).load().await.unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0), Some("Warm cocoa"));
    }

    #[tokio::test]
    async fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("sentences.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, CalendarError::Load(_)));
    }
}
