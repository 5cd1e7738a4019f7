use crate::pool::FileSource;
use crate::store::StoreData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared by every handler. Each operation holds the store lock for its whole
/// duration, so gift opening never interleaves with itself.
#[derive(Clone)]
pub struct AppState {
    pub store_path: PathBuf,
    pub sentences: FileSource,
    pub store: Arc<Mutex<StoreData>>,
}

impl AppState {
    pub fn new(store_path: PathBuf, sentences: FileSource, store: StoreData) -> Self {
        Self {
            store_path,
            sentences,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
