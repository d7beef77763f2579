use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// The two entity collections plus the store location, shared across
/// handlers. The mutex is the single writer gate; there are no other owners
/// of habit or group state.
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, data: AppData) -> Self {
        Self {
            data_dir,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
