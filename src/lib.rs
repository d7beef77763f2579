pub mod app;
pub mod commands;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_store, persist_store, resolve_data_dir};
