pub mod app;
pub mod config;
pub mod controller;
pub mod date_key;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pool;
pub mod reveal;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use controller::CalendarController;
pub use state::AppState;
pub use storage::load_store;
