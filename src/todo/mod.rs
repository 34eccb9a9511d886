pub mod app;
pub mod models;
pub mod store;
pub mod ui;

// Re-export commonly used items for convenience
pub use app::App;
pub use ui::run_app;
