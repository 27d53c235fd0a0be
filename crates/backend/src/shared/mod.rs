pub mod app_state;
pub mod config;
pub mod format;
pub mod logger;
pub mod notifier;
