pub mod app;
pub mod config;
pub mod export;
pub mod format;
pub mod forms;
pub mod views;
