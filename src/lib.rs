pub mod config;
pub mod error;
pub mod sizing;
pub mod theme;
pub mod measurements;
pub mod shirt;
pub mod text_overlay;
pub mod drag;
pub mod worker_message;
pub mod upload;
pub mod design;
pub mod submission;
mod app_state;
mod app_style;
pub mod app;
pub mod ui_theme;
pub mod ui_components;
pub mod ui_panels;
pub mod ui_panel_preview;
pub mod ui_panel_controls;
