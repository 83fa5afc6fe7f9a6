mod app;
mod commands;
mod effects;
mod ui;

pub use app::{run_app, AppOptions};
