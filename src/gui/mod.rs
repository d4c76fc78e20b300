//! GUI module

pub mod app;
pub mod components;
pub mod views;

// Re-export for convenience
pub use app::{AppFlags, LineJoinerApp, Message};
