//! Reusable UI components

pub mod status_bar;
pub mod text_panel;

pub use status_bar::{spinner_frame, status_bar, SPINNER_FRAMES};
pub use text_panel::text_panel;
