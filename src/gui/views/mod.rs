//! Application views

pub mod main_view;

pub use main_view::main_view;
