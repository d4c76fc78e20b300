//! Mode, status and dedup state for clipboard processing

pub mod context;
pub mod state;

pub use context::{Controller, PollOutcome, Processed};
pub use state::{Mode, Phase, Status};
