//! Background clipboard watcher

pub mod actor;
pub mod messages;

pub use actor::{spawn, WatcherActor, WatcherHandle};
pub use messages::{WatcherCommand, WatcherEvent};
