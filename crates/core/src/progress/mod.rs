//! Diagnostics channel for extraction passes

mod handler;
mod logging;

pub use handler::{NoOpHandler, PassEvent, ProgressHandler};
pub use logging::LoggingHandler;
