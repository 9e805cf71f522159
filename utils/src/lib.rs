//! Shared utilities for the financial policy core.

pub mod logging;
pub mod spans;
pub mod time;

pub use logging::{init_logging, try_init_logging, LogFormat, LoggingError};
pub use time::format_duration_ms;
