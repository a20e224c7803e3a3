//! Logging setup.
//!
//! Everything in the workspace logs through the `log` facade; this module only
//! decides how the `env_logger` backend is configured at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
