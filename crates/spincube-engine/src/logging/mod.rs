//! Logging utilities.
//!
//! This module centralizes logger initialization. Everything else in the
//! engine talks to the standard `log` facade only; the backend is chosen per
//! target (`env_logger` natively, the browser console on wasm32).

mod init;

pub use init::{init_logging, LoggingConfig};
