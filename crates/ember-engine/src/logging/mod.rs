//! Logger setup for binaries built on ember.
//!
//! The engine itself only talks to the `log` facade; installing a concrete
//! logger is left to `main`.

mod init;

pub use init::{LoggingConfig, init_logging};
