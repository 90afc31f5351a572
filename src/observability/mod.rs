//! Tracing-based observability.
//!
//! The controller instruments its event handling and lifecycle transitions
//! with `tracing` spans and structured debug events. This module wires up the
//! subscriber; emitting happens at the call sites.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` option in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing once, early in the host's startup:
//!
//! ```
//! use limelight::observability::init_tracing;
//! use limelight::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("controller starting");
//! ```

mod init;

pub use init::init_tracing;
