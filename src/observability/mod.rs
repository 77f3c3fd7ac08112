//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`, filtered with `EnvFilter`
//! - Logs go to stderr so stdout carries only command output
//! - `RUST_LOG` wins over the configured level

pub mod logging;
