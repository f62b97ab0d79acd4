//! Observability for Contrib.
//! `tracing` with `EnvFilter`, per-module log levels.

pub mod setup;

pub use setup::init_tracing;
