//! Observability for Concord.
//! `tracing` crate with `EnvFilter`, configured once per process.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with};
