//! Vitrine - animated showcase
//!
//! Library surface for integration tests; the binary in `main.rs` owns the
//! event loop.

pub mod config;
