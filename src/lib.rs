//! Flatland - 2D collision detection and contact classification
//!
//! The engine crates live under `crates/`; this package holds the
//! application configuration and the demo binary.

pub mod config;
