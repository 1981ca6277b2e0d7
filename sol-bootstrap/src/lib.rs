//! Bootstrap installer for Sol
//!
//! Detects the host platform and, on Windows, installs the nightly toolchain,
//! builds Sol and optionally sets up its example programs.

pub mod bootstrap;
pub mod config;

pub use config::{Layout, Settings};
