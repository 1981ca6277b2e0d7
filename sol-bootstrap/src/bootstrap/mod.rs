//! Bootstrap module for building Sol from a fresh checkout
//!
//! - Privilege elevation before anything else
//! - Platform detection and classification
//! - Toolchain install, override and build through rustup/cargo
//! - Example program management in the build output

pub mod console;
pub mod elevation;
pub mod platform;
pub mod runner;
pub mod samples;
pub mod sequence;
pub mod text;
pub mod toolchain;

pub use elevation::{Elevation, ElevationError, Elevator, SystemElevator, acquire_elevated_privileges};
pub use platform::{OperatingSystem, detect_platform_name};
pub use runner::{CommandRunner, RawExitStatus, RecordingRunner, SystemRunner};
pub use sequence::{Bootstrap, Outcome};
