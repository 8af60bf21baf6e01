//! Logging setup for rpick binaries.
//!
//! All output goes to stderr: stdout is reserved for workflow commands read by the CI runner.
mod logger;
pub use logger::*;
