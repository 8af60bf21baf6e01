//! Well-known runner status strings reported by the inventory.
//!
//! Any other status value is carried through as [`crate::RunnerStatus::Other`] and never counts as online.

/// Status of a runner that is connected and able to pick up jobs.
pub const STATUS_ONLINE: &str = "online";

/// Status of a runner that is registered but not connected.
pub const STATUS_OFFLINE: &str = "offline";
