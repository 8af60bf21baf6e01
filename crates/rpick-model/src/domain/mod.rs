mod labels;
pub use labels::PrimaryLabels;

mod fallback;
pub use fallback::FallbackRunner;

mod constants;
pub use constants::{STATUS_OFFLINE, STATUS_ONLINE};
