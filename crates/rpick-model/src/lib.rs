mod domain;
pub use domain::{FallbackRunner, PrimaryLabels};
pub use domain::{STATUS_ONLINE, STATUS_OFFLINE};

mod error;
pub use error::{ModelError, ModelResult};

mod runner;
pub use runner::{InventoryPage, RunnerLabel, RunnerRecord, RunnerStatus};

mod policy;
pub use policy::{PrimariesRequired, SelectionPolicy};

mod scope;
pub use scope::InventoryScope;

mod outcome;
pub use outcome::{ChosenRunner, SelectionResult};
