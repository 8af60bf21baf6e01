mod status;
pub use status::RunnerStatus;

mod record;
pub use record::{RunnerLabel, RunnerRecord};

mod page;
pub use page::InventoryPage;
