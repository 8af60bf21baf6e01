pub mod error;
pub mod fetch;
pub mod selector;

pub use error::{CoreError, FetchError};
pub use fetch::{InventoryFetch, InventoryResponse};
pub use selector::{evaluate, select_runner};

pub mod prelude {
    pub use crate::error::{CoreError, FetchError};
    pub use crate::fetch::{InventoryFetch, InventoryResponse};
    pub use crate::selector::{evaluate, select_runner};
}
