//! Inventory fetch capability consumed by the selector.
//!
//! Concrete implementations (e.g. the GitHub REST client) are injected by the caller.
use async_trait::async_trait;
use rpick_model::{InventoryPage, InventoryScope};

use crate::error::FetchError;

/// HTTP status that marks a usable inventory response.
pub const STATUS_OK: u16 = 200;

/// Status code plus decoded body of one inventory read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryResponse {
    pub status: u16,
    pub page: InventoryPage,
}

impl InventoryResponse {
    pub fn new(status: u16, page: InventoryPage) -> Self {
        Self { status, page }
    }

    /// Successful response carrying `page`.
    ///
    /// # Examples
    /// ```
    /// use rpick_core::InventoryResponse;
    /// use rpick_model::InventoryPage;
    ///
    /// let res = InventoryResponse::ok(InventoryPage::default());
    /// assert!(res.is_success());
    /// assert!(!InventoryResponse::status_only(404).is_success());
    /// ```
    pub fn ok(page: InventoryPage) -> Self {
        Self::new(STATUS_OK, page)
    }

    /// Response with the given status and no usable body.
    pub fn status_only(status: u16) -> Self {
        Self::new(status, InventoryPage::default())
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// One authenticated read of a runner inventory.
///
/// Implementations perform exactly one request per call and never retry.
/// Timeouts, if any, belong to the implementation. A non-200 answer is returned
/// as an [`InventoryResponse`] carrying that status, not as an error; errors are
/// reserved for failures of the request itself.
///
/// # Examples
/// ```
/// use async_trait::async_trait;
/// use rpick_core::{FetchError, InventoryFetch, InventoryResponse};
/// use rpick_model::{InventoryPage, InventoryScope};
///
/// struct Empty;
///
/// #[async_trait]
/// impl InventoryFetch for Empty {
///     fn name(&self) -> &'static str {
///         "empty"
///     }
///
///     async fn fetch(&self, _scope: &InventoryScope) -> Result<InventoryResponse, FetchError> {
///         Ok(InventoryResponse::ok(InventoryPage::default()))
///     }
/// }
/// ```
#[async_trait]
pub trait InventoryFetch: Send + Sync {
    /// Name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Read the runner list for `scope`.
    async fn fetch(&self, scope: &InventoryScope) -> Result<InventoryResponse, FetchError>;
}
