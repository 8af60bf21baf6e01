mod quorum;
pub use quorum::PrimariesRequired;

use crate::{FallbackRunner, PrimaryLabels};

/// Caller-supplied selection policy.
///
/// Built only from validated parts, so a policy with no primary labels or a
/// blank fallback cannot reach the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub primary: PrimaryLabels,
    pub fallback: FallbackRunner,
    /// `None` means a single online match is enough.
    pub primaries_required: Option<PrimariesRequired>,
}

impl SelectionPolicy {
    pub fn new(
        primary: PrimaryLabels,
        fallback: FallbackRunner,
        primaries_required: Option<PrimariesRequired>,
    ) -> Self {
        Self {
            primary,
            fallback,
            primaries_required,
        }
    }

    /// Set the quorum and return updated policy.
    pub fn with_primaries_required(mut self, required: PrimariesRequired) -> Self {
        self.primaries_required = Some(required);
        self
    }

    /// Returns `true` when a quorum of idle primaries is configured.
    #[inline]
    pub fn has_quorum(&self) -> bool {
        self.primaries_required.is_some()
    }
}
