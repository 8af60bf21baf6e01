use serde::{Deserialize, Serialize};

use crate::RunnerRecord;

/// Body of a runner inventory response.
///
/// A missing `runners` field decodes to an empty list: a scope without any
/// provisioned runners is a valid state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub runners: Vec<RunnerRecord>,
}

impl InventoryPage {
    pub fn new(runners: Vec<RunnerRecord>) -> Self {
        Self {
            total_count: Some(runners.len() as u64),
            runners,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.runners.is_empty()
    }
}
