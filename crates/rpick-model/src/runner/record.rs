use serde::{Deserialize, Deserializer, Serialize};

use crate::{PrimaryLabels, RunnerStatus};

/// Single label attached to a runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerLabel {
    pub name: String,
}

impl RunnerLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One runner entry from the inventory.
///
/// Only `status`, `busy` and `labels` take part in selection; the remaining
/// fields are kept for diagnostics. A missing or `null` selection field decodes to
/// its default (no status, not busy, no labels) so one odd entry never fails the
/// whole inventory; such a record simply never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RunnerStatus,
    /// Absent or `null` in the payload means "not busy".
    #[serde(default, deserialize_with = "null_as_default")]
    pub busy: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<RunnerLabel>,
}

impl RunnerRecord {
    /// Create a record with the fields that matter for selection.
    pub fn new<I, S>(status: RunnerStatus, busy: bool, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            name: None,
            os: None,
            status,
            busy,
            labels: labels.into_iter().map(RunnerLabel::new).collect(),
        }
    }

    /// Iterate through label names.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.name.as_str())
    }

    /// Returns `true` if this runner carries every primary label.
    pub fn has_labels(&self, wanted: &PrimaryLabels) -> bool {
        wanted.is_subset_of(self.label_names())
    }

    /// Name used in logs: the runner name, its id, or `"<unnamed>"`.
    pub fn display_name(&self) -> String {
        match (&self.name, self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("#{id}"),
            (None, None) => "<unnamed>".to_string(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
