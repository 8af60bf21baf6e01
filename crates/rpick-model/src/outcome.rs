use std::fmt;

use serde::{Serialize, Serializer};

use crate::{FallbackRunner, PrimaryLabels};

/// Runner a downstream job should target.
///
/// Always either the configured primary label set or the fallback identifier,
/// never anything in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChosenRunner {
    Primary(PrimaryLabels),
    Fallback(FallbackRunner),
}

impl ChosenRunner {
    /// The chosen runner as a list of labels.
    ///
    /// A fallback becomes a single-element list.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            ChosenRunner::Primary(labels) => labels.iter().collect(),
            ChosenRunner::Fallback(fallback) => vec![fallback.as_str()],
        }
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        matches!(self, ChosenRunner::Primary(_))
    }

    /// JSON array of strings, e.g. `["self-hosted","linux"]` or `["ubuntu-latest"]`.
    ///
    /// This is the only encoding emitted for the chosen runner; workflows read it
    /// back with `fromJSON(...)`.
    ///
    /// # Panics
    /// Never: a list of strings always serializes.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.labels()).expect("a list of strings is always valid JSON")
    }
}

impl Serialize for ChosenRunner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.labels().serialize(serializer)
    }
}

impl fmt::Display for ChosenRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

/// Outcome of a single selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    pub chosen: ChosenRunner,
    /// At least one online runner carries all primary labels, busy or not.
    pub primary_online: bool,
    /// The policy was satisfied. Trivially `true` on a match when no quorum is set.
    pub sufficient_primaries: bool,
}

impl SelectionResult {
    /// Result that keeps the fallback runner.
    pub fn fallback(fallback: FallbackRunner, primary_online: bool) -> Self {
        Self {
            chosen: ChosenRunner::Fallback(fallback),
            primary_online,
            sufficient_primaries: false,
        }
    }

    /// Result that selects the primary pool.
    pub fn primary(labels: PrimaryLabels) -> Self {
        Self {
            chosen: ChosenRunner::Primary(labels),
            primary_online: true,
            sufficient_primaries: true,
        }
    }

    /// Value of the `use-runner` output.
    pub fn use_runner_json(&self) -> String {
        self.chosen.to_json()
    }
}
