use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::{STATUS_OFFLINE, STATUS_ONLINE};

/// Connection status of a runner as reported by the inventory.
///
/// - `Online`  — connected, may pick up jobs.
/// - `Offline` — registered but disconnected.
/// - `Other`   — any value this crate does not know; treated as not online.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerStatus {
    Online,
    Offline,
    Other(String),
}

impl RunnerStatus {
    /// Returns `true` only for [`RunnerStatus::Online`].
    #[inline]
    pub fn is_online(&self) -> bool {
        matches!(self, RunnerStatus::Online)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RunnerStatus::Online => STATUS_ONLINE,
            RunnerStatus::Offline => STATUS_OFFLINE,
            RunnerStatus::Other(s) => s,
        }
    }
}

/// A record without a status is treated like any unknown status.
impl Default for RunnerStatus {
    fn default() -> Self {
        RunnerStatus::Other(String::new())
    }
}

impl FromStr for RunnerStatus {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            STATUS_ONLINE => RunnerStatus::Online,
            STATUS_OFFLINE => RunnerStatus::Offline,
            other => RunnerStatus::Other(other.to_string()),
        })
    }
}

impl fmt::Display for RunnerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RunnerStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RunnerStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.parse::<RunnerStatus>() {
            Ok(status) => status,
            Err(never) => match never {},
        })
    }
}
