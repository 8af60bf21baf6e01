use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Ordered, non-empty list of labels identifying the primary runner pool.
///
/// Order (and any duplicates) are kept exactly as configured so the chosen runner
/// is echoed back the way the workflow author wrote it. Matching against a runner
/// only uses set containment, see [`PrimaryLabels::is_subset_of`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>")]
#[serde(into = "Vec<String>")]
pub struct PrimaryLabels(Vec<String>);

impl PrimaryLabels {
    /// Build a label list from any iterator of strings.
    ///
    /// Labels are trimmed and empty entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use rpick_model::{ModelError, PrimaryLabels};
    ///
    /// let labels = PrimaryLabels::new([" self-hosted", "linux", ""]).unwrap();
    /// assert_eq!(labels.as_slice(), ["self-hosted", "linux"]);
    /// assert!(labels.is_subset_of(["linux", "x64", "self-hosted"]));
    ///
    /// assert_eq!(PrimaryLabels::new([" "]).unwrap_err(), ModelError::EmptyPrimaryLabels);
    /// ```
    pub fn new<I, S>(labels: I) -> ModelResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(Into::into)
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        if labels.is_empty() {
            return Err(ModelError::EmptyPrimaryLabels);
        }
        Ok(Self(labels))
    }

    /// Labels in configured order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate through labels as `&str`.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    /// Returns `true` if every primary label is present in `labels`.
    ///
    /// Extra labels on the runner side are allowed; order and multiplicity are ignored.
    pub fn is_subset_of<'a, I>(&self, labels: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let have: Vec<&str> = labels.into_iter().collect();
        self.iter().all(|wanted| have.contains(&wanted))
    }
}

impl FromStr for PrimaryLabels {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::new(s.split(','))
    }
}

impl TryFrom<Vec<String>> for PrimaryLabels {
    type Error = ModelError;
    fn try_from(v: Vec<String>) -> ModelResult<Self> {
        Self::new(v)
    }
}

impl From<PrimaryLabels> for Vec<String> {
    fn from(l: PrimaryLabels) -> Self {
        l.0
    }
}

impl fmt::Display for PrimaryLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}
