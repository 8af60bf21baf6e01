use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Runner identifier used when the primary pool is not usable.
///
/// Emitted verbatim (after trimming surrounding whitespace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct FallbackRunner(String);

impl FallbackRunner {
    pub fn new(s: impl Into<String>) -> ModelResult<Self> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FallbackRunner {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for FallbackRunner {
    type Error = ModelError;
    fn try_from(s: String) -> ModelResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyFallback);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<FallbackRunner> for String {
    fn from(f: FallbackRunner) -> Self {
        f.0
    }
}

impl fmt::Display for FallbackRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_identifier_verbatim() {
        let f = FallbackRunner::new("ubuntu-latest").unwrap();
        assert_eq!(f.as_str(), "ubuntu-latest");
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(FallbackRunner::new("").unwrap_err(), ModelError::EmptyFallback);
        assert_eq!("  ".parse::<FallbackRunner>().unwrap_err(), ModelError::EmptyFallback);
    }
}
