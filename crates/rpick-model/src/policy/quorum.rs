use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Minimum number of online, idle, label-matching runners needed before the
/// primary pool is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimariesRequired(NonZeroU32);

impl PrimariesRequired {
    pub const fn new(n: NonZeroU32) -> Self {
        Self(n)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0.get()
    }

    /// Parse an optional quorum from a raw input string.
    ///
    /// - empty or `0` → `None` (no quorum)
    /// - positive integer → `Some`
    /// - negative or non-numeric → [`ModelError::InvalidQuorum`]
    ///
    /// # Examples
    /// ```
    /// use rpick_model::PrimariesRequired;
    ///
    /// assert_eq!(PrimariesRequired::parse_optional("").unwrap(), None);
    /// assert_eq!(PrimariesRequired::parse_optional("0").unwrap(), None);
    /// assert_eq!(PrimariesRequired::parse_optional("3").unwrap().map(|q| q.get()), Some(3));
    /// assert!(PrimariesRequired::parse_optional("-1").is_err());
    /// ```
    pub fn parse_optional(s: &str) -> ModelResult<Option<Self>> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let n: u32 = trimmed
            .parse()
            .map_err(|_| ModelError::InvalidQuorum(s.to_string()))?;
        Ok(NonZeroU32::new(n).map(Self))
    }
}

impl FromStr for PrimariesRequired {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::parse_optional(s)?.ok_or_else(|| ModelError::InvalidQuorum(s.to_string()))
    }
}

impl TryFrom<u32> for PrimariesRequired {
    type Error = ModelError;
    fn try_from(n: u32) -> ModelResult<Self> {
        NonZeroU32::new(n)
            .map(Self)
            .ok_or_else(|| ModelError::InvalidQuorum(n.to_string()))
    }
}

impl fmt::Display for PrimariesRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_zero_mean_no_quorum() {
        for input in ["", "  ", "0", " 0 "] {
            assert_eq!(PrimariesRequired::parse_optional(input).unwrap(), None, "{input:?}");
        }
    }

    #[test]
    fn positive_values_parse() {
        let q = PrimariesRequired::parse_optional(" 3 ").unwrap().unwrap();
        assert_eq!(q.get(), 3);
        assert_eq!(q.to_string(), "3");
    }

    #[test]
    fn rejects_negative_and_non_numeric() {
        for input in ["-1", "three", "2.5", "1e3", "0x10"] {
            let err = PrimariesRequired::parse_optional(input).unwrap_err();
            assert!(
                matches!(err, ModelError::InvalidQuorum(ref v) if v == input),
                "unexpected error for {input:?}: {err:?}"
            );
        }
    }

    #[test]
    fn from_str_requires_positive() {
        assert!("0".parse::<PrimariesRequired>().is_err());
        assert_eq!("2".parse::<PrimariesRequired>().unwrap().get(), 2);
    }
}
