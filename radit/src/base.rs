//! Registration base configuration

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default location of registration entries within the RA DIT.
///
/// Matching against the base is not case sensitive, so any case-folding
/// scheme suitable for the DIT may be used.
pub const REGISTRATION_BASE: &str = "ou=Registrations,o=rA";

/// Distinguished name beneath which registration entries live.
///
/// Every DN produced by a [`Converter`](crate::Converter) ends with this
/// value, and only DNs ending with it are converted back to dot notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationBase {
    inner: String,
}

impl RegistrationBase {
    /// Create a registration base from a DN string
    pub fn new(dn: impl Into<String>) -> Result<Self> {
        let inner = dn.into();
        if inner.is_empty() {
            return Err(Error::EmptyBase);
        }
        Ok(Self { inner })
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The `,<base>` suffix lowercased for case-insensitive matching
    pub(crate) fn folded_suffix(&self) -> String {
        format!(",{}", self.inner.to_lowercase())
    }
}

impl Default for RegistrationBase {
    fn default() -> Self {
        Self {
            inner: REGISTRATION_BASE.to_string(),
        }
    }
}

impl fmt::Display for RegistrationBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for RegistrationBase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_base() {
        assert_eq!(RegistrationBase::default().as_str(), "ou=Registrations,o=rA");
    }

    #[test]
    fn test_empty_base_rejected() {
        assert_eq!(RegistrationBase::new(""), Err(Error::EmptyBase));
        assert_eq!("".parse::<RegistrationBase>(), Err(Error::EmptyBase));
    }

    #[rstest]
    #[case("ou=Registrations,o=rA", ",ou=registrations,o=ra")]
    #[case("OU=Arcs,DC=Example,DC=COM", ",ou=arcs,dc=example,dc=com")]
    fn test_folded_suffix(#[case] base: &str, #[case] expected: &str) {
        let base = RegistrationBase::new(base).unwrap();
        assert_eq!(base.folded_suffix(), expected);
    }
}
