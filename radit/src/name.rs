//! Distinguished names of registration entries
//!
//! A registration DN lists one RDN per arc, leaf first, followed by the
//! registration base:
//!
//! ```text
//! n=56521,n=1,n=4,n=1,n=6,n=3,n=1,ou=Registrations,o=rA
//! ^ leaf arc                  ^ root arc ^ registration base
//! ```

use std::fmt;
use std::str::FromStr;

use crate::base::RegistrationBase;
use crate::error::{Error, Result};

const RDN_SEPARATOR: char = ',';
const ATTRIBUTE_VALUE_SEPARATOR: char = '=';

/// Relative Distinguished Name of a single registration entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeDistinguishedName {
    pub attribute: String,
    pub value: String,
}

impl RelativeDistinguishedName {
    /// Attribute type naming the number form of an arc
    pub const ARC_ATTRIBUTE: &'static str = "n";

    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Create an `n=<arc>` RDN
    pub fn arc(value: impl Into<String>) -> Self {
        Self::new(Self::ARC_ATTRIBUTE, value)
    }
}

impl fmt::Display for RelativeDistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.attribute, ATTRIBUTE_VALUE_SEPARATOR, self.value
        )
    }
}

impl FromStr for RelativeDistinguishedName {
    type Err = Error;

    /// Parse an `attribute=value` component.
    ///
    /// Exactly one `=` is required. The attribute type is not checked.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(ATTRIBUTE_VALUE_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(attribute), Some(value), None) => Ok(Self::new(attribute, value)),
            _ => Err(Error::MalformedRdn(s.to_string())),
        }
    }
}

/// Distinguished name of a registration entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistinguishedName {
    rdns: Vec<RelativeDistinguishedName>,
    base: RegistrationBase,
}

impl DistinguishedName {
    /// Create a DN from leaf-first RDNs beneath `base`
    pub fn new(rdns: Vec<RelativeDistinguishedName>, base: RegistrationBase) -> Self {
        Self { rdns, base }
    }

    /// Get the RDNs, leaf first
    pub fn rdns(&self) -> &[RelativeDistinguishedName] {
        &self.rdns
    }

    pub fn base(&self) -> &RegistrationBase {
        &self.base
    }
}

/// Renders the RDNs followed by the base. Without RDNs this is the base
/// entry itself.
impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rdn in &self.rdns {
            write!(f, "{}{}", rdn, RDN_SEPARATOR)?;
        }
        write!(f, "{}", self.base)
    }
}

/// Split the part of a DN preceding the base into its components.
pub(crate) fn split_components(prefix: &str) -> impl DoubleEndedIterator<Item = &str> {
    prefix.split(RDN_SEPARATOR)
}
