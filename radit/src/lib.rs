//! # radit
//!
//! Converters between the dot notation of an object identifier and the
//! distinguished name of its registration entry within an OID directory
//! registration authority DIT (`draft-coretta-oiddir-radit`, Section 3.1.3).
//!
//! ```text
//! 1.3.6.1.4.1.56521  <->  n=56521,n=1,n=4,n=1,n=6,n=3,n=1,ou=Registrations,o=rA
//! ```
//!
//! Arcs are carried as strings and never parsed as integers, so number forms
//! of any magnitude (X.667 UUID arcs, for instance) pass through untouched.
//!
//! ## Example
//!
//! ```
//! use radit::{dn2oid, oid2dn};
//!
//! let dn = oid2dn("1.3.6.1.4.1.56521");
//! assert_eq!(dn, "n=56521,n=1,n=4,n=1,n=6,n=3,n=1,ou=Registrations,o=rA");
//! assert_eq!(dn2oid(&dn), "1.3.6.1.4.1.56521");
//! ```
//!
//! The free functions use the default registration base. A [`Converter`]
//! captures its own [`RegistrationBase`] and exposes typed results that tell
//! a non-registration DN apart from an empty one:
//!
//! ```
//! use radit::{Converter, Error, RegistrationBase};
//!
//! let base = RegistrationBase::new("ou=Arcs,o=Example").unwrap();
//! let converter = Converter::new(base);
//! assert_eq!(converter.oid2dn("2.25"), "n=25,n=2,ou=Arcs,o=Example");
//! assert!(matches!(
//!     converter.to_dot("n=1,ou=Registrations,o=rA"),
//!     Err(Error::NotRegistration(_))
//! ));
//! ```

#![forbid(unsafe_code)]

pub mod base;
pub mod converter;
pub mod dot_notation;
pub mod error;
pub mod name;

use std::sync::LazyLock;

pub use base::{REGISTRATION_BASE, RegistrationBase};
pub use converter::{Converter, RdnPolicy, ValueCase};
pub use dot_notation::DotNotation;
pub use error::{Error, Result};
pub use name::{DistinguishedName, RelativeDistinguishedName};

static DEFAULT_CONVERTER: LazyLock<Converter> = LazyLock::new(Converter::default);

/// Returns the distinguished name for `dot` under the default registration base.
///
/// An empty input yields an empty string.
pub fn oid2dn(dot: &str) -> String {
    DEFAULT_CONVERTER.oid2dn(dot)
}

/// Returns the dot notation for `dn` under the default registration base.
///
/// An empty string is returned when `dn` is empty or is not located beneath
/// the registration base. Malformed RDN components are dropped.
pub fn dn2oid(dn: &str) -> String {
    DEFAULT_CONVERTER.dn2oid(dn)
}
