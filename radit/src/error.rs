//! Error types for the RA DIT converters.

use thiserror::Error;

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the typed conversion API.
///
/// The string-based `oid2dn` / `dn2oid` functions never return these; every
/// variant collapses to an empty string there.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input string was empty
    #[error("empty input")]
    EmptyInput,

    /// The DN does not end with the registration base
    #[error("not a registration DN: {0}")]
    NotRegistration(String),

    /// An RDN component did not split into exactly one attribute and one value
    #[error("malformed RDN component '{0}'")]
    MalformedRdn(String),

    /// A registration base must not be empty
    #[error("registration base cannot be empty")]
    EmptyBase,
}
