use thiserror::Error;

/// Result type for schema extraction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting schema definitions.
#[derive(Debug, Error)]
pub enum Error {
    /// No definition in the document matched the oiddir OID prefix
    #[error("no definitions parsed")]
    NoDefinitions,

    /// Some definitions could not be classified
    #[error("{0} unknown elements")]
    UnknownElements(usize),

    /// The requested output format is not supported
    #[error("invalid format type '{0}' (expected openldap, 389ds or opendj)")]
    InvalidFormat(String),

    #[error("regex: {0}")]
    Regex(#[from] regex::Error),
}
