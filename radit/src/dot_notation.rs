//! Dot notation of an object identifier

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const ARC_SEPARATOR: char = '.';

/// An object identifier in dot notation, most significant arc first.
///
/// Arcs are kept as strings and are not validated. Splitting is literal, so
/// leading, trailing or consecutive separators produce empty arcs which are
/// kept in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DotNotation {
    arcs: Vec<String>,
}

impl DotNotation {
    /// Create a dot notation from arcs ordered most significant first
    pub fn new(arcs: Vec<String>) -> Self {
        Self { arcs }
    }

    /// Get the arcs, most significant first
    pub fn arcs(&self) -> &[String] {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

impl fmt::Display for DotNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arcs.join("."))
    }
}

impl FromStr for DotNotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::EmptyInput);
        }
        let arcs = s.split(ARC_SEPARATOR).map(str::to_string).collect();
        Ok(DotNotation { arcs })
    }
}

impl PartialEq<&str> for DotNotation {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}
