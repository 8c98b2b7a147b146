//! # schema
//!
//! Extraction of LDAP schema definitions from any revision of
//! `draft-coretta-oiddir-schema`, rendered for OpenLDAP, 389DS or OpenDJ.
//!
//! Only definitions beneath `1.3.6.1.4.1.56521.101.2.(1|3|5|7)` are
//! recognised, so other documents will not yield anything.
//!
//! The subject matter of the I-D series is experimental. The output is meant
//! for testing and proof-of-concept directories.
//!
//! ```
//! use schema::{Format, Options, extract};
//!
//! let draft = "\n      ( 1.3.6.1.4.1.56521.101.2.5.1\n          NAME 'registration'\n          SUP top ABSTRACT )\n";
//! let extraction = extract(draft, &Options::new(Format::OpenLdap, "draft.txt")).unwrap();
//! assert_eq!(extraction.object_classes().len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod definition;
pub mod error;
pub mod extract;
pub mod format;

pub use definition::{Definition, Kind};
pub use error::{Error, Result};
pub use extract::{Extraction, Options, extract};
pub use format::Format;
