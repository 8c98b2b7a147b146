//! Output formats for extracted schema

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const OPENLDAP: &str = "openldap";
const DS389: &str = "389ds";
const OPENDJ: &str = "opendj";

/// Directory server flavour the schema is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// OpenLDAP `.schema` style
    OpenLdap,
    /// 389 Directory Server LDIF (1.4.3 or later for the UUID syntax)
    Ds389,
    /// OpenDJ LDIF
    OpenDj,
}

impl Format {
    pub fn attribute_type_keyword(&self) -> &'static str {
        match self {
            Format::OpenLdap => "attributetype ",
            Format::Ds389 => "attributetypes: ",
            Format::OpenDj => "attributeTypes: ",
        }
    }

    pub fn object_class_keyword(&self) -> &'static str {
        match self {
            Format::OpenLdap => "objectclass ",
            Format::Ds389 => "objectclasses: ",
            Format::OpenDj => "objectClasses: ",
        }
    }

    pub fn name_form_keyword(&self) -> &'static str {
        match self {
            Format::OpenLdap => "nameform ",
            Format::Ds389 => "nameforms: ",
            Format::OpenDj => "nameForms: ",
        }
    }

    /// Only OpenDJ accepts LDAP syntax definitions
    pub fn ldap_syntax_keyword(&self) -> &'static str {
        match self {
            Format::OpenDj => "ldapSyntaxes: ",
            _ => "ldapsyntax",
        }
    }

    /// Whether name forms and LDAP syntaxes are supported by the server
    pub fn is_opendj(&self) -> bool {
        matches!(self, Format::OpenDj)
    }

    /// Lines appended to the common header
    pub(crate) fn preamble(&self) -> &'static str {
        match self {
            Format::OpenLdap => "",
            Format::Ds389 => {
                "\n## NOTE: 389DS >=1.4.3 required for UUID support\n#\ndn: cn=schema\n#"
            }
            Format::OpenDj => {
                "\n#\ndn: cn=schema\nobjectClass: top\nobjectClass: ldapSubentry\nobjectClass: subschema\n#"
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::OpenLdap => OPENLDAP,
            Format::Ds389 => DS389,
            Format::OpenDj => OPENDJ,
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            OPENLDAP => Ok(Format::OpenLdap),
            DS389 => Ok(Format::Ds389),
            OPENDJ => Ok(Format::OpenDj),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}
