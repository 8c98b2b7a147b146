//! oiddir schema definitions and the OpenDJ custom syntaxes
//!
//! Every definition of `draft-coretta-oiddir-schema` lives beneath
//! `1.3.6.1.4.1.56521.101.2`, with the next arc telling its kind:
//!
//! | arc | kind            |
//! |-----|-----------------|
//! | 1   | LDAP syntax     |
//! | 3   | attribute type  |
//! | 5   | object class    |
//! | 7   | name form       |

/// OID prefix shared by every oiddir schema definition
pub const SCHEMA_OID_PREFIX: &str = "1.3.6.1.4.1.56521.101.2";

/// Kind of schema definition, named by the arc following [`SCHEMA_OID_PREFIX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    LdapSyntax,
    AttributeType,
    ObjectClass,
    NameForm,
}

impl Kind {
    pub fn from_arc(arc: &str) -> Option<Self> {
        match arc {
            "1" => Some(Kind::LdapSyntax),
            "3" => Some(Kind::AttributeType),
            "5" => Some(Kind::ObjectClass),
            "7" => Some(Kind::NameForm),
            _ => None,
        }
    }
}

/// A definition matched in the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub oid: String,
    pub kind: Option<Kind>,
    pub text: String,
}

/// Custom LDAP syntaxes (OpenDJ only) addressing the syntax concerns raised in
/// Section 2.1 of the RASCHEMA I-D. They are not part of the I-D series.
pub const CUSTOM_SYNTAXES: &str = r#"
      ( 1.3.6.1.4.1.56521.101.2.1.3
          DESC 'X.680, cl. 34: OID-IRI'
          X-PATTERN '^(\/[A-Za-z0-9\-._~]+|[\uA0000-\uD7FF]+|[\uF900}-\uFDCF]+|[\uFDF0}-\uFFEF]+|[\u10000}-\u1FFFD]+|[\u20000}-\u2FFFD]+|[\u30000}-\u3FFFD]+|[\u40000}-\u4FFFD]+|[\u50000}-\u5FFFD]+|[\u60000}-\u6FFFD]+|[\u70000}-\u7FFFD]+|[\u80000}-\u8FFFD]+|[\u90000}-\u9FFFD]+|[\uA0000}-\uAFFFD]+|[\uB0000}-\uBFFFD]+|[\uC0000}-\uCFFFD]+|[\uD0000}-\uDFFFD]+|[\uE1000}-\uEFFFD]+)+$' )

      ( 1.3.6.1.4.1.56521.101.2.1.4
          DESC 'X.680, cl 32.3: ObjectIdentifierValue'
          X-PATTERN '^\{([a-z](-?[A-Za-z0-9]+)*(\(\d+\))?)(\s([a-z](-?[A-Za-z0-9]+)*(\(\d+\))))*\}$' )

      ( 1.3.6.1.4.1.56521.101.2.1.5
          DESC 'X.660, cl 7.5: non-integer Unicode label'
          X-PATTERN '^([A-Za-z0-9\-._~]+|[\uA0000-\uD7FF]+|[\uF900}-\uFDCF]+|[\uFDF0}-\uFFEF]+|[\u10000}-\u1FFFD]+|[\u20000}-\u2FFFD]+|[\u30000}-\u3FFFD]+|[\u40000}-\u4FFFD]+|[\u50000}-\u5FFFD]+|[\u60000}-\u6FFFD]+|[\u70000}-\u7FFFD]+|[\u80000}-\u8FFFD]+|[\u90000}-\u9FFFD]+|[\uA0000}-\uAFFFD]+|[\uB0000}-\uBFFFD]+|[\uC0000}-\uCFFFD]+|[\uD0000}-\uDFFFD]+|[\uE1000}-\uEFFFD]+)+$' )

      ( 1.3.6.1.4.1.56521.101.2.1.7
          DESC 'X.680, cl. 12.3: Identifier'
          X-PATTERN '^[a-z](-?[A-Za-z0-9]+)*$' )

      ( 1.3.6.1.4.1.56521.101.2.1.18
          DESC 'X.660, cl. A.2-A.3: StandardizedNameForm'
          X-PATTERN '^\{(([a-z](-?[A-Za-z0-9]+)*)|\d+)+\}$' )

      ( 1.3.6.1.4.1.56521.101.2.1.19
          DESC 'X.680, cl. 32.3: NameAndNumberForm'
          X-PATTERN '^[a-z](-?[A-Za-z0-9]+)*(\(\d+\))$' )

      ( 1.3.6.1.4.1.56521.101.2.1.20
          DESC 'X.660, cl. A.7: Long Arc'
          X-PATTERN '^\/([A-Za-z0-9\-._~]+|[\uA0000-\uD7FF]+|[\uF900}-\uFDCF]+|[\uFDF0}-\uFFEF]+|[\u10000}-\u1FFFD]+|[\u20000}-\u2FFFD]+|[\u30000}-\u3FFFD]+|[\u40000}-\u4FFFD]+|[\u50000}-\u5FFFD]+|[\u60000}-\u6FFFD]+|[\u70000}-\u7FFFD]+|[\u80000}-\u8FFFD]+|[\u90000}-\u9FFFD]+|[\uA0000}-\uAFFFD]+|[\uB0000}-\uBFFFD]+|[\uC0000}-\uCFFFD]+|[\uD0000}-\uDFFFD]+|[\uE1000}-\uEFFFD]+)+$' )
"#;

/// Number of definitions in [`CUSTOM_SYNTAXES`]
pub const CUSTOM_SYNTAX_COUNT: usize = 7;

/// Attribute type OID to the custom syntax OID it is switched to. Some
/// syntaxes serve more than one attribute type.
pub const SYNTAX_REPLACEMENTS: &[(&str, &str)] = &[
    ("1.3.6.1.4.1.56521.101.2.3.3", "1.3.6.1.4.1.56521.101.2.1.3"),
    ("1.3.6.1.4.1.56521.101.2.3.4", "1.3.6.1.4.1.56521.101.2.1.4"),
    ("1.3.6.1.4.1.56521.101.2.3.5", "1.3.6.1.4.1.56521.101.2.1.5"),
    ("1.3.6.1.4.1.56521.101.2.3.6", "1.3.6.1.4.1.56521.101.2.1.5"),
    ("1.3.6.1.4.1.56521.101.2.3.7", "1.3.6.1.4.1.56521.101.2.1.7"),
    ("1.3.6.1.4.1.56521.101.2.3.8", "1.3.6.1.4.1.56521.101.2.1.7"),
    ("1.3.6.1.4.1.56521.101.2.3.18", "1.3.6.1.4.1.56521.101.2.1.18"),
    ("1.3.6.1.4.1.56521.101.2.3.19", "1.3.6.1.4.1.56521.101.2.1.19"),
    ("1.3.6.1.4.1.56521.101.2.3.20", "1.3.6.1.4.1.56521.101.2.1.20"),
];

/// Look up the custom syntax replacing the syntax of attribute type `oid`
pub fn replacement_syntax(oid: &str) -> Option<&'static str> {
    SYNTAX_REPLACEMENTS
        .iter()
        .find(|(attribute, _)| *attribute == oid)
        .map(|(_, syntax)| *syntax)
}
