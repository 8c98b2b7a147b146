//! Extraction of oiddir schema definitions from an I-D revision
//!
//! A definition is recognised when all of the following hold:
//!
//! - an empty line immediately precedes it
//! - it opens with at least six spaces, a parenthesis, one space and an OID
//!   beneath `1.3.6.1.4.1.56521.101.2.(1|3|5|7)`
//! - it closes with a parenthesis and newline followed by an empty line

use std::borrow::Cow;
use std::fmt;

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::definition::{CUSTOM_SYNTAXES, Definition, Kind, replacement_syntax};
use crate::error::{Error, Result};
use crate::format::Format;

const DEFINITION_PATTERN: &str = r"(?ms)^$\n^(\s{6,}\(\s(1\.3\.6\.1\.4\.1\.56521\.101\.2\.(1|3|5|7)\.\d+).+?\))\n^$";
const EXPLICIT_SYNTAX_PATTERN: &str = r"SYNTAX\s(0|1|2)(\.\d+)+";
const SUPERIOR_PATTERN: &str = r"SUP\s\w+";
const SPACES_PATTERN: &str = r" +";

const X_ORIGIN: &str = "X-ORIGIN 'draft-coretta-oiddir-schema' )";
const ORIGIN_VALUE: &str = "draft-coretta-oiddir-schema'";
const X_WARNING: &str = "X-WARNING 'syntax replacement'";
const CONTINUATION_INDENT: &str = "          ";

/// Extraction settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub format: Format,
    /// Name of the source document, shown in the output header
    pub source: String,
    /// Collapse each definition onto a single line
    pub no_newlines: bool,
    /// Add the custom LDAP syntaxes and switch eligible attribute types to
    /// them (OpenDJ only)
    pub custom_syntaxes: bool,
    /// Do not append the X-ORIGIN extension
    pub no_extensions: bool,
}

impl Options {
    pub fn new(format: Format, source: impl Into<String>) -> Self {
        Self {
            format,
            source: source.into(),
            no_newlines: false,
            custom_syntaxes: false,
            no_extensions: false,
        }
    }
}

struct Patterns {
    definition: Regex,
    explicit_syntax: Regex,
    superior: Regex,
    spaces: Regex,
}

impl Patterns {
    fn new() -> Result<Self> {
        Ok(Self {
            definition: Regex::new(DEFINITION_PATTERN)?,
            explicit_syntax: Regex::new(EXPLICIT_SYNTAX_PATTERN)?,
            superior: Regex::new(SUPERIOR_PATTERN)?,
            spaces: Regex::new(SPACES_PATTERN)?,
        })
    }

    fn definitions(&self, text: &str) -> Vec<Definition> {
        self.definition
            .captures_iter(text)
            .filter_map(|caps| {
                Some(Definition {
                    text: caps.get(1)?.as_str().trim().to_string(),
                    oid: caps.get(2)?.as_str().to_string(),
                    kind: Kind::from_arc(caps.get(3)?.as_str()),
                })
            })
            .collect()
    }

    /// Point an attribute type at `syntax`, rewriting its SYNTAX clause or
    /// adding one after its SUP clause, and flag the replacement.
    fn replace_syntax(&self, value: &str, syntax: &str) -> String {
        let clause = format!("SYNTAX {}", syntax);
        let replaced = if self.explicit_syntax.is_match(value) {
            self.explicit_syntax
                .replace_all(value, NoExpand(&clause))
                .into_owned()
        } else if let Some(sup) = self.superior.find(value) {
            format!(
                "{}\n{}{}{}",
                &value[..sup.end()],
                CONTINUATION_INDENT,
                clause,
                &value[sup.end()..]
            )
        } else {
            value.to_string()
        };
        replaced.replace(
            ORIGIN_VALUE,
            &format!("{}\n{}{}", ORIGIN_VALUE, CONTINUATION_INDENT, X_WARNING),
        )
    }

    /// Remove line breaks and collapse consecutive spaces
    fn single_line(&self, value: &str) -> String {
        let joined = value.replace(&['\r', '\n'][..], "");
        self.spaces.replace_all(&joined, " ").into_owned()
    }
}

/// Definitions extracted from a document, sorted by kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    format: Format,
    source: String,
    ldap_syntaxes: Vec<String>,
    attribute_types: Vec<String>,
    object_classes: Vec<String>,
    name_forms: Vec<String>,
    unknown: Vec<String>,
}

impl Extraction {
    fn new(options: &Options) -> Self {
        Self {
            format: options.format,
            source: options.source.clone(),
            ldap_syntaxes: Vec::new(),
            attribute_types: Vec::new(),
            object_classes: Vec::new(),
            name_forms: Vec::new(),
            unknown: Vec::new(),
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn ldap_syntaxes(&self) -> &[String] {
        &self.ldap_syntaxes
    }

    pub fn attribute_types(&self) -> &[String] {
        &self.attribute_types
    }

    pub fn object_classes(&self) -> &[String] {
        &self.object_classes
    }

    pub fn name_forms(&self) -> &[String] {
        &self.name_forms
    }

    /// Definitions that fit no section of the chosen format
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    /// Fails with [`Error::UnknownElements`] if any definition was left
    /// unclassified. Ideally there are none.
    pub fn check(&self) -> Result<()> {
        match self.unknown.len() {
            0 => Ok(()),
            n => Err(Error::UnknownElements(n)),
        }
    }

    fn push(&mut self, definition: Definition, options: &Options, patterns: &Patterns) {
        debug!(oid = %definition.oid, kind = ?definition.kind, "classifying definition");

        let mut value = definition.text;
        if !options.no_extensions {
            // drop the closing parenthesis, X_ORIGIN brings its own
            value.pop();
            if !options.no_newlines {
                value.push('\n');
                value.push_str(CONTINUATION_INDENT);
            }
            value.push_str(X_ORIGIN);
        }

        let opendj = self.format.is_opendj();
        match definition.kind {
            Some(Kind::LdapSyntax) if opendj => {
                if options.no_newlines {
                    value = patterns.single_line(&value);
                }
                self.ldap_syntaxes.push(value);
            }
            Some(Kind::AttributeType) => {
                if opendj && options.custom_syntaxes {
                    if let Some(syntax) = replacement_syntax(&definition.oid) {
                        value = patterns.replace_syntax(&value, syntax);
                    }
                }
                if options.no_newlines {
                    value = patterns.single_line(&value);
                }
                self.attribute_types.push(value);
            }
            Some(Kind::ObjectClass) => {
                if options.no_newlines {
                    value = patterns.single_line(&value);
                }
                self.object_classes.push(value);
            }
            Some(Kind::NameForm) => {
                if options.no_newlines {
                    value = patterns.single_line(&value);
                } else if !opendj {
                    // name forms are unsupported here, keep them commented out
                    value = value.replace('\r', "\r#").replace('\n', "\n#");
                }
                self.name_forms.push(value);
            }
            _ => self.unknown.push(value),
        }
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    keyword: &str,
    entries: &[String],
) -> fmt::Result {
    writeln!(f, "# {} {}\n#", entries.len(), title)?;
    for entry in entries {
        writeln!(f, "{}{}\n#", keyword, entry)?;
    }
    Ok(())
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## OID Directory schema - EXPERIMENTAL USE ONLY")?;
        writeln!(f, "## Formatted for {}", self.format)?;
        writeln!(f, "## Sourced from {}", self.source)?;
        writeln!(f, "##{}", self.format.preamble())?;

        let format = self.format;
        if format.is_opendj() {
            write_section(
                f,
                "CUSTOM ldap syntaxes",
                format.ldap_syntax_keyword(),
                &self.ldap_syntaxes,
            )?;
        }
        write_section(
            f,
            "attribute types",
            format.attribute_type_keyword(),
            &self.attribute_types,
        )?;
        write_section(
            f,
            "object classes",
            format.object_class_keyword(),
            &self.object_classes,
        )?;
        if format.is_opendj() {
            write_section(f, "name forms", format.name_form_keyword(), &self.name_forms)?;
        } else {
            let disabled = format!("#{}", format.name_form_keyword());
            write_section(f, "(disabled) name forms", &disabled, &self.name_forms)?;
        }

        if !self.unknown.is_empty() {
            writeln!(f, "# {} unknown elements\n#", self.unknown.len())?;
            for element in &self.unknown {
                writeln!(f, "#{}\n#\n#", element)?;
            }
        }
        Ok(())
    }
}

/// Extract the oiddir schema definitions found in `text`.
///
/// # Errors
///
/// Returns [`Error::NoDefinitions`] if nothing in `text` matches.
pub fn extract(text: &str, options: &Options) -> Result<Extraction> {
    let patterns = Patterns::new()?;

    let text = if options.format.is_opendj() && options.custom_syntaxes {
        Cow::Owned(format!("{}\n{}", CUSTOM_SYNTAXES, text))
    } else {
        Cow::Borrowed(text)
    };

    let definitions = patterns.definitions(&text);
    if definitions.is_empty() {
        return Err(Error::NoDefinitions);
    }
    debug!(count = definitions.len(), "matched schema definitions");

    let mut extraction = Extraction::new(options);
    for definition in definitions {
        extraction.push(definition, options, &patterns);
    }
    Ok(extraction)
}
