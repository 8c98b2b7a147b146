//! dn2oid/oid2dn conversion between dot notation and registration DNs

use tracing::{debug, trace};

use crate::base::RegistrationBase;
use crate::dot_notation::DotNotation;
use crate::error::{Error, Result};
use crate::name::{DistinguishedName, RelativeDistinguishedName, split_components};

/// What to do with a DN component that is not a single `attribute=value` pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RdnPolicy {
    /// Leave the component out of the resulting dot notation
    #[default]
    Drop,
    /// Fail the whole conversion
    Reject,
}

/// Case handling for values taken from a DN
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValueCase {
    /// Values are read from the lowercased DN
    #[default]
    Fold,
    /// Values keep the case they have in the input DN
    Preserve,
}

/// Converts between dot notation and DNs beneath a registration base.
///
/// Suffix matching is always case insensitive. Both directions are pure and
/// a `Converter` can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Converter {
    base: RegistrationBase,
    rdn_policy: RdnPolicy,
    value_case: ValueCase,
}

impl Converter {
    pub fn new(base: RegistrationBase) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn with_rdn_policy(mut self, rdn_policy: RdnPolicy) -> Self {
        self.rdn_policy = rdn_policy;
        self
    }

    pub fn with_value_case(mut self, value_case: ValueCase) -> Self {
        self.value_case = value_case;
        self
    }

    pub fn base(&self) -> &RegistrationBase {
        &self.base
    }

    /// Build the registration DN of `dot`: one `n=<arc>` RDN per arc, leaf
    /// first, followed by the registration base.
    pub fn to_dn(&self, dot: &DotNotation) -> DistinguishedName {
        let rdns = dot
            .arcs()
            .iter()
            .rev()
            .map(|arc| RelativeDistinguishedName::arc(arc.as_str()))
            .collect();
        DistinguishedName::new(rdns, self.base.clone())
    }

    /// Read the dot notation back out of a registration DN.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `dn` is empty
    /// - [`Error::NotRegistration`] if `dn` does not end with `,<base>`
    /// - [`Error::MalformedRdn`] if a component is not `attribute=value` and
    ///   the converter uses [`RdnPolicy::Reject`]
    pub fn to_dot(&self, dn: &str) -> Result<DotNotation> {
        if dn.is_empty() {
            return Err(Error::EmptyInput);
        }

        let folded = dn.to_lowercase();
        let suffix = self.base.folded_suffix();
        // suffix carries the leading comma, the guard compares against the bare base
        let base_len = suffix.len() - 1;

        let prefix = if !folded.ends_with(suffix.as_str()) || folded.len() + 1 < base_len {
            None
        } else {
            match self.value_case {
                ValueCase::Fold => folded.strip_suffix(suffix.as_str()),
                ValueCase::Preserve => strip_folded_suffix(dn, &suffix),
            }
        };
        let Some(prefix) = prefix else {
            debug!(dn = %dn, base = %self.base, "DN is not beneath the registration base");
            return Err(Error::NotRegistration(dn.to_string()));
        };

        let mut arcs = Vec::new();
        for component in split_components(prefix).rev() {
            match component.parse::<RelativeDistinguishedName>() {
                Ok(rdn) => arcs.push(rdn.value),
                Err(err) => match self.rdn_policy {
                    RdnPolicy::Drop => trace!(component, "dropping malformed RDN component"),
                    RdnPolicy::Reject => return Err(err),
                },
            }
        }

        Ok(DotNotation::new(arcs))
    }

    /// String form of [`Converter::to_dn`]. Empty input yields an empty string.
    pub fn oid2dn(&self, dot: &str) -> String {
        dot.parse::<DotNotation>()
            .map(|dot| self.to_dn(&dot).to_string())
            .unwrap_or_default()
    }

    /// String form of [`Converter::to_dot`]. Every error yields an empty string.
    pub fn dn2oid(&self, dn: &str) -> String {
        self.to_dot(dn)
            .map(|dot| dot.to_string())
            .unwrap_or_default()
    }
}

/// Strip the tail of `dn` whose lowercase form equals `folded_suffix`,
/// leaving the rest of `dn` in its original case.
fn strip_folded_suffix<'a>(dn: &'a str, folded_suffix: &str) -> Option<&'a str> {
    dn.char_indices()
        .rev()
        .map(|(i, _)| (i, dn[i..].to_lowercase()))
        .take_while(|(_, tail)| tail.len() <= folded_suffix.len())
        .find(|(_, tail)| tail == folded_suffix)
        .map(|(i, _)| &dn[..i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DEMO_DN: &str = "n=56521,n=1,n=4,n=1,n=6,n=3,n=1,ou=Registrations,o=rA";

    fn custom_base() -> RegistrationBase {
        RegistrationBase::new("ou=Arcs,dc=Example,dc=COM").unwrap()
    }

    #[rstest]
    #[case("1.3.6.1.4.1.56521", DEMO_DN)]
    #[case("2", "n=2,ou=Registrations,o=rA")]
    #[case("1..2", "n=2,n=,n=1,ou=Registrations,o=rA")]
    #[case("1.", "n=,n=1,ou=Registrations,o=rA")]
    #[case("x.y", "n=y,n=x,ou=Registrations,o=rA")]
    #[case("", "")]
    fn test_oid2dn(#[case] dot: &str, #[case] expected: &str) {
        assert_eq!(Converter::default().oid2dn(dot), expected);
    }

    #[rstest]
    #[case(DEMO_DN, "1.3.6.1.4.1.56521")]
    #[case("n=56521,OU=Registrations,O=rA", "56521")]
    #[case("N=56521,n=1,OU=REGISTRATIONS,O=RA", "1.56521")]
    #[case("n=Foo,ou=Registrations,o=rA", "foo")]
    #[case("n=56521,badcomponent,n=1,ou=Registrations,o=rA", "1.56521")]
    #[case("bad,worse,ou=Registrations,o=rA", "")]
    #[case("n=2,n=,n=1,ou=Registrations,o=rA", "1..2")]
    #[case("cn=7,ou=Registrations,o=rA", "7")]
    #[case("n=56521,ou=Somewhere,o=else", "")]
    #[case("ou=Registrations,o=rA", "")]
    #[case("n=1ou=Registrations,o=rA", "")]
    #[case("", "")]
    fn test_dn2oid(#[case] dn: &str, #[case] expected: &str) {
        assert_eq!(Converter::default().dn2oid(dn), expected);
    }

    #[rstest]
    #[case("", Error::EmptyInput)]
    #[case("n=1,ou=Elsewhere", Error::NotRegistration("n=1,ou=Elsewhere".to_string()))]
    fn test_to_dot_errors(#[case] dn: &str, #[case] expected: Error) {
        assert_eq!(Converter::default().to_dot(dn), Err(expected));
    }

    #[test]
    fn test_to_dot_tells_empty_apart_from_foreign() {
        let converter = Converter::default();
        let dot = converter.to_dot("bad,ou=Registrations,o=rA").unwrap();
        assert!(dot.is_empty());
        assert!(converter.to_dot("bad,ou=Other,o=rA").is_err());
    }

    #[test]
    fn test_reject_policy() {
        let converter = Converter::default().with_rdn_policy(RdnPolicy::Reject);
        let dn = "n=56521,badcomponent,n=1,ou=Registrations,o=rA";
        assert_eq!(
            converter.to_dot(dn),
            Err(Error::MalformedRdn("badcomponent".to_string()))
        );
        assert_eq!(converter.dn2oid(dn), "");
        assert_eq!(converter.dn2oid(DEMO_DN), "1.3.6.1.4.1.56521");
    }

    #[rstest]
    #[case("n=ABC,n=1,OU=Registrations,o=ra", "1.ABC")]
    #[case("n=Foo,ou=REGISTRATIONS,O=RA", "Foo")]
    #[case("n=İx,ou=Registrations,o=rA", "İx")]
    #[case("n=1,ou=Other,o=rA", "")]
    fn test_preserve_value_case(#[case] dn: &str, #[case] expected: &str) {
        let converter = Converter::default().with_value_case(ValueCase::Preserve);
        assert_eq!(converter.dn2oid(dn), expected);
    }

    #[test]
    fn test_custom_base() {
        let converter = Converter::new(custom_base());
        let dn = converter.oid2dn("2.25.1");
        assert_eq!(dn, "n=1,n=25,n=2,ou=Arcs,dc=Example,dc=COM");
        assert_eq!(converter.dn2oid(&dn), "2.25.1");
        assert_eq!(converter.dn2oid(DEMO_DN), "");
        assert_eq!(Converter::default().dn2oid(&dn), "");
    }

    #[test]
    fn test_to_dn() {
        let dot: DotNotation = "1.3.6".parse().unwrap();
        let dn = Converter::default().to_dn(&dot);
        assert_eq!(
            dn.rdns(),
            &[
                RelativeDistinguishedName::arc("6"),
                RelativeDistinguishedName::arc("3"),
                RelativeDistinguishedName::arc("1"),
            ]
        );
        assert_eq!(dn.base(), &RegistrationBase::default());
    }

    #[rstest]
    #[case("n=1,ou=arcs,dc=example,dc=com")]
    #[case("n=1,OU=ARCS,DC=EXAMPLE,DC=COM")]
    fn test_strip_folded_suffix(#[case] dn: &str) {
        let suffix = custom_base().folded_suffix();
        assert_eq!(strip_folded_suffix(dn, &suffix), Some("n=1"));
    }
}
