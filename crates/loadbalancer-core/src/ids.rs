//! Compound identifiers stored in labels and annotations.
//!
//! The controller encodes the owning load balancer of an object as
//! `namespace.name` in a single label value. This module decodes and
//! re-encodes that form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{CoreError, Result};

/// Separator between namespace and name.
pub const SEPARATOR: char = '.';

/// A namespaced object reference encoded as `namespace.name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QualifiedName {
    /// Namespace segment.
    pub namespace: String,
    /// Name segment.
    pub name: String,
}

impl QualifiedName {
    /// Create a new qualified name from its parts.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// Split a `namespace.name` value into its two segments.
///
/// Either segment may be empty, so `"."` yields two empty strings.
///
/// # Errors
///
/// Returns [`CoreError::MalformedIdentifier`] unless the value contains
/// exactly one separator.
pub fn split_namespace_and_name(value: &str) -> Result<QualifiedName> {
    let mut parts = value.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(namespace), Some(name), None) => Ok(QualifiedName::new(namespace, name)),
        _ => Err(CoreError::malformed(value)),
    }
}

impl FromStr for QualifiedName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        split_namespace_and_name(s)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.namespace, self.name)
    }
}

impl TryFrom<String> for QualifiedName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<QualifiedName> for String {
    fn from(qualified: QualifiedName) -> Self {
        qualified.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_valid() {
        let parsed = split_namespace_and_name("ns.name").unwrap();
        assert_eq!(parsed.namespace, "ns");
        assert_eq!(parsed.name, "name");
    }

    #[test]
    fn split_without_separator_fails() {
        let result = split_namespace_and_name("bad");
        assert!(matches!(
            result,
            Err(CoreError::MalformedIdentifier { ref value }) if value == "bad"
        ));
    }

    #[test]
    fn split_with_extra_separator_fails() {
        assert!(matches!(
            split_namespace_and_name("a.b.c"),
            Err(CoreError::MalformedIdentifier { .. })
        ));
    }

    #[test]
    fn split_allows_empty_segments() {
        assert_eq!(
            split_namespace_and_name(".").unwrap(),
            QualifiedName::new("", "")
        );
        assert_eq!(
            split_namespace_and_name("ns.").unwrap(),
            QualifiedName::new("ns", "")
        );
    }

    #[test]
    fn split_empty_string_fails() {
        assert!(split_namespace_and_name("").is_err());
    }

    #[test]
    fn display_roundtrip() {
        let qualified = QualifiedName::new("kube-system", "ingress");
        let encoded = qualified.to_string();
        assert_eq!(encoded, "kube-system.ingress");
        assert_eq!(encoded.parse::<QualifiedName>().unwrap(), qualified);
    }

    #[test]
    fn serde_json_uses_compact_form() {
        let qualified = QualifiedName::new("default", "lb");
        let json = serde_json::to_string(&qualified).unwrap();
        assert_eq!(json, "\"default.lb\"");

        let parsed: QualifiedName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, qualified);
        assert!(serde_json::from_str::<QualifiedName>("\"nodots\"").is_err());
    }
}
