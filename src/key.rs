//! Qualified element names

use std::fmt;
use std::str::FromStr;

use crate::error::FactoryError;

/// A `(namespace, local name)` pair identifying an element independent of prefix.
///
/// The empty namespace is a distinct, valid value; it does not match "any
/// namespace". The canonical string form is Clark notation, `{namespace}local`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedKey {
    namespace: String,
    local_name: String,
}

impl QualifiedKey {
    /// Create a key, rejecting an empty local name
    ///
    /// The namespace may be any string, braces included.
    pub fn new(
        namespace: impl Into<String>,
        local_name: impl Into<String>,
    ) -> Result<Self, FactoryError> {
        let namespace = namespace.into();
        let local_name = local_name.into();

        if local_name.is_empty() {
            return Err(FactoryError::invalid_name(
                namespace,
                local_name,
                "local name must not be empty",
            ));
        }

        Ok(Self {
            namespace,
            local_name,
        })
    }

    /// Create a key in the empty namespace
    pub fn local(local_name: impl Into<String>) -> Result<Self, FactoryError> {
        Self::new("", local_name)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// True when the key lives in the empty namespace
    pub fn has_empty_namespace(&self) -> bool {
        self.namespace.is_empty()
    }
}

impl fmt::Display for QualifiedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace, self.local_name)
    }
}

impl FromStr for QualifiedKey {
    type Err = FactoryError;

    /// Parse Clark notation. A string without a leading `{` is a local name
    /// in the empty namespace. The namespace ends at the first `}`, so a
    /// namespace containing `}` cannot be written in this form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('{') {
            Some(rest) => match rest.split_once('}') {
                Some((namespace, local_name)) => Self::new(namespace, local_name),
                None => Err(FactoryError::invalid_name(
                    rest,
                    "",
                    "unterminated namespace in qualified name",
                )),
            },
            None => Self::new("", s),
        }
    }
}
