//! Declared qualified-name metadata for element types

use crate::error::FactoryError;
use crate::key::QualifiedKey;

/// A `(namespace, local name)` pair an element type asks to be registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclaredTag {
    pub namespace: &'static str,
    pub local_name: &'static str,
}

impl DeclaredTag {
    pub const fn new(namespace: &'static str, local_name: &'static str) -> Self {
        Self {
            namespace,
            local_name,
        }
    }

    /// Validate the tag and turn it into a registry key
    pub fn key(&self) -> Result<QualifiedKey, FactoryError> {
        QualifiedKey::new(self.namespace, self.local_name)
    }
}

/// Element types that declare the qualified names they handle
///
/// A type may declare no tags, in which case declarative registration is a
/// no-op for it.
pub trait Tagged {
    fn declared_tags() -> &'static [DeclaredTag];
}
