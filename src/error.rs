//! Error types for registration and element construction

use thiserror::Error;

use crate::key::QualifiedKey;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// A key or declared tag that cannot name an element
    #[error("invalid qualified name '{{{namespace}}}{local_name}': {reason}")]
    InvalidName {
        namespace: String,
        local_name: String,
        reason: &'static str,
    },

    /// A registered element type failed to construct
    #[error("failed to construct {type_name} for {key}: {source}")]
    Construction {
        key: QualifiedKey,
        type_name: &'static str,
        #[source]
        source: ConstructError,
    },
}

impl FactoryError {
    /// Create an invalid name error
    pub fn invalid_name(
        namespace: impl Into<String>,
        local_name: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidName {
            namespace: namespace.into(),
            local_name: local_name.into(),
            reason,
        }
    }

    /// Create a construction error
    pub fn construction(key: QualifiedKey, type_name: &'static str, source: ConstructError) -> Self {
        Self::Construction {
            key,
            type_name,
            source,
        }
    }

    /// The key involved, when the error concerns a well-formed key
    pub fn key(&self) -> Option<&QualifiedKey> {
        match self {
            Self::Construction { key, .. } => Some(key),
            Self::InvalidName { .. } => None,
        }
    }
}

/// Reason a descriptor's constructor could not produce an element
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ConstructError {
    message: String,
}

impl ConstructError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_display() {
        let err = FactoryError::invalid_name("urn:x", "", "local name must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid qualified name '{urn:x}': local name must not be empty"
        );
        assert!(err.key().is_none());
    }

    #[test]
    fn test_construction_display() {
        let key = QualifiedKey::new("urn:x", "thing").unwrap();
        let err = FactoryError::construction(key.clone(), "Thing", ConstructError::new("abstract"));
        assert_eq!(err.to_string(), "failed to construct Thing for {urn:x}thing: abstract");
        assert_eq!(err.key(), Some(&key));
    }
}
