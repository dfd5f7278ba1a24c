//! Factory configuration loaded from TOML
//!
//! A configuration decides whether the built-in protocol elements are loaded
//! and maps extra qualified names onto built-in element types:
//!
//! ```toml
//! builtins = true
//!
//! [[element]]
//! namespace = "jabber:component:accept"
//! name = "message"
//! type = "Message"
//! ```

use std::path::Path;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::error::FactoryError;
use crate::factory::ElementFactory;
use crate::key::QualifiedKey;
use crate::protocol;

/// Errors that can occur when loading or applying a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("unknown element type '{name}' (known types: {known})")]
    UnknownType { name: String, known: String },
    #[error(transparent)]
    Factory(#[from] FactoryError),
}

impl ConfigError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let ConfigError::ParseError(err) = self else {
            return self.to_string();
        };
        let Some(span) = err.span() else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_config(Config::default().with_color(false))
            .with_message("invalid factory configuration")
            .with_label(
                Label::new((filename, span))
                    .with_message(err.message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// One extra `(namespace, name) -> type` mapping
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ElementMapping {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    /// Built-in type name, e.g. `Message`
    #[serde(rename = "type")]
    pub element: String,
}

/// Configuration for building an [`ElementFactory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryConfig {
    /// Register the built-in protocol elements
    pub builtins: bool,
    /// Extra mappings, applied after the built-ins
    pub elements: Vec<ElementMapping>,
}

/// TOML structure for deserializing configurations
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    builtins: Option<bool>,
    #[serde(default)]
    element: Vec<ElementMapping>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            builtins: true,
            elements: Vec::new(),
        }
    }
}

impl FactoryConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        Ok(Self {
            builtins: parsed.builtins.unwrap_or(true),
            elements: parsed.element,
        })
    }

    /// Enable or disable the built-in elements
    pub fn with_builtins(mut self, builtins: bool) -> Self {
        self.builtins = builtins;
        self
    }

    /// Add a mapping
    pub fn with_element(
        mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        element: impl Into<String>,
    ) -> Self {
        self.elements.push(ElementMapping {
            namespace: namespace.into(),
            name: name.into(),
            element: element.into(),
        });
        self
    }

    /// Apply this configuration to `factory`, returning the entries written
    ///
    /// Every mapping is validated before any is registered.
    pub fn apply(&self, factory: &ElementFactory) -> Result<usize, ConfigError> {
        let mut entries = Vec::with_capacity(self.elements.len());
        for mapping in &self.elements {
            let key = QualifiedKey::new(mapping.namespace.as_str(), mapping.name.as_str())?;
            let descriptor =
                protocol::builtin(&mapping.element).ok_or_else(|| ConfigError::UnknownType {
                    name: mapping.element.clone(),
                    known: protocol::builtin_names().join(", "),
                })?;
            entries.push((key, descriptor));
        }

        let mut count = 0;
        if self.builtins {
            count += factory.register_builtins()?;
        }
        count += factory.registry().register_all(entries);
        info!(entries = count, builtins = self.builtins, "applied factory configuration");
        Ok(count)
    }

    /// Build a new factory from this configuration
    pub fn build(&self) -> Result<ElementFactory, ConfigError> {
        let factory = ElementFactory::new();
        self.apply(&factory)?;
        Ok(factory)
    }
}
