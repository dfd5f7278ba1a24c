//! Element factory: resolves qualified names to fresh element instances

use std::sync::{Arc, LazyLock};

use tracing::{error, trace};

use crate::bulk::{BulkRegistrar, TypeSource};
use crate::descriptor::ElementDescriptor;
use crate::element::{Element, Tagged, XmlElement};
use crate::error::FactoryError;
use crate::key::QualifiedKey;
use crate::protocol;
use crate::registry::Registry;

static GLOBAL: LazyLock<ElementFactory> = LazyLock::new(|| {
    let factory = ElementFactory::new();
    if let Err(e) = factory.register_builtins() {
        error!(error = %e, "built-in elements not registered on the global factory");
    }
    factory
});

/// Builds typed elements for the names a parser reports
///
/// Cloning shares the underlying [`Registry`].
#[derive(Debug, Clone, Default)]
pub struct ElementFactory {
    registry: Arc<Registry>,
}

impl ElementFactory {
    /// Create a factory over a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory over an existing registry
    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Create a factory with the built-in protocol elements registered
    pub fn with_builtins() -> Result<Self, FactoryError> {
        let factory = Self::new();
        factory.register_builtins()?;
        Ok(factory)
    }

    /// Process-wide factory with the built-ins, created on first use
    ///
    /// A failure to register the built-ins is logged and leaves it empty.
    pub fn global() -> &'static ElementFactory {
        &GLOBAL
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Register every built-in protocol element, returning the entry count
    pub fn register_builtins(&self) -> Result<usize, FactoryError> {
        self.register_from_source(&protocol::builtins())
    }

    /// Register `T` under `local_name` in the empty namespace
    pub fn register_element<T: Element + Default>(
        &self,
        local_name: &str,
    ) -> Result<(), FactoryError> {
        self.register_element_ns::<T>("", local_name)
    }

    /// Register `T` under an explicit namespace, replacing any previous entry
    pub fn register_element_ns<T: Element + Default>(
        &self,
        namespace: &str,
        local_name: &str,
    ) -> Result<(), FactoryError> {
        self.register_descriptor(namespace, local_name, ElementDescriptor::of::<T>())
    }

    /// Register `T` under each tag it declares; no tags is a no-op
    pub fn register_declared<T: Element + Default + Tagged>(&self) -> Result<usize, FactoryError> {
        BulkRegistrar::new(&self.registry).register_type::<T>()
    }

    /// Register a hand-built descriptor
    pub fn register_descriptor(
        &self,
        namespace: &str,
        local_name: &str,
        descriptor: ElementDescriptor,
    ) -> Result<(), FactoryError> {
        let key = QualifiedKey::new(namespace, local_name)?;
        self.registry.register(key, descriptor);
        Ok(())
    }

    /// Register every tagged element type in `source`
    pub fn register_from_source<S>(&self, source: &S) -> Result<usize, FactoryError>
    where
        S: TypeSource + ?Sized,
    {
        BulkRegistrar::new(&self.registry).register_from_source(source)
    }

    /// Descriptor registered for a name, without constructing anything
    pub fn resolve(&self, namespace: &str, local_name: &str) -> Option<ElementDescriptor> {
        let key = QualifiedKey::new(namespace, local_name).ok()?;
        self.registry.lookup(&key)
    }

    /// Build the element for a parsed name
    ///
    /// `prefix` is carried onto the element but plays no part in resolution.
    /// Unregistered names produce an [`XmlElement`]; a registered type whose
    /// constructor fails is reported as [`FactoryError::Construction`].
    pub fn get_element(
        &self,
        prefix: &str,
        local_name: &str,
        namespace: &str,
    ) -> Result<Box<dyn Element>, FactoryError> {
        self.get_element_resolved(prefix, local_name, namespace)
            .map(|(_, element)| element)
    }

    /// Like [`get_element`](Self::get_element), also returning the type name
    /// of the descriptor that built the element, or `None` for the fallback
    pub fn get_element_resolved(
        &self,
        prefix: &str,
        local_name: &str,
        namespace: &str,
    ) -> Result<(Option<&'static str>, Box<dyn Element>), FactoryError> {
        let key = QualifiedKey::new(namespace, local_name)?;

        // The read lock is released before construction runs.
        let descriptor = self.registry.lookup(&key);

        let (type_name, mut element) = match descriptor {
            Some(descriptor) => {
                let element = descriptor.construct().map_err(|source| {
                    error!(
                        key = %key,
                        type_name = descriptor.type_name(),
                        %source,
                        "element construction failed"
                    );
                    FactoryError::construction(key, descriptor.type_name(), source)
                })?;
                (Some(descriptor.type_name()), element)
            }
            None => {
                trace!(key = %key, "no element type registered, using generic element");
                let element: Box<dyn Element> = if namespace.is_empty() {
                    Box::new(XmlElement::new(local_name))
                } else {
                    Box::new(XmlElement::with_namespace(namespace, local_name))
                };
                (None, element)
            }
        };

        element.node_mut().set_prefix(prefix);
        Ok((type_name, element))
    }
}
