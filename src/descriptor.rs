//! Construction capabilities stored in the registry

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use crate::element::Element;
use crate::error::ConstructError;

type Constructor = dyn Fn() -> Result<Box<dyn Element>, ConstructError> + Send + Sync;

/// How to build a fresh element for a registered name
///
/// Cloning is cheap; clones share the same constructor.
#[derive(Clone)]
pub struct ElementDescriptor {
    type_name: &'static str,
    type_id: Option<TypeId>,
    construct: Arc<Constructor>,
}

impl ElementDescriptor {
    /// Descriptor for a default-constructible element type
    pub fn of<T: Element + Default>() -> Self {
        Self {
            type_name: short_type_name::<T>(),
            type_id: Some(TypeId::of::<T>()),
            construct: Arc::new(|| {
                Ok::<Box<dyn Element>, ConstructError>(Box::new(T::default()))
            }),
        }
    }

    /// Descriptor backed by an infallible constructor function
    pub fn from_fn<F>(type_name: &'static str, f: F) -> Self
    where
        F: Fn() -> Box<dyn Element> + Send + Sync + 'static,
    {
        Self {
            type_name,
            type_id: None,
            construct: Arc::new(move || Ok::<_, ConstructError>(f())),
        }
    }

    /// Descriptor backed by a constructor that can fail
    pub fn try_from_fn<F>(type_name: &'static str, f: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Element>, ConstructError> + Send + Sync + 'static,
    {
        Self {
            type_name,
            type_id: None,
            construct: Arc::new(f),
        }
    }

    /// Build a new element
    pub fn construct(&self) -> Result<Box<dyn Element>, ConstructError> {
        (self.construct)()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True if this descriptor was created by [`ElementDescriptor::of::<T>`]
    pub fn describes<T: Element>(&self) -> bool {
        self.type_id == Some(TypeId::of::<T>())
    }

    /// True if both descriptors share the same constructor
    pub fn same_constructor(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.construct, &other.construct)
    }
}

impl fmt::Debug for ElementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementDescriptor")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Last path segment of a type name, e.g. `Message` for `crate::protocol::Message`
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::XmlElement;

    #[derive(Debug, Default)]
    struct Ping {
        node: XmlElement,
    }

    impl Element for Ping {
        fn node(&self) -> &XmlElement {
            &self.node
        }

        fn node_mut(&mut self) -> &mut XmlElement {
            &mut self.node
        }
    }

    #[test]
    fn test_of_constructs_type() {
        let descriptor = ElementDescriptor::of::<Ping>();
        assert_eq!(descriptor.type_name(), "Ping");
        assert!(descriptor.describes::<Ping>());
        assert!(!descriptor.describes::<XmlElement>());

        let element = descriptor.construct().unwrap();
        assert!(element.is::<Ping>());
    }

    #[test]
    fn test_each_construct_is_a_new_instance() {
        let descriptor = ElementDescriptor::from_fn("Body", || {
            let mut el = XmlElement::new("body");
            el.set_text("x");
            Box::new(el)
        });
        let mut first = descriptor.construct().unwrap();
        first.node_mut().set_text("changed");
        let second = descriptor.construct().unwrap();
        assert_eq!(second.node().text(), Some("x"));
        assert!(!descriptor.describes::<XmlElement>());
    }

    #[test]
    fn test_try_from_fn_reports_failure() {
        let descriptor = ElementDescriptor::try_from_fn("Abstract", || {
            Err(ConstructError::new("abstract type"))
        });
        let err = descriptor.construct().unwrap_err();
        assert_eq!(err.message(), "abstract type");
    }

    #[test]
    fn test_clones_share_constructor() {
        let a = ElementDescriptor::of::<Ping>();
        let b = a.clone();
        assert!(a.same_constructor(&b));
        assert!(!a.same_constructor(&ElementDescriptor::of::<Ping>()));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<XmlElement>(), "XmlElement");
        assert_eq!(short_type_name::<Vec<XmlElement>>(), "Vec");
    }
}
