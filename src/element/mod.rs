//! Element contract shared by the generic fallback and every typed element
//!
//! The factory hands out `Box<dyn Element>`. Callers recover the concrete type
//! with `downcast_ref` or inspect the underlying [`XmlElement`] node through
//! [`Element::node`].

use std::any::Any;
use std::fmt::Debug;

mod tag;
mod xml;

pub use tag::{DeclaredTag, Tagged};
pub use xml::XmlElement;

/// Upcast to `Any` for every sized element type
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A parsed XML element, generic or typed
pub trait Element: AsAny + Debug + Send + Sync {
    /// The generic node carrying name, attributes and children
    fn node(&self) -> &XmlElement;

    fn node_mut(&mut self) -> &mut XmlElement;

    fn local_name(&self) -> &str {
        self.node().local_name()
    }

    /// Namespace of the element, `None` when unset
    fn namespace(&self) -> Option<&str> {
        self.node().namespace()
    }
}

impl dyn Element {
    /// True if the element is an instance of `T`
    pub fn is<T: Element>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }

    pub fn downcast_ref<T: Element>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Element>(&mut self) -> Option<&mut T> {
        AsAny::as_any_mut(self).downcast_mut::<T>()
    }
}
