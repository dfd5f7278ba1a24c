//! Built-in protocol element types
//!
//! Each type wraps an [`XmlElement`](crate::element::XmlElement), constructs
//! itself with its own namespace and local name, and declares the qualified
//! names it handles. [`builtins`] lists all of them for bulk registration.

use crate::bulk::{TypeList, TypeSource};
use crate::descriptor::ElementDescriptor;

pub const NS_CLIENT: &str = "jabber:client";
pub const NS_SERVER: &str = "jabber:server";
pub const NS_STREAMS: &str = "http://etherx.jabber.org/streams";

/// Defines a typed element wrapping an `XmlElement`
macro_rules! element_type {
    (
        $(#[$meta:meta])*
        $name:ident {
            namespace: $namespace:expr,
            local_name: $local:expr,
            tags: [$(($tag_ns:expr, $tag_local:expr)),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            node: $crate::element::XmlElement,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    node: $crate::element::XmlElement::with_namespace($namespace, $local),
                }
            }
        }

        impl $crate::element::Element for $name {
            fn node(&self) -> &$crate::element::XmlElement {
                &self.node
            }

            fn node_mut(&mut self) -> &mut $crate::element::XmlElement {
                &mut self.node
            }
        }

        impl $crate::element::Tagged for $name {
            fn declared_tags() -> &'static [$crate::element::DeclaredTag] {
                const TAGS: &[$crate::element::DeclaredTag] =
                    &[$($crate::element::DeclaredTag::new($tag_ns, $tag_local)),*];
                TAGS
            }
        }
    };
}

mod client;
mod stream;

pub use client::{Body, Iq, Message, Presence};
pub use stream::{Stream, StreamError, StreamFeatures};

/// Every built-in element type
pub fn builtins() -> TypeList {
    TypeList::new()
        .with::<Message>()
        .with::<Presence>()
        .with::<Iq>()
        .with::<Body>()
        .with::<Stream>()
        .with::<StreamFeatures>()
        .with::<StreamError>()
}

/// Descriptor for a built-in element type by its type name, e.g. `"Message"`
pub fn builtin(type_name: &str) -> Option<ElementDescriptor> {
    builtins()
        .candidates()
        .into_iter()
        .find(|c| c.type_name() == type_name)
        .and_then(|c| c.descriptor().cloned())
}

/// Type names accepted by [`builtin`]
pub fn builtin_names() -> Vec<&'static str> {
    builtins()
        .candidates()
        .iter()
        .map(|c| c.type_name())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Tagged;

    #[test]
    fn test_builtin_by_name() {
        let descriptor = builtin("Message").expect("Message is built in");
        assert!(descriptor.describes::<Message>());
        assert!(builtin("Nonexistent").is_none());
    }

    #[test]
    fn test_builtin_names() {
        assert_eq!(
            builtin_names(),
            vec![
                "Message",
                "Presence",
                "Iq",
                "Body",
                "Stream",
                "StreamFeatures",
                "StreamError"
            ]
        );
    }

    #[test]
    fn test_stanzas_declare_client_and_server() {
        for tags in [
            Message::declared_tags(),
            Presence::declared_tags(),
            Iq::declared_tags(),
        ] {
            let namespaces: Vec<_> = tags.iter().map(|t| t.namespace).collect();
            assert_eq!(namespaces, vec![NS_CLIENT, NS_SERVER]);
        }
    }
}
