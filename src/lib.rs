//! XMPP element factory - maps qualified XML names to typed protocol elements
//!
//! The parser reports each element as `(prefix, local name, namespace)`. The
//! factory looks the qualified name up in a thread-safe [`Registry`] and builds
//! the registered type, or a generic [`XmlElement`] when nothing is registered.
//!
//! # Example
//!
//! ```rust
//! use xmpp_element_factory::protocol::Message;
//! use xmpp_element_factory::{ElementFactory, XmlElement};
//!
//! let factory = ElementFactory::new();
//! factory.register_element_ns::<Message>("jabber:client", "message").unwrap();
//!
//! let message = factory.get_element("", "message", "jabber:client").unwrap();
//! assert!(message.is::<Message>());
//!
//! let presence = factory.get_element("", "presence", "jabber:client").unwrap();
//! assert!(presence.is::<XmlElement>());
//! assert_eq!(presence.namespace(), Some("jabber:client"));
//! ```

pub mod bulk;
pub mod config;
pub mod descriptor;
pub mod element;
pub mod error;
pub mod factory;
pub mod key;
pub mod protocol;
pub mod registry;

pub use bulk::{BulkRegistrar, Candidate, TypeList, TypeSource};
pub use config::{ConfigError, ElementMapping, FactoryConfig};
pub use descriptor::ElementDescriptor;
pub use element::{DeclaredTag, Element, Tagged, XmlElement};
pub use error::{ConstructError, FactoryError};
pub use factory::ElementFactory;
pub use key::QualifiedKey;
pub use registry::Registry;
