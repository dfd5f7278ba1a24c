//! Stanza elements of the client and server namespaces

use super::{NS_CLIENT, NS_SERVER};
use crate::element::Element;

element_type! {
    /// A `<message/>` stanza
    Message {
        namespace: NS_CLIENT,
        local_name: "message",
        tags: [(NS_CLIENT, "message"), (NS_SERVER, "message")],
    }
}

element_type! {
    /// A `<presence/>` stanza
    Presence {
        namespace: NS_CLIENT,
        local_name: "presence",
        tags: [(NS_CLIENT, "presence"), (NS_SERVER, "presence")],
    }
}

element_type! {
    /// An `<iq/>` stanza
    Iq {
        namespace: NS_CLIENT,
        local_name: "iq",
        tags: [(NS_CLIENT, "iq"), (NS_SERVER, "iq")],
    }
}

element_type! {
    /// Human-readable message text
    Body {
        namespace: NS_CLIENT,
        local_name: "body",
        tags: [(NS_CLIENT, "body")],
    }
}

/// Addressing attributes shared by all stanzas
macro_rules! stanza_addressing {
    ($($name:ident),*) => {
        $(
            impl $name {
                pub fn to(&self) -> Option<&str> {
                    self.node().attribute("to")
                }

                pub fn set_to(&mut self, jid: impl Into<String>) {
                    self.node_mut().set_attribute("to", jid);
                }

                pub fn from(&self) -> Option<&str> {
                    self.node().attribute("from")
                }

                pub fn set_from(&mut self, jid: impl Into<String>) {
                    self.node_mut().set_attribute("from", jid);
                }

                pub fn id(&self) -> Option<&str> {
                    self.node().attribute("id")
                }

                pub fn set_id(&mut self, id: impl Into<String>) {
                    self.node_mut().set_attribute("id", id);
                }

                /// The `type` attribute
                pub fn stanza_type(&self) -> Option<&str> {
                    self.node().attribute("type")
                }

                pub fn set_stanza_type(&mut self, kind: impl Into<String>) {
                    self.node_mut().set_attribute("type", kind);
                }
            }
        )*
    };
}

stanza_addressing!(Message, Presence, Iq);

impl Message {
    /// Text of the first `<body/>` child
    pub fn body(&self) -> Option<&str> {
        self.node().child("body").and_then(|b| b.node().text())
    }

    /// Replace the message text, adding a `<body/>` child when there is none
    pub fn set_body(&mut self, text: impl Into<String>) {
        match self.node_mut().child_mut("body") {
            Some(body) => body.node_mut().set_text(text),
            None => {
                let mut body = Body::default();
                body.set_text(text);
                self.node_mut().add_child(Box::new(body));
            }
        }
    }
}

impl Presence {
    /// Text of the `<show/>` child, e.g. `away`
    pub fn show(&self) -> Option<&str> {
        self.node().child("show").and_then(|s| s.node().text())
    }

    pub fn status(&self) -> Option<&str> {
        self.node().child("status").and_then(|s| s.node().text())
    }

    /// Presence without a type attribute means available
    pub fn is_available(&self) -> bool {
        self.stanza_type().is_none()
    }
}

impl Iq {
    /// True for `get` and `set` requests
    pub fn is_request(&self) -> bool {
        matches!(self.stanza_type(), Some("get") | Some("set"))
    }
}

impl Body {
    pub fn text(&self) -> Option<&str> {
        self.node().text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.node_mut().set_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::XmlElement;

    #[test]
    fn test_default_carries_name() {
        let message = Message::default();
        assert_eq!(message.local_name(), "message");
        assert_eq!(message.namespace(), Some(NS_CLIENT));
    }

    #[test]
    fn test_message_addressing_and_body() {
        let mut message = Message::default();
        message.set_to("juliet@example.com");
        message.set_stanza_type("chat");
        message.set_body("Wherefore art thou?");

        assert_eq!(message.to(), Some("juliet@example.com"));
        assert_eq!(message.from(), None);
        assert_eq!(message.stanza_type(), Some("chat"));
        assert_eq!(message.body(), Some("Wherefore art thou?"));
    }

    #[test]
    fn test_set_body_replaces_text() {
        let mut message = Message::default();
        message.set_body("first");
        message.set_body("second");

        assert_eq!(message.body(), Some("second"));
        assert_eq!(message.node().children().len(), 1);
    }

    #[test]
    fn test_presence_children() {
        let mut presence = Presence::default();
        let mut show = XmlElement::new("show");
        show.set_text("away");
        presence.node_mut().add_child(Box::new(show));

        assert_eq!(presence.show(), Some("away"));
        assert_eq!(presence.status(), None);
        assert!(presence.is_available());

        presence.set_stanza_type("unavailable");
        assert!(!presence.is_available());
    }

    #[test]
    fn test_iq_request() {
        let mut iq = Iq::default();
        iq.set_id("1");
        iq.set_stanza_type("get");
        assert!(iq.is_request());
        assert_eq!(iq.id(), Some("1"));

        iq.set_stanza_type("result");
        assert!(!iq.is_request());
    }
}
