//! Generic XML element used as the fallback for unregistered names

use std::collections::BTreeMap;

use super::Element;

/// The catch-all representation of a parsed element
///
/// Holds the name as the parser reported it (prefix passes through untouched),
/// attributes, text content and child elements. Typed protocol elements wrap
/// one of these.
#[derive(Debug, Default)]
pub struct XmlElement {
    prefix: Option<String>,
    local_name: String,
    namespace: Option<String>,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    children: Vec<Box<dyn Element>>,
}

impl XmlElement {
    /// Create an element with no namespace
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            ..Self::default()
        }
    }

    /// Create an element in `namespace`
    pub fn with_namespace(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            namespace: Some(namespace.into()),
            ..Self::default()
        }
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Record the prefix the parser saw; an empty prefix clears it
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Attributes in name order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        &self.children
    }

    pub fn add_child(&mut self, child: Box<dyn Element>) {
        self.children.push(child);
    }

    /// First child with the given local name
    pub fn child(&self, local_name: &str) -> Option<&(dyn Element + 'static)> {
        self.children
            .iter()
            .find(|c| c.local_name() == local_name)
            .map(|c| &**c)
    }

    pub fn child_mut(&mut self, local_name: &str) -> Option<&mut (dyn Element + 'static)> {
        self.children
            .iter_mut()
            .find(|c| c.local_name() == local_name)
            .map(|c| &mut **c)
    }
}

impl Element for XmlElement {
    fn node(&self) -> &XmlElement {
        self
    }

    fn node_mut(&mut self) -> &mut XmlElement {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_namespace() {
        let el = XmlElement::new("presence");
        assert_eq!(el.local_name(), "presence");
        assert_eq!(el.namespace(), None);
    }

    #[test]
    fn test_with_namespace() {
        let el = XmlElement::with_namespace("jabber:client", "presence");
        assert_eq!(el.namespace(), Some("jabber:client"));
    }

    #[test]
    fn test_attributes_sorted_by_name() {
        let mut el = XmlElement::new("iq");
        el.set_attribute("type", "get");
        el.set_attribute("id", "1");
        let attrs: Vec<_> = el.attributes().collect();
        assert_eq!(attrs, vec![("id", "1"), ("type", "get")]);
        assert_eq!(el.remove_attribute("id"), Some("1".to_string()));
        assert_eq!(el.attribute("id"), None);
    }

    #[test]
    fn test_empty_prefix_clears() {
        let mut el = XmlElement::new("stream");
        el.set_prefix("stream");
        assert_eq!(el.prefix(), Some("stream"));
        el.set_prefix("");
        assert_eq!(el.prefix(), None);
    }

    #[test]
    fn test_child_lookup() {
        let mut el = XmlElement::new("message");
        el.add_child(Box::new(XmlElement::new("body")));
        assert!(el.child("body").is_some());
        assert!(el.child("subject").is_none());
        assert_eq!(el.children().len(), 1);

        if let Some(body) = el.child_mut("body") {
            body.node_mut().set_text("edited");
        }
        assert_eq!(el.child("body").and_then(|b| b.node().text()), Some("edited"));
    }
}
