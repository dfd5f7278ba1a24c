//! Declarative registration from a set of candidate types

use tracing::{debug, info};

use crate::descriptor::ElementDescriptor;
use crate::element::{DeclaredTag, Element, Tagged};
use crate::error::FactoryError;
use crate::key::QualifiedKey;
use crate::registry::Registry;

/// A type offered for declarative registration
#[derive(Debug, Clone)]
pub struct Candidate {
    type_name: &'static str,
    descriptor: Option<ElementDescriptor>,
    tags: &'static [DeclaredTag],
}

impl Candidate {
    /// A tagged element type
    pub fn of<T: Element + Default + Tagged>() -> Self {
        let descriptor = ElementDescriptor::of::<T>();
        Self {
            type_name: descriptor.type_name(),
            descriptor: Some(descriptor),
            tags: T::declared_tags(),
        }
    }

    /// An element type that declares no tags
    pub fn untagged<T: Element + Default>() -> Self {
        let descriptor = ElementDescriptor::of::<T>();
        Self {
            type_name: descriptor.type_name(),
            descriptor: Some(descriptor),
            tags: &[],
        }
    }

    /// A type that carries tags but does not satisfy the element contract
    pub fn other(type_name: &'static str, tags: &'static [DeclaredTag]) -> Self {
        Self {
            type_name,
            descriptor: None,
            tags,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn tags(&self) -> &'static [DeclaredTag] {
        self.tags
    }

    /// Construction capability, `None` for non-element types
    pub fn descriptor(&self) -> Option<&ElementDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn is_element(&self) -> bool {
        self.descriptor.is_some()
    }
}

/// A collection of candidate types available at runtime
pub trait TypeSource {
    fn candidates(&self) -> Vec<Candidate>;
}

impl TypeSource for [Candidate] {
    fn candidates(&self) -> Vec<Candidate> {
        self.to_vec()
    }
}

impl TypeSource for Vec<Candidate> {
    fn candidates(&self) -> Vec<Candidate> {
        self.clone()
    }
}

/// Builder for an explicit list of candidate types
#[derive(Debug, Clone, Default)]
pub struct TypeList {
    candidates: Vec<Candidate>,
}

impl TypeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tagged element type
    pub fn with<T: Element + Default + Tagged>(mut self) -> Self {
        self.candidates.push(Candidate::of::<T>());
        self
    }

    /// Add an arbitrary candidate
    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl TypeSource for TypeList {
    fn candidates(&self) -> Vec<Candidate> {
        self.candidates.clone()
    }
}

/// Registers tagged types into a [`Registry`]
#[derive(Debug, Clone, Copy)]
pub struct BulkRegistrar<'a> {
    registry: &'a Registry,
}

impl<'a> BulkRegistrar<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Register every tagged element type in `source`, once per declared tag
    ///
    /// All tags are validated before anything is written: a malformed tag
    /// rejects the whole source and leaves the registry untouched. Returns the
    /// number of entries written.
    pub fn register_from_source<S>(&self, source: &S) -> Result<usize, FactoryError>
    where
        S: TypeSource + ?Sized,
    {
        let entries = collect_entries(source.candidates())?;
        let count = self.registry.register_all(entries);
        info!(entries = count, "registered elements from type source");
        Ok(count)
    }

    /// Register a single type under its declared tags; no tags is a no-op
    pub fn register_type<T: Element + Default + Tagged>(&self) -> Result<usize, FactoryError> {
        let entries = collect_entries(vec![Candidate::of::<T>()])?;
        Ok(self.registry.register_all(entries))
    }
}

fn collect_entries(
    candidates: Vec<Candidate>,
) -> Result<Vec<(QualifiedKey, ElementDescriptor)>, FactoryError> {
    let mut entries = Vec::new();
    for candidate in candidates {
        let Some(descriptor) = candidate.descriptor else {
            debug!(
                type_name = candidate.type_name,
                "skipping candidate that is not an element type"
            );
            continue;
        };
        if candidate.tags.is_empty() {
            debug!(
                type_name = candidate.type_name,
                "skipping element type without declared tags"
            );
            continue;
        }
        for tag in candidate.tags {
            entries.push((tag.key()?, descriptor.clone()));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::XmlElement;

    #[derive(Debug, Default)]
    struct Pair {
        node: XmlElement,
    }

    impl Element for Pair {
        fn node(&self) -> &XmlElement {
            &self.node
        }

        fn node_mut(&mut self) -> &mut XmlElement {
            &mut self.node
        }
    }

    impl Tagged for Pair {
        fn declared_tags() -> &'static [DeclaredTag] {
            const TAGS: &[DeclaredTag] = &[
                DeclaredTag::new("urn:x", "a"),
                DeclaredTag::new("urn:x", "b"),
            ];
            TAGS
        }
    }

    #[derive(Debug, Default)]
    struct Bare {
        node: XmlElement,
    }

    impl Element for Bare {
        fn node(&self) -> &XmlElement {
            &self.node
        }

        fn node_mut(&mut self) -> &mut XmlElement {
            &mut self.node
        }
    }

    impl Tagged for Bare {
        fn declared_tags() -> &'static [DeclaredTag] {
            &[]
        }
    }

    fn key(ns: &str, local: &str) -> QualifiedKey {
        QualifiedKey::new(ns, local).unwrap()
    }

    #[test]
    fn test_one_entry_per_tag() {
        let registry = Registry::new();
        let count = BulkRegistrar::new(&registry)
            .register_from_source(&TypeList::new().with::<Pair>())
            .unwrap();

        assert_eq!(count, 2);
        let a = registry.lookup(&key("urn:x", "a")).unwrap();
        let b = registry.lookup(&key("urn:x", "b")).unwrap();
        assert!(a.describes::<Pair>());
        assert!(b.describes::<Pair>());
    }

    #[test]
    fn test_skips_untagged_and_non_elements() {
        static OTHER_TAGS: &[DeclaredTag] = &[DeclaredTag::new("urn:x", "other")];
        let source = vec![
            Candidate::untagged::<Bare>(),
            Candidate::of::<Bare>(),
            Candidate::other("Helper", OTHER_TAGS),
        ];

        let registry = Registry::new();
        let count = BulkRegistrar::new(&registry)
            .register_from_source(&source)
            .unwrap();

        assert_eq!(count, 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_malformed_tag_leaves_registry_untouched() {
        static BROKEN: &[DeclaredTag] = &[
            DeclaredTag::new("urn:x", "ok"),
            DeclaredTag::new("urn:x", ""),
        ];
        let source = TypeList::new()
            .with::<Pair>()
            .with_candidate(Candidate {
                type_name: "Broken",
                descriptor: Some(ElementDescriptor::of::<Bare>()),
                tags: BROKEN,
            });

        let registry = Registry::new();
        let result = BulkRegistrar::new(&registry).register_from_source(&source);

        assert!(matches!(result, Err(FactoryError::InvalidName { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_type_without_tags_is_noop() {
        let registry = Registry::new();
        let count = BulkRegistrar::new(&registry).register_type::<Bare>().unwrap();
        assert_eq!(count, 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_slice_source() {
        let registry = Registry::new();
        let candidates = [Candidate::of::<Pair>()];
        BulkRegistrar::new(&registry)
            .register_from_source(&candidates[..])
            .unwrap();
        assert_eq!(registry.len(), 2);
    }
}
