//! XML namespace handling
//!
//! Prefix to namespace-URI bindings as declared directly on a single
//! element, plus shared type aliases. Scope-chain resolution lives on the
//! tree nodes themselves ([`XsdNode::lookup_namespace`]); this table only
//! ever stores the prefixes declared on one node, which keeps the tree
//! cheap to mutate and makes the ancestor walk the single source of truth.
//!
//! [`XsdNode::lookup_namespace`]: crate::elements::XsdNode::lookup_namespace

use indexmap::IndexMap;

/// XML Namespace URI
pub type NamespaceUri = String;

/// Namespace prefix
pub type Prefix = String;

/// Prefix to namespace-URI bindings declared on one element.
///
/// Keys are unique; rebinding a prefix overwrites the previous URI.
/// Iteration follows first-declaration order.
#[derive(Debug, Clone, Default)]
pub struct NamespaceBindings {
    bindings: IndexMap<Prefix, NamespaceUri>,
}

impl NamespaceBindings {
    /// Create an empty binding table.
    pub fn new() -> Self {
        Self {
            bindings: IndexMap::new(),
        }
    }

    /// Insert or overwrite the binding for `prefix`.
    pub fn bind(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.bindings.insert(prefix.into(), uri.into());
    }

    /// The URI bound to `prefix` on this table, if any.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    /// Whether `prefix` is bound on this table.
    pub fn contains(&self, prefix: &str) -> bool {
        self.bindings.contains_key(prefix)
    }

    /// Number of bindings declared on this table.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no bindings are declared.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over `(prefix, URI)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }
}
