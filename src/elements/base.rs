//! Element tree plumbing shared by every concrete kind
//!
//! This module provides the foundation the element kinds build on: the
//! per-node bookkeeping ([`ElementBase`]), the [`XsdNode`] navigation trait
//! and the two attachment containers ([`Slot`] for single-slot relations,
//! [`NodeList`] for ordered-collection relations). Every set/add operation
//! in the crate funnels through [`ElementBase::adopt`], which is the single
//! point where ownership of a child passes to its parent.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{OwnershipError, Result};
use crate::namespaces::NamespaceBindings;

use super::kinds::ElementKind;

/// Shared per-node state embedded in every concrete element kind.
///
/// Holds the fixed kind, the non-owning back-pointer to the owning parent
/// and the namespace bindings declared directly on the node. The
/// self-reference is installed at construction (via [`Rc::new_cyclic`]) so
/// a node can hand out a parent pointer to the children it adopts.
pub struct ElementBase {
    kind: ElementKind,
    self_ref: Weak<dyn XsdNode>,
    parent: RefCell<Option<Weak<dyn XsdNode>>>,
    namespaces: RefCell<NamespaceBindings>,
}

impl ElementBase {
    /// Create the base state for a node of the given kind.
    ///
    /// `self_ref` must point at the allocation this base is embedded in;
    /// the kind constructors guarantee that by building their nodes with
    /// [`Rc::new_cyclic`].
    pub(crate) fn new(kind: ElementKind, self_ref: Weak<dyn XsdNode>) -> Self {
        Self {
            kind,
            self_ref,
            parent: RefCell::new(None),
            namespaces: RefCell::new(NamespaceBindings::new()),
        }
    }

    /// The kind this node was constructed with.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub(crate) fn has_parent(&self) -> bool {
        self.parent.borrow().is_some()
    }

    pub(crate) fn parent_node(&self) -> Option<Rc<dyn XsdNode>> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn bind_namespace(&self, prefix: &str, uri: &str) {
        self.namespaces.borrow_mut().bind(prefix, uri);
    }

    pub(crate) fn local_namespace(&self, prefix: &str) -> Option<String> {
        self.namespaces.borrow().get(prefix).map(str::to_owned)
    }

    /// Snapshot of the bindings declared directly on this node.
    pub fn declared_namespaces(&self) -> NamespaceBindings {
        self.namespaces.borrow().clone()
    }

    /// Record `self` as the owner of `child`.
    ///
    /// Fails with an ownership violation if the child already belongs to
    /// any element, in which case nothing is mutated. On success only the
    /// child's back-pointer changes; the caller then links the child into
    /// the slot or sequence it was attached through.
    pub(crate) fn adopt(&self, child: &dyn XsdNode) -> Result<()> {
        let mut parent = child.base().parent.borrow_mut();
        if parent.is_some() {
            return Err(OwnershipError::new(child.kind(), self.kind).into());
        }
        *parent = Some(self.self_ref.clone());
        Ok(())
    }
}

impl fmt::Debug for ElementBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The parent back-pointer is omitted: printing it would not show
        // anything useful (Weak does not upgrade in Debug) and the child
        // side already appears in the parent's own output.
        f.debug_struct("ElementBase")
            .field("kind", &self.kind)
            .field("attached", &self.has_parent())
            .field("namespaces", &self.namespaces.borrow())
            .finish()
    }
}

/// Navigation trait implemented by every concrete element kind.
///
/// Provides the kind identifier, ownership navigation and scoped namespace
/// resolution. All methods are read-only with respect to the tree shape;
/// [`bind_namespace`](XsdNode::bind_namespace) only touches the node's own
/// binding table.
pub trait XsdNode: fmt::Debug {
    /// Access the shared per-node state.
    fn base(&self) -> &ElementBase;

    /// The kind identifier of this node, fixed at construction.
    fn kind(&self) -> ElementKind {
        self.base().kind()
    }

    /// Whether this node has been attached to a parent.
    fn has_parent(&self) -> bool {
        self.base().has_parent()
    }

    /// The owning parent, if this node has been attached.
    fn parent(&self) -> Option<Rc<dyn XsdNode>> {
        self.base().parent_node()
    }

    /// Declare a prefix to namespace-URI binding on this node.
    ///
    /// Rebinding a prefix overwrites the previous URI. The binding is
    /// visible on this node and, through
    /// [`lookup_namespace`](XsdNode::lookup_namespace), on all of its
    /// descendants unless a closer binding shadows it.
    fn bind_namespace(&self, prefix: &str, uri: &str) {
        self.base().bind_namespace(prefix, uri);
    }

    /// Resolve a namespace prefix against this node's scope chain.
    ///
    /// The node's own bindings are consulted first, then each ancestor in
    /// turn up to the root. Returns `None` when the chain is exhausted
    /// without a match. Nothing is cached, so a binding added after a
    /// failed lookup is visible on the next call.
    fn lookup_namespace(&self, prefix: &str) -> Option<String> {
        if let Some(uri) = self.base().local_namespace(prefix) {
            return Some(uri);
        }
        let mut current = self.base().parent_node();
        while let Some(node) = current {
            if let Some(uri) = node.base().local_namespace(prefix) {
                return Some(uri);
            }
            current = node.base().parent_node();
        }
        None
    }
}

/// Whether two handles refer to the same node.
///
/// Nodes have no structural equality; identity is the address of the
/// node's base state inside its `Rc` allocation.
pub fn same_element(a: &dyn XsdNode, b: &dyn XsdNode) -> bool {
    std::ptr::eq(a.base(), b.base())
}

/// Single-slot parent-to-child relation.
///
/// Holds at most one child. Writing an occupied slot replaces the stored
/// reference; in practice each parent kind writes its slots once. The
/// attachment goes through the owner's [`ElementBase::adopt`] first, so an
/// already-owned child is rejected before anything is stored.
#[derive(Debug)]
pub struct Slot<T> {
    inner: RefCell<Option<Rc<T>>>,
}

impl<T: XsdNode> Slot<T> {
    /// Create an empty slot.
    pub(crate) fn new() -> Self {
        Self {
            inner: RefCell::new(None),
        }
    }

    /// Adopt `child` into `owner` and store it in this slot.
    pub(crate) fn attach(&self, owner: &ElementBase, child: Rc<T>) -> Result<()> {
        owner.adopt(child.as_ref())?;
        *self.inner.borrow_mut() = Some(child);
        Ok(())
    }

    /// The current occupant, if any.
    pub fn get(&self) -> Option<Rc<T>> {
        self.inner.borrow().clone()
    }

    /// Whether the slot is occupied.
    pub fn is_set(&self) -> bool {
        self.inner.borrow().is_some()
    }
}

/// Ordered-collection parent-to-child relation.
///
/// Children are appended in call order and read back in that order; it is
/// the document order for the relation.
#[derive(Debug)]
pub struct NodeList<T> {
    inner: RefCell<Vec<Rc<T>>>,
}

impl<T: XsdNode> NodeList<T> {
    /// Create an empty list.
    pub(crate) fn new() -> Self {
        Self {
            inner: RefCell::new(Vec::new()),
        }
    }

    /// Adopt `child` into `owner` and append it to this list.
    pub(crate) fn attach(&self, owner: &ElementBase, child: Rc<T>) -> Result<()> {
        owner.adopt(child.as_ref())?;
        self.inner.borrow_mut().push(child);
        Ok(())
    }

    /// Snapshot of the children in insertion order.
    pub fn items(&self) -> Vec<Rc<T>> {
        self.inner.borrow().clone()
    }

    /// The child at `index`, if present.
    pub fn get(&self, index: usize) -> Option<Rc<T>> {
        self.inner.borrow().get(index).cloned()
    }

    /// Number of children attached through this relation.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether no children have been attached through this relation.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::annotations::{XsdAnnotation, XsdDocumentation};
    use crate::error::Error;

    #[test]
    fn test_fresh_node_is_unattached() {
        let annotation = XsdAnnotation::new();
        assert!(!annotation.has_parent());
        assert!(annotation.parent().is_none());
        assert_eq!(annotation.kind(), ElementKind::Annotation);
    }

    #[test]
    fn test_attach_records_parent_identity() {
        let annotation = XsdAnnotation::new();
        let documentation = XsdDocumentation::new();

        annotation.add_documentation(documentation.clone()).unwrap();

        assert!(documentation.has_parent());
        let parent = documentation.parent().unwrap();
        assert!(same_element(parent.as_ref(), annotation.as_ref()));
    }

    #[test]
    fn test_second_attach_is_rejected_without_mutation() {
        let first = XsdAnnotation::new();
        let second = XsdAnnotation::new();
        let documentation = XsdDocumentation::new();

        first.add_documentation(documentation.clone()).unwrap();
        let err = second
            .add_documentation(documentation.clone())
            .unwrap_err();

        let Error::Ownership(violation) = err;
        assert_eq!(violation.child, ElementKind::Documentation);
        assert_eq!(violation.parent, ElementKind::Annotation);

        // The rejected parent gained nothing and the child kept its owner.
        assert!(second.documentations().is_empty());
        let parent = documentation.parent().unwrap();
        assert!(same_element(parent.as_ref(), first.as_ref()));
    }

    #[test]
    fn test_same_element_distinguishes_nodes() {
        let a = XsdAnnotation::new();
        let b = XsdAnnotation::new();
        assert!(same_element(a.as_ref(), a.as_ref()));
        assert!(!same_element(a.as_ref(), b.as_ref()));
    }

    #[test]
    fn test_lookup_on_unattached_node_misses() {
        let annotation = XsdAnnotation::new();
        assert_eq!(annotation.lookup_namespace("xs"), None);
    }

    #[test]
    fn test_lookup_prefers_local_binding() {
        let annotation = XsdAnnotation::new();
        let documentation = XsdDocumentation::new();
        annotation.add_documentation(documentation.clone()).unwrap();

        annotation.bind_namespace("p", "http://example.com/outer");
        documentation.bind_namespace("p", "http://example.com/inner");

        assert_eq!(
            documentation.lookup_namespace("p").as_deref(),
            Some("http://example.com/inner")
        );
        assert_eq!(
            annotation.lookup_namespace("p").as_deref(),
            Some("http://example.com/outer")
        );
    }

    #[test]
    fn test_lookup_walks_ancestor_chain() {
        let annotation = XsdAnnotation::new();
        let documentation = XsdDocumentation::new();
        annotation.add_documentation(documentation.clone()).unwrap();

        annotation.bind_namespace("p", "http://example.com/p");
        assert_eq!(
            documentation.lookup_namespace("p").as_deref(),
            Some("http://example.com/p")
        );
        // Unbound prefixes miss after the chain is exhausted.
        assert_eq!(documentation.lookup_namespace("q"), None);
    }

    #[test]
    fn test_binding_added_after_failed_lookup_is_visible() {
        let annotation = XsdAnnotation::new();
        assert_eq!(annotation.lookup_namespace("late"), None);

        annotation.bind_namespace("late", "http://example.com/late");
        assert_eq!(
            annotation.lookup_namespace("late").as_deref(),
            Some("http://example.com/late")
        );
    }
}
