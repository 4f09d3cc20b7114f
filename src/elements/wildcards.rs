//! XSD wildcard elements
//!
//! xs:any and xs:anyAttribute. The namespace constraint and the
//! processContents mode are kept as opaque scalars; interpreting them is
//! the validator's concern, not the tree's.
//!
//! Reference: https://www.w3.org/TR/xmlschema-1/#Wildcards

use std::cell::RefCell;
use std::rc::Rc;

use super::annotations::XsdAnnotation;
use super::base::{ElementBase, Slot, XsdNode};
use super::kinds::ElementKind;
use super::roles::Annotated;

/// xs:any element wildcard
#[derive(Debug)]
pub struct XsdAny {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    namespace: RefCell<Option<String>>,
    process_contents: RefCell<Option<String>>,
}

impl XsdAny {
    /// Create a new, unattached wildcard node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Any, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            namespace: RefCell::new(None),
            process_contents: RefCell::new(None),
        })
    }

    /// The namespace constraint, if set.
    pub fn namespace(&self) -> Option<String> {
        self.namespace.borrow().clone()
    }

    /// Set the namespace constraint.
    pub fn set_namespace(&self, namespace: impl Into<String>) {
        *self.namespace.borrow_mut() = Some(namespace.into());
    }

    /// The processContents mode, if set.
    pub fn process_contents(&self) -> Option<String> {
        self.process_contents.borrow().clone()
    }

    /// Set the processContents mode.
    pub fn set_process_contents(&self, mode: impl Into<String>) {
        *self.process_contents.borrow_mut() = Some(mode.into());
    }
}

impl XsdNode for XsdAny {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdAny {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:anyAttribute wildcard
#[derive(Debug)]
pub struct XsdAnyAttribute {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    namespace: RefCell<Option<String>>,
    process_contents: RefCell<Option<String>>,
}

impl XsdAnyAttribute {
    /// Create a new, unattached attribute-wildcard node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::AnyAttribute, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            namespace: RefCell::new(None),
            process_contents: RefCell::new(None),
        })
    }

    /// The namespace constraint, if set.
    pub fn namespace(&self) -> Option<String> {
        self.namespace.borrow().clone()
    }

    /// Set the namespace constraint.
    pub fn set_namespace(&self, namespace: impl Into<String>) {
        *self.namespace.borrow_mut() = Some(namespace.into());
    }

    /// The processContents mode, if set.
    pub fn process_contents(&self) -> Option<String> {
        self.process_contents.borrow().clone()
    }

    /// Set the processContents mode.
    pub fn set_process_contents(&self, mode: impl Into<String>) {
        *self.process_contents.borrow_mut() = Some(mode.into());
    }
}

impl XsdNode for XsdAnyAttribute {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdAnyAttribute {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}
