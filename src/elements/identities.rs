//! XSD identity constraints
//!
//! xs:key, xs:keyref and xs:unique, each with one xs:selector child and an
//! ordered list of xs:field children. The XPath expressions are opaque
//! scalars; evaluating them belongs to the instance validator.
//!
//! Reference: https://www.w3.org/TR/xmlschema-1/#cIdentity-constraint_Definitions

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

use super::annotations::XsdAnnotation;
use super::base::{ElementBase, NodeList, Slot, XsdNode};
use super::kinds::ElementKind;
use super::roles::Annotated;

/// xs:selector of an identity constraint
#[derive(Debug)]
pub struct XsdSelector {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    xpath: RefCell<Option<String>>,
}

impl XsdSelector {
    /// Create a new, unattached selector node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Selector, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            xpath: RefCell::new(None),
        })
    }

    /// The XPath expression, if set.
    pub fn xpath(&self) -> Option<String> {
        self.xpath.borrow().clone()
    }

    /// Set the XPath expression.
    pub fn set_xpath(&self, xpath: impl Into<String>) {
        *self.xpath.borrow_mut() = Some(xpath.into());
    }
}

impl XsdNode for XsdSelector {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdSelector {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:field of an identity constraint
#[derive(Debug)]
pub struct XsdField {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    xpath: RefCell<Option<String>>,
}

impl XsdField {
    /// Create a new, unattached field node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Field, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            xpath: RefCell::new(None),
        })
    }

    /// The XPath expression, if set.
    pub fn xpath(&self) -> Option<String> {
        self.xpath.borrow().clone()
    }

    /// Set the XPath expression.
    pub fn set_xpath(&self, xpath: impl Into<String>) {
        *self.xpath.borrow_mut() = Some(xpath.into());
    }
}

impl XsdNode for XsdField {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdField {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:key identity constraint
#[derive(Debug)]
pub struct XsdKey {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    selector: Slot<XsdSelector>,
    fields: NodeList<XsdField>,
    name: RefCell<Option<String>>,
}

impl XsdKey {
    /// Create a new, unattached key constraint.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Key, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            selector: Slot::new(),
            fields: NodeList::new(),
            name: RefCell::new(None),
        })
    }

    /// Install the selector child, taking ownership of it.
    pub fn set_selector(&self, selector: Rc<XsdSelector>) -> Result<()> {
        self.selector.attach(&self.base, selector)
    }

    /// The selector child, if one has been set.
    pub fn selector(&self) -> Option<Rc<XsdSelector>> {
        self.selector.get()
    }

    /// Append a field child, taking ownership of it.
    pub fn add_field(&self, field: Rc<XsdField>) -> Result<()> {
        self.fields.attach(&self.base, field)
    }

    /// The field children in document order.
    pub fn fields(&self) -> Vec<Rc<XsdField>> {
        self.fields.items()
    }

    /// The constraint name, if set.
    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    /// Set the constraint name.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = Some(name.into());
    }
}

impl XsdNode for XsdKey {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdKey {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:keyref identity constraint
#[derive(Debug)]
pub struct XsdKeyref {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    selector: Slot<XsdSelector>,
    fields: NodeList<XsdField>,
    name: RefCell<Option<String>>,
    refer: RefCell<Option<String>>,
}

impl XsdKeyref {
    /// Create a new, unattached keyref constraint.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Keyref, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            selector: Slot::new(),
            fields: NodeList::new(),
            name: RefCell::new(None),
            refer: RefCell::new(None),
        })
    }

    /// Install the selector child, taking ownership of it.
    pub fn set_selector(&self, selector: Rc<XsdSelector>) -> Result<()> {
        self.selector.attach(&self.base, selector)
    }

    /// The selector child, if one has been set.
    pub fn selector(&self) -> Option<Rc<XsdSelector>> {
        self.selector.get()
    }

    /// Append a field child, taking ownership of it.
    pub fn add_field(&self, field: Rc<XsdField>) -> Result<()> {
        self.fields.attach(&self.base, field)
    }

    /// The field children in document order.
    pub fn fields(&self) -> Vec<Rc<XsdField>> {
        self.fields.items()
    }

    /// The constraint name, if set.
    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    /// Set the constraint name.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = Some(name.into());
    }

    /// The name of the referred key or unique constraint, if set.
    pub fn refer(&self) -> Option<String> {
        self.refer.borrow().clone()
    }

    /// Set the name of the referred key or unique constraint.
    pub fn set_refer(&self, refer: impl Into<String>) {
        *self.refer.borrow_mut() = Some(refer.into());
    }
}

impl XsdNode for XsdKeyref {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdKeyref {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:unique identity constraint
#[derive(Debug)]
pub struct XsdUnique {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    selector: Slot<XsdSelector>,
    fields: NodeList<XsdField>,
    name: RefCell<Option<String>>,
}

impl XsdUnique {
    /// Create a new, unattached unique constraint.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Unique, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            selector: Slot::new(),
            fields: NodeList::new(),
            name: RefCell::new(None),
        })
    }

    /// Install the selector child, taking ownership of it.
    pub fn set_selector(&self, selector: Rc<XsdSelector>) -> Result<()> {
        self.selector.attach(&self.base, selector)
    }

    /// The selector child, if one has been set.
    pub fn selector(&self) -> Option<Rc<XsdSelector>> {
        self.selector.get()
    }

    /// Append a field child, taking ownership of it.
    pub fn add_field(&self, field: Rc<XsdField>) -> Result<()> {
        self.fields.attach(&self.base, field)
    }

    /// The field children in document order.
    pub fn fields(&self) -> Vec<Rc<XsdField>> {
        self.fields.items()
    }

    /// The constraint name, if set.
    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    /// Set the constraint name.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = Some(name.into());
    }
}

impl XsdNode for XsdUnique {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdUnique {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}
