//! XSD attribute declarations and attribute groups
//!
//! xs:attribute and xs:attributeGroup. An attribute carries its type either
//! as a reference (the `type` scalar) or as an inline simple type through
//! the [`SimpleTyped`] role; an attribute group collects attribute
//! declarations through the [`AttributeNaming`] role.
//!
//! Reference: https://www.w3.org/TR/xmlschema-1/#cAttribute_Declarations

use std::cell::RefCell;
use std::rc::Rc;

use super::annotations::XsdAnnotation;
use super::base::{ElementBase, NodeList, Slot, XsdNode};
use super::kinds::ElementKind;
use super::roles::{Annotated, AttributeNaming, SimpleTyped};
use super::simple_types::XsdSimpleType;
use super::wildcards::XsdAnyAttribute;

/// xs:attribute declaration
#[derive(Debug)]
pub struct XsdAttribute {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    simple_type: Slot<XsdSimpleType>,
    name: RefCell<Option<String>>,
    type_name: RefCell<Option<String>>,
}

impl XsdAttribute {
    /// Create a new, unattached attribute declaration.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Attribute, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            simple_type: Slot::new(),
            name: RefCell::new(None),
            type_name: RefCell::new(None),
        })
    }

    /// The attribute name, if set.
    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    /// Set the attribute name.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = Some(name.into());
    }

    /// The referenced type name, if set.
    pub fn type_name(&self) -> Option<String> {
        self.type_name.borrow().clone()
    }

    /// Set the referenced type name.
    pub fn set_type_name(&self, type_name: impl Into<String>) {
        *self.type_name.borrow_mut() = Some(type_name.into());
    }
}

impl XsdNode for XsdAttribute {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdAttribute {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

impl SimpleTyped for XsdAttribute {
    fn simple_type_slot(&self) -> &Slot<XsdSimpleType> {
        &self.simple_type
    }
}

/// xs:attributeGroup definition or reference
#[derive(Debug)]
pub struct XsdAttributeGroup {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    attributes: NodeList<XsdAttribute>,
    attribute_groups: NodeList<XsdAttributeGroup>,
    any_attribute: Slot<XsdAnyAttribute>,
    name: RefCell<Option<String>>,
}

impl XsdAttributeGroup {
    /// Create a new, unattached attribute group.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::AttributeGroup, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            attributes: NodeList::new(),
            attribute_groups: NodeList::new(),
            any_attribute: Slot::new(),
            name: RefCell::new(None),
        })
    }

    /// The group name, if set.
    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    /// Set the group name.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = Some(name.into());
    }
}

impl XsdNode for XsdAttributeGroup {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdAttributeGroup {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

impl AttributeNaming for XsdAttributeGroup {
    fn attribute_list(&self) -> &NodeList<XsdAttribute> {
        &self.attributes
    }

    fn attribute_group_list(&self) -> &NodeList<XsdAttributeGroup> {
        &self.attribute_groups
    }

    fn any_attribute_slot(&self) -> &Slot<XsdAnyAttribute> {
        &self.any_attribute
    }
}
