//! XSD element declarations
//!
//! xs:element. A declaration names its type either by reference (the
//! `type` scalar) or with exactly one inline simpleType or complexType
//! child, and may carry identity constraints.
//!
//! Reference: https://www.w3.org/TR/xmlschema-1/#cElement_Declarations

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

use super::annotations::XsdAnnotation;
use super::base::{ElementBase, NodeList, Slot, XsdNode};
use super::complex_types::XsdComplexType;
use super::identities::{XsdKey, XsdKeyref, XsdUnique};
use super::kinds::ElementKind;
use super::roles::Annotated;
use super::simple_types::XsdSimpleType;

/// xs:element declaration
#[derive(Debug)]
pub struct XsdElement {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    simple_type: Slot<XsdSimpleType>,
    complex_type: Slot<XsdComplexType>,
    uniques: NodeList<XsdUnique>,
    keys: NodeList<XsdKey>,
    keyrefs: NodeList<XsdKeyref>,
    name: RefCell<Option<String>>,
    type_name: RefCell<Option<String>>,
}

impl XsdElement {
    /// Create a new, unattached element declaration.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Element, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            simple_type: Slot::new(),
            complex_type: Slot::new(),
            uniques: NodeList::new(),
            keys: NodeList::new(),
            keyrefs: NodeList::new(),
            name: RefCell::new(None),
            type_name: RefCell::new(None),
        })
    }

    /// Install an inline simple type, taking ownership of it.
    pub fn set_simple_type(&self, simple_type: Rc<XsdSimpleType>) -> Result<()> {
        self.simple_type.attach(&self.base, simple_type)
    }

    /// The inline simple type, if one has been set.
    pub fn simple_type(&self) -> Option<Rc<XsdSimpleType>> {
        self.simple_type.get()
    }

    /// Install an inline complex type, taking ownership of it.
    pub fn set_complex_type(&self, complex_type: Rc<XsdComplexType>) -> Result<()> {
        self.complex_type.attach(&self.base, complex_type)
    }

    /// The inline complex type, if one has been set.
    pub fn complex_type(&self) -> Option<Rc<XsdComplexType>> {
        self.complex_type.get()
    }

    /// Append a unique constraint, taking ownership of it.
    pub fn add_unique(&self, unique: Rc<XsdUnique>) -> Result<()> {
        self.uniques.attach(&self.base, unique)
    }

    /// The unique constraints in document order.
    pub fn uniques(&self) -> Vec<Rc<XsdUnique>> {
        self.uniques.items()
    }

    /// Append a key constraint, taking ownership of it.
    pub fn add_key(&self, key: Rc<XsdKey>) -> Result<()> {
        self.keys.attach(&self.base, key)
    }

    /// The key constraints in document order.
    pub fn keys(&self) -> Vec<Rc<XsdKey>> {
        self.keys.items()
    }

    /// Append a keyref constraint, taking ownership of it.
    pub fn add_keyref(&self, keyref: Rc<XsdKeyref>) -> Result<()> {
        self.keyrefs.attach(&self.base, keyref)
    }

    /// The keyref constraints in document order.
    pub fn keyrefs(&self) -> Vec<Rc<XsdKeyref>> {
        self.keyrefs.items()
    }

    /// The element name, if set.
    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    /// Set the element name.
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

impl XsdNode for XsdElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdElement {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::base::same_element;
    use crate::elements::identities::XsdSelector;

    #[test]
    fn test_fresh_element_is_empty() {
        let element = XsdElement::new();
        assert_eq!(element.kind(), ElementKind::Element);
        assert!(!element.has_parent());
        assert!(element.simple_type().is_none());
        assert!(element.complex_type().is_none());
        assert!(element.uniques().is_empty());
        assert!(element.keys().is_empty());
        assert!(element.keyrefs().is_empty());
    }

    #[test]
    fn test_inline_type_slots() {
        let element = XsdElement::new();
        element.set_name("person");

        let complex_type = XsdComplexType::new();
        element.set_complex_type(complex_type.clone()).unwrap();

        assert!(same_element(
            complex_type.parent().unwrap().as_ref(),
            element.as_ref()
        ));
        assert!(element.complex_type().is_some());
    }

    #[test]
    fn test_identity_constraints_keep_document_order() {
        let element = XsdElement::new();

        let key = XsdKey::new();
        key.set_name("personKey");
        key.set_selector(XsdSelector::new()).unwrap();
        element.add_key(key).unwrap();

        let keyref = XsdKeyref::new();
        keyref.set_name("managerRef");
        keyref.set_refer("personKey");
        element.add_keyref(keyref).unwrap();

        let unique = XsdUnique::new();
        unique.set_name("uniqueEmail");
        element.add_unique(unique).unwrap();

        assert_eq!(element.keys().len(), 1);
        assert_eq!(element.keyrefs().len(), 1);
        assert_eq!(element.uniques().len(), 1);
        assert_eq!(element.keys()[0].name().as_deref(), Some("personKey"));
        assert_eq!(element.keyrefs()[0].refer().as_deref(), Some("personKey"));
    }

    #[test]
    fn test_namespace_visible_from_inline_type() {
        let element = XsdElement::new();
        let simple_type = XsdSimpleType::new();
        element.set_simple_type(simple_type.clone()).unwrap();

        element.bind_namespace("ex", "http://example.com/ns");
        assert_eq!(
            simple_type.lookup_namespace("ex").as_deref(),
            Some("http://example.com/ns")
        );
    }
}
