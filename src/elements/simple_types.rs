//! XSD simple type definitions
//!
//! xs:simpleType and its three derivation elements: restriction, xs:list
//! and xs:union. A simple type holds exactly one derivation child in a
//! valid schema; the tree stores whichever one the builder installs.
//!
//! Reference: https://www.w3.org/TR/xmlschema-2/

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

use super::annotations::XsdAnnotation;
use super::base::{ElementBase, NodeList, Slot, XsdNode};
use super::facets::{Facet, FacetList};
use super::kinds::ElementKind;
use super::roles::{Annotated, SimpleTyped};

/// xs:simpleType definition
#[derive(Debug)]
pub struct XsdSimpleType {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    restriction: Slot<XsdSimpleTypeRestriction>,
    list: Slot<XsdList>,
    union: Slot<XsdUnion>,
    name: RefCell<Option<String>>,
}

impl XsdSimpleType {
    /// Create a new, unattached simple type definition.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::SimpleType, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            restriction: Slot::new(),
            list: Slot::new(),
            union: Slot::new(),
            name: RefCell::new(None),
        })
    }

    /// Install a restriction derivation, taking ownership of it.
    pub fn set_restriction(&self, restriction: Rc<XsdSimpleTypeRestriction>) -> Result<()> {
        self.restriction.attach(&self.base, restriction)
    }

    /// The restriction derivation, if one has been set.
    pub fn restriction(&self) -> Option<Rc<XsdSimpleTypeRestriction>> {
        self.restriction.get()
    }

    /// Install a list derivation, taking ownership of it.
    pub fn set_list(&self, list: Rc<XsdList>) -> Result<()> {
        self.list.attach(&self.base, list)
    }

    /// The list derivation, if one has been set.
    pub fn list(&self) -> Option<Rc<XsdList>> {
        self.list.get()
    }

    /// Install a union derivation, taking ownership of it.
    pub fn set_union(&self, union: Rc<XsdUnion>) -> Result<()> {
        self.union.attach(&self.base, union)
    }

    /// The union derivation, if one has been set.
    pub fn union(&self) -> Option<Rc<XsdUnion>> {
        self.union.get()
    }

    /// The type name, if set.
    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    /// Set the type name.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = Some(name.into());
    }
}

impl XsdNode for XsdSimpleType {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdSimpleType {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:restriction inside xs:simpleType
///
/// Derives a simple type by constraining a base type with facets. The base
/// is named by reference or supplied inline through the [`SimpleTyped`]
/// role.
#[derive(Debug)]
pub struct XsdSimpleTypeRestriction {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    simple_type: Slot<XsdSimpleType>,
    facets: FacetList,
    base_type: RefCell<Option<String>>,
}

impl XsdSimpleTypeRestriction {
    /// Create a new, unattached restriction node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::SimpleTypeRestriction, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            simple_type: Slot::new(),
            facets: FacetList::new(),
            base_type: RefCell::new(None),
        })
    }

    /// Append a constraining facet, taking ownership of it.
    pub fn add_facet(&self, facet: impl Into<Facet>) -> Result<()> {
        self.facets.attach(&self.base, facet.into())
    }

    /// The constraining facets in document order.
    pub fn facets(&self) -> Vec<Facet> {
        self.facets.items()
    }

    /// The referenced base type name, if set.
    pub fn base_type(&self) -> Option<String> {
        self.base_type.borrow().clone()
    }

    /// Set the referenced base type name.
    pub fn set_base_type(&self, base_type: impl Into<String>) {
        *self.base_type.borrow_mut() = Some(base_type.into());
    }
}

impl XsdNode for XsdSimpleTypeRestriction {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdSimpleTypeRestriction {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

impl SimpleTyped for XsdSimpleTypeRestriction {
    fn simple_type_slot(&self) -> &Slot<XsdSimpleType> {
        &self.simple_type
    }
}

/// xs:list derivation of a simple type
///
/// The item type is named by reference or supplied inline through the
/// [`SimpleTyped`] role.
#[derive(Debug)]
pub struct XsdList {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    simple_type: Slot<XsdSimpleType>,
    item_type: RefCell<Option<String>>,
}

impl XsdList {
    /// Create a new, unattached list derivation.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::List, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            simple_type: Slot::new(),
            item_type: RefCell::new(None),
        })
    }

    /// The referenced item type name, if set.
    pub fn item_type(&self) -> Option<String> {
        self.item_type.borrow().clone()
    }

    /// Set the referenced item type name.
    pub fn set_item_type(&self, item_type: impl Into<String>) {
        *self.item_type.borrow_mut() = Some(item_type.into());
    }
}

impl XsdNode for XsdList {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdList {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

impl SimpleTyped for XsdList {
    fn simple_type_slot(&self) -> &Slot<XsdSimpleType> {
        &self.simple_type
    }
}

/// xs:union derivation of a simple type
///
/// Member types are named through the `memberTypes` scalar or supplied as
/// an ordered collection of inline simple types.
#[derive(Debug)]
pub struct XsdUnion {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    member_types: NodeList<XsdSimpleType>,
    member_type_names: RefCell<Option<String>>,
}

impl XsdUnion {
    /// Create a new, unattached union derivation.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Union, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            member_types: NodeList::new(),
            member_type_names: RefCell::new(None),
        })
    }

    /// Append an inline member type, taking ownership of it.
    pub fn add_member_type(&self, member: Rc<XsdSimpleType>) -> Result<()> {
        self.member_types.attach(&self.base, member)
    }

    /// The inline member types in document order.
    pub fn member_types(&self) -> Vec<Rc<XsdSimpleType>> {
        self.member_types.items()
    }

    /// The memberTypes scalar (whitespace-separated names), if set.
    pub fn member_type_names(&self) -> Option<String> {
        self.member_type_names.borrow().clone()
    }

    /// Set the memberTypes scalar.
    pub fn set_member_type_names(&self, names: impl Into<String>) {
        *self.member_type_names.borrow_mut() = Some(names.into());
    }
}

impl XsdNode for XsdUnion {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdUnion {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::base::same_element;
    use crate::elements::facets::{XsdEnumerationFacet, XsdLengthFacet, XsdPatternFacet};
    use crate::error::Error;

    #[test]
    fn test_restriction_with_facets() {
        let simple_type = XsdSimpleType::new();
        simple_type.set_name("colorType");

        let restriction = XsdSimpleTypeRestriction::new();
        restriction.set_base_type("xs:string");
        restriction
            .add_facet(XsdEnumerationFacet::new("red"))
            .unwrap();
        restriction
            .add_facet(XsdEnumerationFacet::new("green"))
            .unwrap();
        restriction
            .add_facet(XsdPatternFacet::new("[a-z]+"))
            .unwrap();

        simple_type.set_restriction(restriction.clone()).unwrap();

        let facets = restriction.facets();
        assert_eq!(facets.len(), 3);
        assert_eq!(facets[0].value(), "red");
        assert_eq!(facets[1].value(), "green");
        assert_eq!(facets[2].kind(), ElementKind::Pattern);

        assert!(same_element(
            restriction.parent().unwrap().as_ref(),
            simple_type.as_ref()
        ));
    }

    #[test]
    fn test_facet_is_exclusively_owned() {
        let first = XsdSimpleTypeRestriction::new();
        let second = XsdSimpleTypeRestriction::new();
        let facet = XsdLengthFacet::new("8");

        first.add_facet(facet.clone()).unwrap();
        let err = second.add_facet(facet.clone()).unwrap_err();

        let Error::Ownership(violation) = err;
        assert_eq!(violation.child, ElementKind::Length);
        assert_eq!(violation.parent, ElementKind::SimpleTypeRestriction);
        assert!(second.facets().is_empty());
        assert!(same_element(
            facet.parent().unwrap().as_ref(),
            first.as_ref()
        ));
    }

    #[test]
    fn test_list_with_inline_item_type() {
        let list = XsdList::new();
        let item = XsdSimpleType::new();

        list.set_simple_type(item.clone()).unwrap();
        assert!(same_element(item.parent().unwrap().as_ref(), list.as_ref()));
        assert!(list.simple_type().is_some());

        list.set_item_type("xs:token");
        assert_eq!(list.item_type().as_deref(), Some("xs:token"));
    }

    #[test]
    fn test_union_member_order() {
        let union = XsdUnion::new();
        let first = XsdSimpleType::new();
        first.set_name("sizeByName");
        let second = XsdSimpleType::new();
        second.set_name("sizeByNumber");

        union.add_member_type(first).unwrap();
        union.add_member_type(second).unwrap();

        let names: Vec<Option<String>> = union.member_types().iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            vec![
                Some("sizeByName".to_string()),
                Some("sizeByNumber".to_string())
            ]
        );
    }

    #[test]
    fn test_derivation_slots_start_empty() {
        let simple_type = XsdSimpleType::new();
        assert!(simple_type.restriction().is_none());
        assert!(simple_type.list().is_none());
        assert!(simple_type.union().is_none());
    }
}
