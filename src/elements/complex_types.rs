//! XSD complex type definitions
//!
//! xs:complexType together with its content models (xs:simpleContent and
//! xs:complexContent) and their restriction/extension children. A complex
//! type with neither content-model child uses the implicit complex content
//! of its own particle and attribute declarations.
//!
//! Reference: https://www.w3.org/TR/xmlschema-1/#CTD

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

use super::annotations::XsdAnnotation;
use super::attributes::{XsdAttribute, XsdAttributeGroup};
use super::base::{ElementBase, NodeList, Slot, XsdNode};
use super::facets::{Facet, FacetList};
use super::kinds::ElementKind;
use super::roles::{Annotated, AttributeNaming, ParticleSlot, SimpleTyped, TypeNaming};
use super::simple_types::XsdSimpleType;
use super::wildcards::XsdAnyAttribute;

/// xs:complexType definition
#[derive(Debug)]
pub struct XsdComplexType {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    particle: ParticleSlot,
    attributes: NodeList<XsdAttribute>,
    attribute_groups: NodeList<XsdAttributeGroup>,
    any_attribute: Slot<XsdAnyAttribute>,
    simple_content: Slot<XsdSimpleContent>,
    complex_content: Slot<XsdComplexContent>,
    name: RefCell<Option<String>>,
}

impl XsdComplexType {
    /// Create a new, unattached complex type definition.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::ComplexType, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            particle: ParticleSlot::new(),
            attributes: NodeList::new(),
            attribute_groups: NodeList::new(),
            any_attribute: Slot::new(),
            simple_content: Slot::new(),
            complex_content: Slot::new(),
            name: RefCell::new(None),
        })
    }

    /// Install a simpleContent child, taking ownership of it.
    pub fn set_simple_content(&self, content: Rc<XsdSimpleContent>) -> Result<()> {
        self.simple_content.attach(&self.base, content)
    }

    /// The simpleContent child, if one has been set.
    pub fn simple_content(&self) -> Option<Rc<XsdSimpleContent>> {
        self.simple_content.get()
    }

    /// Install a complexContent child, taking ownership of it.
    pub fn set_complex_content(&self, content: Rc<XsdComplexContent>) -> Result<()> {
        self.complex_content.attach(&self.base, content)
    }

    /// The complexContent child, if one has been set.
    pub fn complex_content(&self) -> Option<Rc<XsdComplexContent>> {
        self.complex_content.get()
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

impl XsdNode for XsdComplexType {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdComplexType {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

impl TypeNaming for XsdComplexType {
    fn particle_slot(&self) -> &ParticleSlot {
        &self.particle
    }
}

impl AttributeNaming for XsdComplexType {
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

/// xs:simpleContent of a complex type
#[derive(Debug)]
pub struct XsdSimpleContent {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    restriction: Slot<XsdSimpleContentRestriction>,
    extension: Slot<XsdSimpleContentExtension>,
}

impl XsdSimpleContent {
    /// Create a new, unattached simpleContent node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::SimpleContent, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            restriction: Slot::new(),
            extension: Slot::new(),
        })
    }

    /// Install the restriction child, taking ownership of it.
    pub fn set_restriction(&self, restriction: Rc<XsdSimpleContentRestriction>) -> Result<()> {
        self.restriction.attach(&self.base, restriction)
    }

    /// The restriction child, if one has been set.
    pub fn restriction(&self) -> Option<Rc<XsdSimpleContentRestriction>> {
        self.restriction.get()
    }

    /// Install the extension child, taking ownership of it.
    pub fn set_extension(&self, extension: Rc<XsdSimpleContentExtension>) -> Result<()> {
        self.extension.attach(&self.base, extension)
    }

    /// The extension child, if one has been set.
    pub fn extension(&self) -> Option<Rc<XsdSimpleContentExtension>> {
        self.extension.get()
    }
}

impl XsdNode for XsdSimpleContent {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdSimpleContent {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:complexContent of a complex type
#[derive(Debug)]
pub struct XsdComplexContent {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    restriction: Slot<XsdComplexContentRestriction>,
    extension: Slot<XsdComplexContentExtension>,
}

impl XsdComplexContent {
    /// Create a new, unattached complexContent node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::ComplexContent, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            restriction: Slot::new(),
            extension: Slot::new(),
        })
    }

    /// Install the restriction child, taking ownership of it.
    pub fn set_restriction(&self, restriction: Rc<XsdComplexContentRestriction>) -> Result<()> {
        self.restriction.attach(&self.base, restriction)
    }

    /// The restriction child, if one has been set.
    pub fn restriction(&self) -> Option<Rc<XsdComplexContentRestriction>> {
        self.restriction.get()
    }

    /// Install the extension child, taking ownership of it.
    pub fn set_extension(&self, extension: Rc<XsdComplexContentExtension>) -> Result<()> {
        self.extension.attach(&self.base, extension)
    }

    /// The extension child, if one has been set.
    pub fn extension(&self) -> Option<Rc<XsdComplexContentExtension>> {
        self.extension.get()
    }
}

impl XsdNode for XsdComplexContent {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdComplexContent {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:restriction inside xs:simpleContent
///
/// Restricts the character content of a complex type; may carry facets and
/// an inline simple type through the [`SimpleTyped`] role.
#[derive(Debug)]
pub struct XsdSimpleContentRestriction {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    simple_type: Slot<XsdSimpleType>,
    facets: FacetList,
    base_type: RefCell<Option<String>>,
}

impl XsdSimpleContentRestriction {
    /// Create a new, unattached restriction node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::SimpleContentRestriction, weak.clone() as std::rc::Weak<dyn XsdNode>),
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

impl XsdNode for XsdSimpleContentRestriction {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdSimpleContentRestriction {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

impl SimpleTyped for XsdSimpleContentRestriction {
    fn simple_type_slot(&self) -> &Slot<XsdSimpleType> {
        &self.simple_type
    }
}

/// xs:extension inside xs:simpleContent
#[derive(Debug)]
pub struct XsdSimpleContentExtension {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    base_type: RefCell<Option<String>>,
}

impl XsdSimpleContentExtension {
    /// Create a new, unattached extension node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::SimpleContentExtension, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            base_type: RefCell::new(None),
        })
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

impl XsdNode for XsdSimpleContentExtension {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdSimpleContentExtension {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:restriction inside xs:complexContent
///
/// Restates the allowed content of the base type; carries a particle
/// through [`TypeNaming`] and attribute declarations through
/// [`AttributeNaming`].
#[derive(Debug)]
pub struct XsdComplexContentRestriction {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    particle: ParticleSlot,
    attributes: NodeList<XsdAttribute>,
    attribute_groups: NodeList<XsdAttributeGroup>,
    any_attribute: Slot<XsdAnyAttribute>,
    base_type: RefCell<Option<String>>,
}

impl XsdComplexContentRestriction {
    /// Create a new, unattached restriction node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::ComplexContentRestriction, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            particle: ParticleSlot::new(),
            attributes: NodeList::new(),
            attribute_groups: NodeList::new(),
            any_attribute: Slot::new(),
            base_type: RefCell::new(None),
        })
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

impl XsdNode for XsdComplexContentRestriction {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdComplexContentRestriction {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

impl TypeNaming for XsdComplexContentRestriction {
    fn particle_slot(&self) -> &ParticleSlot {
        &self.particle
    }
}

impl AttributeNaming for XsdComplexContentRestriction {
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

/// xs:extension inside xs:complexContent
#[derive(Debug)]
pub struct XsdComplexContentExtension {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    particle: ParticleSlot,
    attributes: NodeList<XsdAttribute>,
    attribute_groups: NodeList<XsdAttributeGroup>,
    any_attribute: Slot<XsdAnyAttribute>,
    base_type: RefCell<Option<String>>,
}

impl XsdComplexContentExtension {
    /// Create a new, unattached extension node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::ComplexContentExtension, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            particle: ParticleSlot::new(),
            attributes: NodeList::new(),
            attribute_groups: NodeList::new(),
            any_attribute: Slot::new(),
            base_type: RefCell::new(None),
        })
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

impl XsdNode for XsdComplexContentExtension {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdComplexContentExtension {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

impl TypeNaming for XsdComplexContentExtension {
    fn particle_slot(&self) -> &ParticleSlot {
        &self.particle
    }
}

impl AttributeNaming for XsdComplexContentExtension {
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
