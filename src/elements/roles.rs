//! Capability roles shared across element kinds
//!
//! A role groups the kinds that expose the same attachment point, so a
//! builder can be written once against the role instead of once per
//! concrete kind. Each role is a trait implemented only by the kinds that
//! satisfy it; passing a node of any other kind is a compile error, so no
//! "kind mismatch" failure exists at runtime.
//!
//! The four roles:
//! - [`Annotated`]: carries a single xs:annotation child.
//! - [`AttributeNaming`]: carries attribute declarations, attribute-group
//!   references and an anyAttribute wildcard.
//! - [`TypeNaming`]: carries a single type-definition particle (one of
//!   all, choice, sequence, group).
//! - [`SimpleTyped`]: carries a single inline xs:simpleType child.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

use super::annotations::XsdAnnotation;
use super::attributes::{XsdAttribute, XsdAttributeGroup};
use super::base::{ElementBase, NodeList, Slot, XsdNode};
use super::groups::{XsdAll, XsdChoice, XsdGroup, XsdSequence};
use super::kinds::ElementKind;
use super::simple_types::XsdSimpleType;
use super::wildcards::XsdAnyAttribute;

/// Role for kinds that carry a single xs:annotation child.
pub trait Annotated: XsdNode {
    /// The slot backing the annotation relation.
    fn annotation_slot(&self) -> &Slot<XsdAnnotation>;

    /// Install the annotation child, taking ownership of it.
    fn set_annotation(&self, annotation: Rc<XsdAnnotation>) -> Result<()> {
        self.annotation_slot().attach(self.base(), annotation)
    }

    /// The annotation child, if one has been set.
    fn annotation(&self) -> Option<Rc<XsdAnnotation>> {
        self.annotation_slot().get()
    }
}

/// Role for kinds that declare attributes.
///
/// Satisfied by attributeGroup, complexType and the complexContent
/// extension/restriction kinds. Attribute and attribute-group children are
/// ordered collections; the anyAttribute wildcard is a single slot.
pub trait AttributeNaming: XsdNode {
    /// The list backing the attribute relation.
    fn attribute_list(&self) -> &NodeList<XsdAttribute>;

    /// The list backing the attribute-group relation.
    fn attribute_group_list(&self) -> &NodeList<XsdAttributeGroup>;

    /// The slot backing the anyAttribute relation.
    fn any_attribute_slot(&self) -> &Slot<XsdAnyAttribute>;

    /// Append an attribute declaration, taking ownership of it.
    fn add_attribute(&self, attribute: Rc<XsdAttribute>) -> Result<()> {
        self.attribute_list().attach(self.base(), attribute)
    }

    /// The attribute children in document order.
    fn attributes(&self) -> Vec<Rc<XsdAttribute>> {
        self.attribute_list().items()
    }

    /// Append an attribute-group reference, taking ownership of it.
    fn add_attribute_group(&self, group: Rc<XsdAttributeGroup>) -> Result<()> {
        self.attribute_group_list().attach(self.base(), group)
    }

    /// The attribute-group children in document order.
    fn attribute_groups(&self) -> Vec<Rc<XsdAttributeGroup>> {
        self.attribute_group_list().items()
    }

    /// Install the anyAttribute wildcard, taking ownership of it.
    fn set_any_attribute(&self, any_attribute: Rc<XsdAnyAttribute>) -> Result<()> {
        self.any_attribute_slot().attach(self.base(), any_attribute)
    }

    /// The anyAttribute wildcard, if one has been set.
    fn any_attribute(&self) -> Option<Rc<XsdAnyAttribute>> {
        self.any_attribute_slot().get()
    }
}

/// The closed set of kinds accepted as a type-definition particle.
#[derive(Debug, Clone)]
pub enum ModelGroupParticle {
    /// xs:all compositor
    All(Rc<XsdAll>),
    /// xs:choice compositor
    Choice(Rc<XsdChoice>),
    /// xs:sequence compositor
    Sequence(Rc<XsdSequence>),
    /// xs:group reference
    Group(Rc<XsdGroup>),
}

impl ModelGroupParticle {
    /// The kind of the wrapped node.
    pub fn kind(&self) -> ElementKind {
        self.as_node().kind()
    }

    /// The wrapped node as a plain tree node.
    pub fn as_node(&self) -> &dyn XsdNode {
        match self {
            Self::All(node) => node.as_ref(),
            Self::Choice(node) => node.as_ref(),
            Self::Sequence(node) => node.as_ref(),
            Self::Group(node) => node.as_ref(),
        }
    }
}

impl From<Rc<XsdAll>> for ModelGroupParticle {
    fn from(node: Rc<XsdAll>) -> Self {
        Self::All(node)
    }
}

impl From<Rc<XsdChoice>> for ModelGroupParticle {
    fn from(node: Rc<XsdChoice>) -> Self {
        Self::Choice(node)
    }
}

impl From<Rc<XsdSequence>> for ModelGroupParticle {
    fn from(node: Rc<XsdSequence>) -> Self {
        Self::Sequence(node)
    }
}

impl From<Rc<XsdGroup>> for ModelGroupParticle {
    fn from(node: Rc<XsdGroup>) -> Self {
        Self::Group(node)
    }
}

/// Single-slot relation restricted to type-definition particles.
#[derive(Debug)]
pub struct ParticleSlot {
    inner: RefCell<Option<ModelGroupParticle>>,
}

impl ParticleSlot {
    /// Create an empty particle slot.
    pub(crate) fn new() -> Self {
        Self {
            inner: RefCell::new(None),
        }
    }

    /// Adopt the particle's node into `owner` and store the particle.
    pub(crate) fn attach(&self, owner: &ElementBase, particle: ModelGroupParticle) -> Result<()> {
        owner.adopt(particle.as_node())?;
        *self.inner.borrow_mut() = Some(particle);
        Ok(())
    }

    /// The current occupant, if any.
    pub fn get(&self) -> Option<ModelGroupParticle> {
        self.inner.borrow().clone()
    }

    /// Whether the slot is occupied.
    pub fn is_set(&self) -> bool {
        self.inner.borrow().is_some()
    }
}

/// Role for kinds that carry a single type-definition particle.
///
/// Satisfied by complexType and the complexContent extension/restriction
/// kinds. The accepted child kinds are closed to all, choice, sequence and
/// group through [`ModelGroupParticle`].
pub trait TypeNaming: XsdNode {
    /// The slot backing the particle relation.
    fn particle_slot(&self) -> &ParticleSlot;

    /// Install the type-definition particle, taking ownership of it.
    fn set_particle(&self, particle: impl Into<ModelGroupParticle>) -> Result<()> {
        self.particle_slot().attach(self.base(), particle.into())
    }

    /// The type-definition particle, if one has been set.
    fn particle(&self) -> Option<ModelGroupParticle> {
        self.particle_slot().get()
    }
}

/// Role for kinds that carry a single inline xs:simpleType child.
///
/// Satisfied by attribute, list and the simple-type-bearing restriction
/// kinds.
pub trait SimpleTyped: XsdNode {
    /// The slot backing the simpleType relation.
    fn simple_type_slot(&self) -> &Slot<XsdSimpleType>;

    /// Install the inline simple type, taking ownership of it.
    fn set_simple_type(&self, simple_type: Rc<XsdSimpleType>) -> Result<()> {
        self.simple_type_slot().attach(self.base(), simple_type)
    }

    /// The inline simple type, if one has been set.
    fn simple_type(&self) -> Option<Rc<XsdSimpleType>> {
        self.simple_type_slot().get()
    }
}
