//! XSD model groups
//!
//! The compositors xs:sequence, xs:choice and xs:all plus the named
//! xs:group. Sequence and choice accept the full particle vocabulary
//! (elements, nested compositors, group references and wildcards) as one
//! document-ordered collection; xs:all is restricted to element particles
//! in XSD 1.0, and a named group holds exactly one compositor child.
//!
//! Reference: https://www.w3.org/TR/xmlschema-1/#Model_Groups

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

use super::annotations::XsdAnnotation;
use super::base::{ElementBase, NodeList, Slot, XsdNode};
use super::elements::XsdElement;
use super::kinds::ElementKind;
use super::roles::Annotated;
use super::wildcards::XsdAny;

/// A particle in a sequence or choice model group.
#[derive(Debug, Clone)]
pub enum GroupParticle {
    /// Local element declaration
    Element(Rc<XsdElement>),
    /// Nested xs:sequence
    Sequence(Rc<XsdSequence>),
    /// Nested xs:choice
    Choice(Rc<XsdChoice>),
    /// Group reference
    Group(Rc<XsdGroup>),
    /// xs:any wildcard
    Any(Rc<XsdAny>),
}

impl GroupParticle {
    /// The kind of the wrapped node.
    pub fn kind(&self) -> ElementKind {
        self.as_node().kind()
    }

    /// The wrapped node as a plain tree node.
    pub fn as_node(&self) -> &dyn XsdNode {
        match self {
            Self::Element(node) => node.as_ref(),
            Self::Sequence(node) => node.as_ref(),
            Self::Choice(node) => node.as_ref(),
            Self::Group(node) => node.as_ref(),
            Self::Any(node) => node.as_ref(),
        }
    }
}

impl From<Rc<XsdElement>> for GroupParticle {
    fn from(node: Rc<XsdElement>) -> Self {
        Self::Element(node)
    }
}

impl From<Rc<XsdSequence>> for GroupParticle {
    fn from(node: Rc<XsdSequence>) -> Self {
        Self::Sequence(node)
    }
}

impl From<Rc<XsdChoice>> for GroupParticle {
    fn from(node: Rc<XsdChoice>) -> Self {
        Self::Choice(node)
    }
}

impl From<Rc<XsdGroup>> for GroupParticle {
    fn from(node: Rc<XsdGroup>) -> Self {
        Self::Group(node)
    }
}

impl From<Rc<XsdAny>> for GroupParticle {
    fn from(node: Rc<XsdAny>) -> Self {
        Self::Any(node)
    }
}

/// Ordered-collection relation restricted to model-group particles.
#[derive(Debug)]
pub struct ParticleList {
    inner: RefCell<Vec<GroupParticle>>,
}

impl ParticleList {
    pub(crate) fn new() -> Self {
        Self {
            inner: RefCell::new(Vec::new()),
        }
    }

    /// Adopt the particle's node into `owner` and append the particle.
    pub(crate) fn attach(&self, owner: &ElementBase, particle: GroupParticle) -> Result<()> {
        owner.adopt(particle.as_node())?;
        self.inner.borrow_mut().push(particle);
        Ok(())
    }

    /// Snapshot of the particles in document order.
    pub fn items(&self) -> Vec<GroupParticle> {
        self.inner.borrow().clone()
    }

    /// Number of particles attached through this relation.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether no particles have been attached.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

/// xs:sequence model group
#[derive(Debug)]
pub struct XsdSequence {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    particles: ParticleList,
}

impl XsdSequence {
    /// Create a new, unattached sequence compositor.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Sequence, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            particles: ParticleList::new(),
        })
    }

    /// Append an element particle, taking ownership of it.
    pub fn add_element(&self, element: Rc<XsdElement>) -> Result<()> {
        self.particles.attach(&self.base, element.into())
    }

    /// Append a nested sequence, taking ownership of it.
    pub fn add_sequence(&self, sequence: Rc<XsdSequence>) -> Result<()> {
        self.particles.attach(&self.base, sequence.into())
    }

    /// Append a nested choice, taking ownership of it.
    pub fn add_choice(&self, choice: Rc<XsdChoice>) -> Result<()> {
        self.particles.attach(&self.base, choice.into())
    }

    /// Append a group reference, taking ownership of it.
    pub fn add_group(&self, group: Rc<XsdGroup>) -> Result<()> {
        self.particles.attach(&self.base, group.into())
    }

    /// Append an element wildcard, taking ownership of it.
    pub fn add_any(&self, any: Rc<XsdAny>) -> Result<()> {
        self.particles.attach(&self.base, any.into())
    }

    /// The particles in document order.
    pub fn particles(&self) -> Vec<GroupParticle> {
        self.particles.items()
    }
}

impl XsdNode for XsdSequence {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdSequence {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:choice model group
#[derive(Debug)]
pub struct XsdChoice {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    particles: ParticleList,
}

impl XsdChoice {
    /// Create a new, unattached choice compositor.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Choice, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            particles: ParticleList::new(),
        })
    }

    /// Append an element particle, taking ownership of it.
    pub fn add_element(&self, element: Rc<XsdElement>) -> Result<()> {
        self.particles.attach(&self.base, element.into())
    }

    /// Append a nested sequence, taking ownership of it.
    pub fn add_sequence(&self, sequence: Rc<XsdSequence>) -> Result<()> {
        self.particles.attach(&self.base, sequence.into())
    }

    /// Append a nested choice, taking ownership of it.
    pub fn add_choice(&self, choice: Rc<XsdChoice>) -> Result<()> {
        self.particles.attach(&self.base, choice.into())
    }

    /// Append a group reference, taking ownership of it.
    pub fn add_group(&self, group: Rc<XsdGroup>) -> Result<()> {
        self.particles.attach(&self.base, group.into())
    }

    /// Append an element wildcard, taking ownership of it.
    pub fn add_any(&self, any: Rc<XsdAny>) -> Result<()> {
        self.particles.attach(&self.base, any.into())
    }

    /// The particles in document order.
    pub fn particles(&self) -> Vec<GroupParticle> {
        self.particles.items()
    }
}

impl XsdNode for XsdChoice {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdChoice {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:all model group
///
/// XSD 1.0 restricts xs:all to element particles.
#[derive(Debug)]
pub struct XsdAll {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    elements: NodeList<XsdElement>,
}

impl XsdAll {
    /// Create a new, unattached all compositor.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::All, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            elements: NodeList::new(),
        })
    }

    /// Append an element particle, taking ownership of it.
    pub fn add_element(&self, element: Rc<XsdElement>) -> Result<()> {
        self.elements.attach(&self.base, element)
    }

    /// The element particles in document order.
    pub fn elements(&self) -> Vec<Rc<XsdElement>> {
        self.elements.items()
    }
}

impl XsdNode for XsdAll {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdAll {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:group definition or reference
///
/// A named group wraps exactly one compositor. The three content slots are
/// mutually exclusive in a valid schema; the tree stores whichever one the
/// builder installs.
#[derive(Debug)]
pub struct XsdGroup {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    all: Slot<XsdAll>,
    choice: Slot<XsdChoice>,
    sequence: Slot<XsdSequence>,
    name: RefCell<Option<String>>,
}

impl XsdGroup {
    /// Create a new, unattached group node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Group, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            all: Slot::new(),
            choice: Slot::new(),
            sequence: Slot::new(),
            name: RefCell::new(None),
        })
    }

    /// Install an all compositor as the group content.
    pub fn set_all(&self, all: Rc<XsdAll>) -> Result<()> {
        self.all.attach(&self.base, all)
    }

    /// The all compositor, if one has been set.
    pub fn all_content(&self) -> Option<Rc<XsdAll>> {
        self.all.get()
    }

    /// Install a choice compositor as the group content.
    pub fn set_choice(&self, choice: Rc<XsdChoice>) -> Result<()> {
        self.choice.attach(&self.base, choice)
    }

    /// The choice compositor, if one has been set.
    pub fn choice_content(&self) -> Option<Rc<XsdChoice>> {
        self.choice.get()
    }

    /// Install a sequence compositor as the group content.
    pub fn set_sequence(&self, sequence: Rc<XsdSequence>) -> Result<()> {
        self.sequence.attach(&self.base, sequence)
    }

    /// The sequence compositor, if one has been set.
    pub fn sequence_content(&self) -> Option<Rc<XsdSequence>> {
        self.sequence.get()
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

impl XsdNode for XsdGroup {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdGroup {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::base::same_element;
    use crate::error::Error;

    #[test]
    fn test_sequence_preserves_particle_order() {
        let sequence = XsdSequence::new();
        let first = XsdElement::new();
        first.set_name("givenName");
        let second = XsdElement::new();
        second.set_name("familyName");
        let wildcard = XsdAny::new();

        sequence.add_element(first).unwrap();
        sequence.add_element(second).unwrap();
        sequence.add_any(wildcard).unwrap();

        let kinds: Vec<ElementKind> = sequence.particles().iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![ElementKind::Element, ElementKind::Element, ElementKind::Any]
        );

        match &sequence.particles()[0] {
            GroupParticle::Element(element) => {
                assert_eq!(element.name().as_deref(), Some("givenName"));
            }
            other => panic!("expected element particle, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_group_cannot_belong_to_two_choices() {
        let group = XsdGroup::new();
        group.set_name("nameGroup");
        let first = XsdChoice::new();
        let second = XsdChoice::new();

        first.add_group(group.clone()).unwrap();
        assert!(group.has_parent());
        let parent = group.parent().unwrap();
        assert!(same_element(parent.as_ref(), first.as_ref()));

        let err = second.add_group(group.clone()).unwrap_err();
        let Error::Ownership(violation) = err;
        assert_eq!(violation.child, ElementKind::Group);
        assert_eq!(violation.parent, ElementKind::Choice);

        // The owner did not change.
        let parent = group.parent().unwrap();
        assert!(same_element(parent.as_ref(), first.as_ref()));
        assert!(second.particles().is_empty());
    }

    #[test]
    fn test_all_accepts_only_elements() {
        let all = XsdAll::new();
        let element = XsdElement::new();
        all.add_element(element.clone()).unwrap();

        assert_eq!(all.elements().len(), 1);
        assert!(same_element(
            element.parent().unwrap().as_ref(),
            all.as_ref()
        ));
    }

    #[test]
    fn test_group_content_slots() {
        let group = XsdGroup::new();
        let sequence = XsdSequence::new();

        group.set_sequence(sequence.clone()).unwrap();
        assert!(group.sequence_content().is_some());
        assert!(group.all_content().is_none());
        assert!(group.choice_content().is_none());
        assert!(sequence.has_parent());
    }

    #[test]
    fn test_nested_compositors() {
        let outer = XsdSequence::new();
        let inner = XsdChoice::new();
        let element = XsdElement::new();

        inner.add_element(element).unwrap();
        outer.add_choice(inner.clone()).unwrap();

        assert!(same_element(
            inner.parent().unwrap().as_ref(),
            outer.as_ref()
        ));
        assert_eq!(outer.particles()[0].kind(), ElementKind::Choice);
    }
}
