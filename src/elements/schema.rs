//! XSD schema root and composition elements
//!
//! xs:schema plus the composition elements xs:import, xs:include and
//! xs:redefine, and the xs:notation declaration. The schema node is the
//! usual root of a tree and therefore the usual place for document-wide
//! namespace bindings.
//!
//! Reference: https://www.w3.org/TR/xmlschema-1/#Schemas

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

use super::annotations::XsdAnnotation;
use super::attributes::{XsdAttribute, XsdAttributeGroup};
use super::base::{ElementBase, NodeList, Slot, XsdNode};
use super::complex_types::XsdComplexType;
use super::elements::XsdElement;
use super::groups::XsdGroup;
use super::kinds::ElementKind;
use super::roles::Annotated;
use super::simple_types::XsdSimpleType;

/// xs:schema, the document root
#[derive(Debug)]
pub struct XsdSchema {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    imports: NodeList<XsdImport>,
    includes: NodeList<XsdInclude>,
    redefines: NodeList<XsdRedefine>,
    simple_types: NodeList<XsdSimpleType>,
    complex_types: NodeList<XsdComplexType>,
    groups: NodeList<XsdGroup>,
    attribute_groups: NodeList<XsdAttributeGroup>,
    elements: NodeList<XsdElement>,
    attributes: NodeList<XsdAttribute>,
    notations: NodeList<XsdNotation>,
    target_namespace: RefCell<Option<String>>,
    version: RefCell<Option<String>>,
}

impl XsdSchema {
    /// Create a new, unattached schema root.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Schema, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            imports: NodeList::new(),
            includes: NodeList::new(),
            redefines: NodeList::new(),
            simple_types: NodeList::new(),
            complex_types: NodeList::new(),
            groups: NodeList::new(),
            attribute_groups: NodeList::new(),
            elements: NodeList::new(),
            attributes: NodeList::new(),
            notations: NodeList::new(),
            target_namespace: RefCell::new(None),
            version: RefCell::new(None),
        })
    }

    /// Append an import, taking ownership of it.
    pub fn add_import(&self, import: Rc<XsdImport>) -> Result<()> {
        self.imports.attach(&self.base, import)
    }

    /// The imports in document order.
    pub fn imports(&self) -> Vec<Rc<XsdImport>> {
        self.imports.items()
    }

    /// Append an include, taking ownership of it.
    pub fn add_include(&self, include: Rc<XsdInclude>) -> Result<()> {
        self.includes.attach(&self.base, include)
    }

    /// The includes in document order.
    pub fn includes(&self) -> Vec<Rc<XsdInclude>> {
        self.includes.items()
    }

    /// Append a redefine, taking ownership of it.
    pub fn add_redefine(&self, redefine: Rc<XsdRedefine>) -> Result<()> {
        self.redefines.attach(&self.base, redefine)
    }

    /// The redefines in document order.
    pub fn redefines(&self) -> Vec<Rc<XsdRedefine>> {
        self.redefines.items()
    }

    /// Append a top-level simple type, taking ownership of it.
    pub fn add_simple_type(&self, simple_type: Rc<XsdSimpleType>) -> Result<()> {
        self.simple_types.attach(&self.base, simple_type)
    }

    /// The top-level simple types in document order.
    pub fn simple_types(&self) -> Vec<Rc<XsdSimpleType>> {
        self.simple_types.items()
    }

    /// Append a top-level complex type, taking ownership of it.
    pub fn add_complex_type(&self, complex_type: Rc<XsdComplexType>) -> Result<()> {
        self.complex_types.attach(&self.base, complex_type)
    }

    /// The top-level complex types in document order.
    pub fn complex_types(&self) -> Vec<Rc<XsdComplexType>> {
        self.complex_types.items()
    }

    /// Append a top-level group, taking ownership of it.
    pub fn add_group(&self, group: Rc<XsdGroup>) -> Result<()> {
        self.groups.attach(&self.base, group)
    }

    /// The top-level groups in document order.
    pub fn groups(&self) -> Vec<Rc<XsdGroup>> {
        self.groups.items()
    }

    /// Append a top-level attribute group, taking ownership of it.
    pub fn add_attribute_group(&self, group: Rc<XsdAttributeGroup>) -> Result<()> {
        self.attribute_groups.attach(&self.base, group)
    }

    /// The top-level attribute groups in document order.
    pub fn attribute_groups(&self) -> Vec<Rc<XsdAttributeGroup>> {
        self.attribute_groups.items()
    }

    /// Append a top-level element declaration, taking ownership of it.
    pub fn add_element(&self, element: Rc<XsdElement>) -> Result<()> {
        self.elements.attach(&self.base, element)
    }

    /// The top-level element declarations in document order.
    pub fn elements(&self) -> Vec<Rc<XsdElement>> {
        self.elements.items()
    }

    /// Append a top-level attribute declaration, taking ownership of it.
    pub fn add_attribute(&self, attribute: Rc<XsdAttribute>) -> Result<()> {
        self.attributes.attach(&self.base, attribute)
    }

    /// The top-level attribute declarations in document order.
    pub fn attributes(&self) -> Vec<Rc<XsdAttribute>> {
        self.attributes.items()
    }

    /// Append a notation declaration, taking ownership of it.
    pub fn add_notation(&self, notation: Rc<XsdNotation>) -> Result<()> {
        self.notations.attach(&self.base, notation)
    }

    /// The notation declarations in document order.
    pub fn notations(&self) -> Vec<Rc<XsdNotation>> {
        self.notations.items()
    }

    /// The target namespace, if set.
    pub fn target_namespace(&self) -> Option<String> {
        self.target_namespace.borrow().clone()
    }

    /// Set the target namespace.
    pub fn set_target_namespace(&self, namespace: impl Into<String>) {
        *self.target_namespace.borrow_mut() = Some(namespace.into());
    }

    /// The schema version, if set.
    pub fn version(&self) -> Option<String> {
        self.version.borrow().clone()
    }

    /// Set the schema version.
    pub fn set_version(&self, version: impl Into<String>) {
        *self.version.borrow_mut() = Some(version.into());
    }
}

impl XsdNode for XsdSchema {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdSchema {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:import composition element
#[derive(Debug)]
pub struct XsdImport {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    namespace: RefCell<Option<String>>,
    schema_location: RefCell<Option<String>>,
}

impl XsdImport {
    /// Create a new, unattached import node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Import, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            namespace: RefCell::new(None),
            schema_location: RefCell::new(None),
        })
    }

    /// The imported namespace, if set.
    pub fn namespace(&self) -> Option<String> {
        self.namespace.borrow().clone()
    }

    /// Set the imported namespace.
    pub fn set_namespace(&self, namespace: impl Into<String>) {
        *self.namespace.borrow_mut() = Some(namespace.into());
    }

    /// The schemaLocation hint, if set.
    pub fn schema_location(&self) -> Option<String> {
        self.schema_location.borrow().clone()
    }

    /// Set the schemaLocation hint.
    pub fn set_schema_location(&self, location: impl Into<String>) {
        *self.schema_location.borrow_mut() = Some(location.into());
    }
}

impl XsdNode for XsdImport {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdImport {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:include composition element
#[derive(Debug)]
pub struct XsdInclude {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    schema_location: RefCell<Option<String>>,
}

impl XsdInclude {
    /// Create a new, unattached include node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Include, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            schema_location: RefCell::new(None),
        })
    }

    /// The schemaLocation, if set.
    pub fn schema_location(&self) -> Option<String> {
        self.schema_location.borrow().clone()
    }

    /// Set the schemaLocation.
    pub fn set_schema_location(&self, location: impl Into<String>) {
        *self.schema_location.borrow_mut() = Some(location.into());
    }
}

impl XsdNode for XsdInclude {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdInclude {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:redefine composition element
///
/// Carries redefinitions of types, groups and attribute groups from the
/// redefined schema document.
#[derive(Debug)]
pub struct XsdRedefine {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    simple_types: NodeList<XsdSimpleType>,
    complex_types: NodeList<XsdComplexType>,
    groups: NodeList<XsdGroup>,
    attribute_groups: NodeList<XsdAttributeGroup>,
    schema_location: RefCell<Option<String>>,
}

impl XsdRedefine {
    /// Create a new, unattached redefine node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Redefine, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            simple_types: NodeList::new(),
            complex_types: NodeList::new(),
            groups: NodeList::new(),
            attribute_groups: NodeList::new(),
            schema_location: RefCell::new(None),
        })
    }

    /// Append a redefined simple type, taking ownership of it.
    pub fn add_simple_type(&self, simple_type: Rc<XsdSimpleType>) -> Result<()> {
        self.simple_types.attach(&self.base, simple_type)
    }

    /// The redefined simple types in document order.
    pub fn simple_types(&self) -> Vec<Rc<XsdSimpleType>> {
        self.simple_types.items()
    }

    /// Append a redefined complex type, taking ownership of it.
    pub fn add_complex_type(&self, complex_type: Rc<XsdComplexType>) -> Result<()> {
        self.complex_types.attach(&self.base, complex_type)
    }

    /// The redefined complex types in document order.
    pub fn complex_types(&self) -> Vec<Rc<XsdComplexType>> {
        self.complex_types.items()
    }

    /// Append a redefined group, taking ownership of it.
    pub fn add_group(&self, group: Rc<XsdGroup>) -> Result<()> {
        self.groups.attach(&self.base, group)
    }

    /// The redefined groups in document order.
    pub fn groups(&self) -> Vec<Rc<XsdGroup>> {
        self.groups.items()
    }

    /// Append a redefined attribute group, taking ownership of it.
    pub fn add_attribute_group(&self, group: Rc<XsdAttributeGroup>) -> Result<()> {
        self.attribute_groups.attach(&self.base, group)
    }

    /// The redefined attribute groups in document order.
    pub fn attribute_groups(&self) -> Vec<Rc<XsdAttributeGroup>> {
        self.attribute_groups.items()
    }

    /// The schemaLocation, if set.
    pub fn schema_location(&self) -> Option<String> {
        self.schema_location.borrow().clone()
    }

    /// Set the schemaLocation.
    pub fn set_schema_location(&self, location: impl Into<String>) {
        *self.schema_location.borrow_mut() = Some(location.into());
    }
}

impl XsdNode for XsdRedefine {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdRedefine {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}

/// xs:notation declaration
#[derive(Debug)]
pub struct XsdNotation {
    base: ElementBase,
    annotation: Slot<XsdAnnotation>,
    name: RefCell<Option<String>>,
    public: RefCell<Option<String>>,
    system: RefCell<Option<String>>,
}

impl XsdNotation {
    /// Create a new, unattached notation declaration.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Notation, weak.clone() as std::rc::Weak<dyn XsdNode>),
            annotation: Slot::new(),
            name: RefCell::new(None),
            public: RefCell::new(None),
            system: RefCell::new(None),
        })
    }

    /// The notation name, if set.
    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    /// Set the notation name.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = Some(name.into());
    }

    /// The public identifier, if set.
    pub fn public(&self) -> Option<String> {
        self.public.borrow().clone()
    }

    /// Set the public identifier.
    pub fn set_public(&self, public: impl Into<String>) {
        *self.public.borrow_mut() = Some(public.into());
    }

    /// The system identifier, if set.
    pub fn system(&self) -> Option<String> {
        self.system.borrow().clone()
    }

    /// Set the system identifier.
    pub fn set_system(&self, system: impl Into<String>) {
        *self.system.borrow_mut() = Some(system.into());
    }
}

impl XsdNode for XsdNotation {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Annotated for XsdNotation {
    fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
        &self.annotation
    }
}
