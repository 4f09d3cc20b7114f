//! XSD annotation elements
//!
//! xs:annotation and its xs:documentation / xs:appinfo children. These are
//! the only kinds that do not themselves satisfy the [`Annotated`] role.
//!
//! Reference: https://www.w3.org/TR/xmlschema-1/#cAnnotations
//!
//! [`Annotated`]: super::roles::Annotated

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

use super::base::{ElementBase, NodeList, XsdNode};
use super::kinds::ElementKind;

/// xs:annotation element
///
/// Carries any number of documentation and appinfo children, each relation
/// in document order.
#[derive(Debug)]
pub struct XsdAnnotation {
    base: ElementBase,
    documentations: NodeList<XsdDocumentation>,
    app_infos: NodeList<XsdAppInfo>,
}

impl XsdAnnotation {
    /// Create a new, unattached annotation node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Annotation, weak.clone() as std::rc::Weak<dyn XsdNode>),
            documentations: NodeList::new(),
            app_infos: NodeList::new(),
        })
    }

    /// Append a documentation child, taking ownership of it.
    pub fn add_documentation(&self, documentation: Rc<XsdDocumentation>) -> Result<()> {
        self.documentations.attach(&self.base, documentation)
    }

    /// The documentation children in document order.
    pub fn documentations(&self) -> Vec<Rc<XsdDocumentation>> {
        self.documentations.items()
    }

    /// Append an appinfo child, taking ownership of it.
    pub fn add_app_info(&self, app_info: Rc<XsdAppInfo>) -> Result<()> {
        self.app_infos.attach(&self.base, app_info)
    }

    /// The appinfo children in document order.
    pub fn app_infos(&self) -> Vec<Rc<XsdAppInfo>> {
        self.app_infos.items()
    }
}

impl XsdNode for XsdAnnotation {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

/// xs:documentation element
///
/// Human-readable annotation content. The text body and the source URI are
/// opaque scalars.
#[derive(Debug)]
pub struct XsdDocumentation {
    base: ElementBase,
    source: RefCell<Option<String>>,
    text: RefCell<Option<String>>,
}

impl XsdDocumentation {
    /// Create a new, unattached documentation node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::Documentation, weak.clone() as std::rc::Weak<dyn XsdNode>),
            source: RefCell::new(None),
            text: RefCell::new(None),
        })
    }

    /// The source URI, if set.
    pub fn source(&self) -> Option<String> {
        self.source.borrow().clone()
    }

    /// Set the source URI.
    pub fn set_source(&self, source: impl Into<String>) {
        *self.source.borrow_mut() = Some(source.into());
    }

    /// The text body, if set.
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Set the text body.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = Some(text.into());
    }
}

impl XsdNode for XsdDocumentation {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

/// xs:appinfo element
///
/// Machine-oriented annotation content.
#[derive(Debug)]
pub struct XsdAppInfo {
    base: ElementBase,
    source: RefCell<Option<String>>,
    text: RefCell<Option<String>>,
}

impl XsdAppInfo {
    /// Create a new, unattached appinfo node.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            base: ElementBase::new(ElementKind::AppInfo, weak.clone() as std::rc::Weak<dyn XsdNode>),
            source: RefCell::new(None),
            text: RefCell::new(None),
        })
    }

    /// The source URI, if set.
    pub fn source(&self) -> Option<String> {
        self.source.borrow().clone()
    }

    /// Set the source URI.
    pub fn set_source(&self, source: impl Into<String>) {
        *self.source.borrow_mut() = Some(source.into());
    }

    /// The text body, if set.
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Set the text body.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = Some(text.into());
    }
}

impl XsdNode for XsdAppInfo {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}
